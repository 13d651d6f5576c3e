//! Appetizer Course

use std::fmt;

use crate::dietary::{remove_listed, substitute_non_vegetarian, DietaryRequest, GLUTEN};
use crate::token::token_enum;

use super::yes_no;

/// Spiciness removed by a low-sodium request
pub const LOW_SODIUM_SPICE_STEP: u32 = 2;

token_enum! {
    /// How an appetizer reaches the table
    ServingStyle as "serving style" {
        Plated => "PLATED", "Plated",
        FamilyStyle => "FAMILY_STYLE", "Family Style",
        Buffet => "BUFFET", "Buffet",
    }
}

impl Default for ServingStyle {
    fn default() -> Self {
        Self::Plated
    }
}

/// Appetizer-specific fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appetizer {
    /// Serving style
    pub serving_style: ServingStyle,
    /// Spiciness, never below zero
    pub spiciness_level: u32,
    /// Whether the appetizer is vegetarian
    pub vegetarian: bool,
}

impl Appetizer {
    /// Create appetizer payload
    #[inline]
    #[must_use]
    pub fn new(serving_style: ServingStyle, spiciness_level: u32, vegetarian: bool) -> Self {
        Self {
            serving_style,
            spiciness_level,
            vegetarian,
        }
    }

    /// Apply vegetarian, low-sodium and gluten-free rules, in that order
    pub(crate) fn accommodate(&mut self, ingredients: &mut Vec<String>, request: &DietaryRequest) {
        if request.vegetarian {
            self.vegetarian = true;
            substitute_non_vegetarian(ingredients);
        }
        if request.low_sodium {
            self.spiciness_level = self.spiciness_level.saturating_sub(LOW_SODIUM_SPICE_STEP);
        }
        if request.gluten_free {
            remove_listed(ingredients, GLUTEN);
        }
    }
}

impl fmt::Display for Appetizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Serving Style: {}", self.serving_style.label())?;
        writeln!(f, "Spiciness Level: {}", self.spiciness_level)?;
        writeln!(f, "Vegetarian: {}", yes_no(self.vegetarian))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn vegetarian_then_gluten_free() {
        let mut appetizer = Appetizer::new(ServingStyle::Buffet, 3, false);
        let mut ingredients = list(&["Bread", "Shrimp", "Garlic", "Bacon", "Meat"]);
        let request = DietaryRequest::new().with_vegetarian(true).with_gluten_free(true);

        appetizer.accommodate(&mut ingredients, &request);

        assert!(appetizer.vegetarian);
        assert_eq!(ingredients, list(&["Beans", "Garlic", "Mushrooms"]));
    }

    #[test]
    fn low_sodium_clamps_at_zero() {
        let mut appetizer = Appetizer::new(ServingStyle::Plated, 1, false);
        let request = DietaryRequest::new().with_low_sodium(true);

        appetizer.accommodate(&mut Vec::new(), &request);
        assert_eq!(appetizer.spiciness_level, 0);

        appetizer.accommodate(&mut Vec::new(), &request);
        assert_eq!(appetizer.spiciness_level, 0);
    }

    #[test]
    fn ignores_flags_without_rules() {
        let mut appetizer = Appetizer::new(ServingStyle::Plated, 5, false);
        let mut ingredients = list(&["Cheese", "Almonds"]);
        let request = DietaryRequest::new()
            .with_vegan(true)
            .with_nut_free(true)
            .with_low_sugar(true);

        appetizer.accommodate(&mut ingredients, &request);

        assert_eq!(appetizer, Appetizer::new(ServingStyle::Plated, 5, false));
        assert_eq!(ingredients, list(&["Cheese", "Almonds"]));
    }

    #[test]
    fn display_lines() {
        let appetizer = Appetizer::new(ServingStyle::FamilyStyle, 4, true);
        assert_eq!(
            appetizer.to_string(),
            "Serving Style: Family Style\nSpiciness Level: 4\nVegetarian: Yes\n"
        );
    }
}
