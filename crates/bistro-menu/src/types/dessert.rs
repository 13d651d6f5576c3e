//! Dessert Course

use std::fmt;

use crate::dietary::{remove_listed, DietaryRequest, DAIRY_AND_EGG, NUTS};
use crate::token::token_enum;

use super::yes_no;

/// Sweetness removed by a low-sugar request
pub const LOW_SUGAR_SWEETNESS_STEP: u32 = 3;

token_enum! {
    /// Dominant taste of a dessert
    FlavorProfile as "flavor profile" {
        Sweet => "SWEET", "Sweet",
        Bitter => "BITTER", "Bitter",
        Sour => "SOUR", "Sour",
        Salty => "SALTY", "Salty",
        Umami => "UMAMI", "Umami",
    }
}

impl Default for FlavorProfile {
    fn default() -> Self {
        Self::Sweet
    }
}

/// Dessert-specific fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dessert {
    /// Flavor profile
    pub flavor_profile: FlavorProfile,
    /// Sweetness, never below zero
    pub sweetness_level: u32,
    /// Whether the dessert contains nuts
    pub contains_nuts: bool,
}

impl Dessert {
    /// Create dessert payload
    #[inline]
    #[must_use]
    pub fn new(flavor_profile: FlavorProfile, sweetness_level: u32, contains_nuts: bool) -> Self {
        Self {
            flavor_profile,
            sweetness_level,
            contains_nuts,
        }
    }

    /// Apply nut-free, low-sugar and vegan rules, in that order
    pub(crate) fn accommodate(&mut self, ingredients: &mut Vec<String>, request: &DietaryRequest) {
        if request.nut_free {
            self.contains_nuts = false;
            remove_listed(ingredients, NUTS);
        }
        if request.low_sugar {
            self.sweetness_level = self.sweetness_level.saturating_sub(LOW_SUGAR_SWEETNESS_STEP);
        }
        if request.vegan {
            remove_listed(ingredients, DAIRY_AND_EGG);
        }
    }
}

impl fmt::Display for Dessert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flavor Profile: {}", self.flavor_profile.label())?;
        writeln!(f, "Sweetness Level: {}", self.sweetness_level)?;
        writeln!(f, "Contains Nuts: {}", yes_no(self.contains_nuts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn nut_free_and_vegan() {
        let mut dessert = Dessert::new(FlavorProfile::Sweet, 8, true);
        let mut ingredients = list(&["Almonds", "Sugar", "Butter", "Pecans", "Eggs", "Cocoa"]);
        let request = DietaryRequest::new().with_nut_free(true).with_vegan(true);

        dessert.accommodate(&mut ingredients, &request);

        assert!(!dessert.contains_nuts);
        assert_eq!(ingredients, list(&["Sugar", "Cocoa"]));
    }

    #[test]
    fn low_sugar_steps_down_by_three() {
        let mut dessert = Dessert::new(FlavorProfile::Bitter, 7, false);
        let request = DietaryRequest::new().with_low_sugar(true);

        dessert.accommodate(&mut Vec::new(), &request);
        assert_eq!(dessert.sweetness_level, 4);
        dessert.accommodate(&mut Vec::new(), &request);
        dessert.accommodate(&mut Vec::new(), &request);
        assert_eq!(dessert.sweetness_level, 0);
    }

    #[test]
    fn every_flavor_has_its_own_label() {
        let labels: Vec<_> = FlavorProfile::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Sweet", "Bitter", "Sour", "Salty", "Umami"]);
    }

    #[test]
    fn display_lines() {
        let dessert = Dessert::new(FlavorProfile::Umami, 2, false);
        assert_eq!(
            dessert.to_string(),
            "Flavor Profile: Umami\nSweetness Level: 2\nContains Nuts: No\n"
        );
    }
}
