//! Dietary Requests
//!
//! The request flags plus the two ingredient-list rewrites every course
//! shares: ordinal substitution of non-vegetarian ingredients, and plain
//! removal of everything on a blocklist.

use serde::{Deserialize, Serialize};

/// Ingredients that make a dish non-vegetarian
pub const NON_VEGETARIAN: &[&str] = &[
    "Meat", "Chicken", "Fish", "Beef", "Pork", "Lamb", "Shrimp", "Bacon",
];

/// Ingredients containing gluten
pub const GLUTEN: &[&str] = &[
    "Wheat", "Flour", "Bread", "Pasta", "Barley", "Rye", "Oats", "Crust",
];

/// Tree nuts and peanuts
pub const NUTS: &[&str] = &[
    "Almonds",
    "Walnuts",
    "Pecans",
    "Hazelnuts",
    "Peanuts",
    "Cashews",
    "Pistachios",
];

/// Dairy and egg ingredients
pub const DAIRY_AND_EGG: &[&str] = &["Milk", "Eggs", "Cheese", "Butter", "Cream", "Yogurt"];

/// Replacements for the 1st and 2nd non-vegetarian match; later matches are dropped
const SUBSTITUTES: [&str; 2] = ["Beans", "Mushrooms"];

/// Six independent dietary flags
///
/// Any combination may be set. Each course honours only the flags it has a
/// rule for and ignores the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryRequest {
    /// Replace meat and fish
    pub vegetarian: bool,
    /// Drop dairy and eggs
    pub vegan: bool,
    /// Drop gluten
    pub gluten_free: bool,
    /// Drop nuts
    pub nut_free: bool,
    /// Tone down spiciness
    pub low_sodium: bool,
    /// Tone down sweetness
    pub low_sugar: bool,
}

impl DietaryRequest {
    /// Request with no flags set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request with every flag set
    #[must_use]
    pub fn all() -> Self {
        Self {
            vegetarian: true,
            vegan: true,
            gluten_free: true,
            nut_free: true,
            low_sodium: true,
            low_sugar: true,
        }
    }

    /// With vegetarian flag
    #[inline]
    #[must_use]
    pub fn with_vegetarian(mut self, on: bool) -> Self {
        self.vegetarian = on;
        self
    }

    /// With vegan flag
    #[inline]
    #[must_use]
    pub fn with_vegan(mut self, on: bool) -> Self {
        self.vegan = on;
        self
    }

    /// With gluten-free flag
    #[inline]
    #[must_use]
    pub fn with_gluten_free(mut self, on: bool) -> Self {
        self.gluten_free = on;
        self
    }

    /// With nut-free flag
    #[inline]
    #[must_use]
    pub fn with_nut_free(mut self, on: bool) -> Self {
        self.nut_free = on;
        self
    }

    /// With low-sodium flag
    #[inline]
    #[must_use]
    pub fn with_low_sodium(mut self, on: bool) -> Self {
        self.low_sodium = on;
        self
    }

    /// With low-sugar flag
    #[inline]
    #[must_use]
    pub fn with_low_sugar(mut self, on: bool) -> Self {
        self.low_sugar = on;
        self
    }

    /// Flags set in either request
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            vegetarian: self.vegetarian || other.vegetarian,
            vegan: self.vegan || other.vegan,
            gluten_free: self.gluten_free || other.gluten_free,
            nut_free: self.nut_free || other.nut_free,
            low_sodium: self.low_sodium || other.low_sodium,
            low_sugar: self.low_sugar || other.low_sugar,
        }
    }

    /// True when no flag is set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Substitute non-vegetarian ingredients in a single left-to-right pass
///
/// One counter spans the whole scan: the first match becomes `"Beans"`, the
/// second `"Mushrooms"`, every later match is removed. Returns the number of
/// matches found.
pub fn substitute_non_vegetarian(ingredients: &mut Vec<String>) -> usize {
    let mut found = 0;
    ingredients.retain_mut(|ingredient| {
        if !NON_VEGETARIAN.contains(&ingredient.as_str()) {
            return true;
        }
        let keep = match SUBSTITUTES.get(found) {
            Some(substitute) => {
                *ingredient = (*substitute).to_string();
                true
            }
            None => false,
        };
        found += 1;
        keep
    });
    found
}

/// Remove every ingredient on `blocklist`, returning how many were removed
pub fn remove_listed(ingredients: &mut Vec<String>, blocklist: &[&str]) -> usize {
    let before = ingredients.len();
    ingredients.retain(|ingredient| !blocklist.contains(&ingredient.as_str()));
    before - ingredients.len()
}
