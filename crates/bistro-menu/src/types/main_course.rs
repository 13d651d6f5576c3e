//! Main Course

use std::fmt;

use crate::dietary::{remove_listed, substitute_non_vegetarian, DietaryRequest, DAIRY_AND_EGG};
use crate::token::token_enum;

use super::yes_no;

/// Protein a main course switches to under vegetarian or vegan requests
pub const PLANT_PROTEIN: &str = "Tofu";

token_enum! {
    /// How a main course is cooked
    CookingMethod as "cooking method" {
        Grilled => "GRILLED", "Grilled",
        Baked => "BAKED", "Baked",
        Boiled => "BOILED", "Boiled",
        Fried => "FRIED", "Fried",
        Steamed => "STEAMED", "Steamed",
        Raw => "RAW", "Raw",
    }
}

impl Default for CookingMethod {
    fn default() -> Self {
        Self::Grilled
    }
}

token_enum! {
    /// Category of a side dish
    SideCategory as "side dish category" {
        Grain => "GRAIN", "Grain",
        Pasta => "PASTA", "Pasta",
        Legume => "LEGUME", "Legume",
        Bread => "BREAD", "Bread",
        Salad => "SALAD", "Salad",
        Soup => "SOUP", "Soup",
        Starches => "STARCHES", "Starches",
        Vegetable => "VEGETABLE", "Vegetable",
    }
}

impl Default for SideCategory {
    fn default() -> Self {
        Self::Grain
    }
}

impl SideCategory {
    /// Categories dropped by a gluten-free request
    #[inline]
    #[must_use]
    pub const fn contains_gluten(self) -> bool {
        matches!(self, Self::Grain | Self::Pasta | Self::Bread | Self::Starches)
    }
}

/// A side dish served with a main course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideDish {
    /// Side dish name
    pub name: String,
    /// Side dish category
    pub category: SideCategory,
}

impl SideDish {
    /// Create side dish
    #[inline]
    pub fn new(name: impl Into<String>, category: SideCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

impl fmt::Display for SideDish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Category: {})", self.name, self.category.label())
    }
}

/// Main-course-specific fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainCourse {
    /// Cooking method
    pub cooking_method: CookingMethod,
    /// Protein, free text
    pub protein_type: String,
    /// Side dishes, in serving order
    pub side_dishes: Vec<SideDish>,
    /// Whether the course is gluten-free
    pub gluten_free: bool,
}

impl MainCourse {
    /// Create main course payload
    #[inline]
    pub fn new(
        cooking_method: CookingMethod,
        protein_type: impl Into<String>,
        side_dishes: Vec<SideDish>,
        gluten_free: bool,
    ) -> Self {
        Self {
            cooking_method,
            protein_type: protein_type.into(),
            side_dishes,
            gluten_free,
        }
    }

    /// Apply vegetarian, vegan and gluten-free rules, in that order
    pub(crate) fn accommodate(&mut self, ingredients: &mut Vec<String>, request: &DietaryRequest) {
        if request.vegetarian {
            PLANT_PROTEIN.clone_into(&mut self.protein_type);
            substitute_non_vegetarian(ingredients);
        }
        if request.vegan {
            PLANT_PROTEIN.clone_into(&mut self.protein_type);
            remove_listed(ingredients, DAIRY_AND_EGG);
        }
        if request.gluten_free {
            self.gluten_free = true;
            self.side_dishes.retain(|side| !side.category.contains_gluten());
        }
    }
}

impl fmt::Display for MainCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cooking Method: {}", self.cooking_method.label())?;
        writeln!(f, "Protein Type: {}", self.protein_type)?;
        f.write_str("Side Dishes: ")?;
        for (i, side) in self.side_dishes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{side}")?;
        }
        writeln!(f)?;
        writeln!(f, "Gluten-Free: {}", yes_no(self.gluten_free))
    }
}
