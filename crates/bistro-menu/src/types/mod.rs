//! Course Payloads
//!
//! Variant-specific fields and dietary rules for each course:
//! - Appetizer: serving style, spiciness, vegetarian flag
//! - Main course: cooking method, protein, side dishes, gluten-free flag
//! - Dessert: flavor profile, sweetness, nut flag

pub mod appetizer;
pub mod dessert;
pub mod main_course;

// Re-export common types
pub use appetizer::{Appetizer, ServingStyle};
pub use dessert::{Dessert, FlavorProfile};
pub use main_course::{CookingMethod, MainCourse, SideCategory, SideDish};

/// Render a boolean the way dish details show it
#[inline]
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
