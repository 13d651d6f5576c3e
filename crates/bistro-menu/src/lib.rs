//! Bistro Menu
//!
//! Typed dishes with per-course dietary accommodation.
//!
//! # Core Concepts
//!
//! - [`Dish`]: shared fields ([`DishCore`]) plus one [`Course`] payload
//! - [`DietaryRequest`]: six independent flags a dish can be rewritten to honour
//! - [`Cuisine`], [`DishKind`] and the course enums: strict record tokens
//!
//! # Example
//!
//! ```
//! use bistro_menu::{Appetizer, Cuisine, DietaryRequest, Dish, DishCore, ServingStyle};
//!
//! let mut dish = Dish::appetizer(
//!     DishCore::new("Satay", ["Chicken", "Peanuts", "Beef"], 25, 9.5, Cuisine::Other),
//!     Appetizer::new(ServingStyle::Plated, 3, false),
//! );
//! dish.dietary_accommodate(&DietaryRequest::new().with_vegetarian(true));
//! assert_eq!(dish.ingredients(), ["Beans", "Peanuts", "Mushrooms"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod dietary;
mod dish;
mod token;
pub mod types;

// Re-exports
pub use dietary::DietaryRequest;
pub use dish::{
    Course, Dish, DishCore, ELABORATE_MIN_INGREDIENTS, ELABORATE_MIN_PREP_MINUTES,
};
pub use token::{Cuisine, DishKind, TokenError};
pub use types::{
    Appetizer, CookingMethod, Dessert, FlavorProfile, MainCourse, ServingStyle, SideCategory,
    SideDish,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
