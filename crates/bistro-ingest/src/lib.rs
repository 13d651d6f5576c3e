//! Bistro Ingest
//!
//! Decodes a delimited menu source into typed [`Dish`](bistro_menu::Dish)
//! values.
//!
//! # Record Layout
//!
//! ```text
//! dish_type,name,ingredients(;),prep_time,price,cuisine_type,additional_attributes(;)
//! ```
//!
//! | dish_type    | additional_attributes                                   |
//! |--------------|---------------------------------------------------------|
//! | `APPETIZER`  | `serving_style;spiciness_level;vegetarian`              |
//! | `MAINCOURSE` | `cooking_method;protein_type;name:CATEGORY\|...;gluten_free` |
//! | `DESSERT`    | `flavor_profile;sweetness_level;contains_nuts`          |
//!
//! # Example
//!
//! ```
//! use bistro_ingest::read_menu_str;
//!
//! let menu = "dish_type,name,ingredients,prep_time,price,cuisine_type,additional_attributes\n\
//!             DESSERT,Baklava,Walnuts;Honey;Butter,50,5.75,OTHER,SWEET;9;true\n";
//! let dishes: Vec<_> = read_menu_str(menu).collect::<Result<_, _>>().unwrap();
//! assert_eq!(dishes[0].name(), "Baklava");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod attributes;
pub mod error;
pub mod reader;
pub mod record;

// Re-exports for convenience
pub use error::{IngestError, RecordError};
pub use reader::{read_menu_path, read_menu_str, MenuReader};
pub use record::{parse_record, FIELD_COUNT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
