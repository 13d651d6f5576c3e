//! Bistro Kitchen
//!
//! A kitchen that owns its dishes in an equality-based [`Bag`] and keeps
//! running aggregates over them.
//!
//! # Architecture
//!
//! ```text
//! menu source → bistro-ingest → Dish → Kitchen::order → Bag<Dish>
//!                                          │
//!                     report / tally / evict / dietary adjustment
//! ```
//!
//! # Example
//!
//! ```
//! use bistro_kitchen::{Kitchen, KitchenConfig};
//! use bistro_menu::DietaryRequest;
//!
//! let menu = "dish_type,name,ingredients,prep_time,price,cuisine_type,additional_attributes\n\
//!             APPETIZER,Samosa,Potato;Peas;Lamb,30,4.00,INDIAN,PLATED;5;false\n";
//! let mut kitchen = Kitchen::load_str(menu, KitchenConfig::default()).unwrap();
//! kitchen.apply_dietary_adjustment(&DietaryRequest::new().with_vegetarian(true));
//!
//! assert_eq!(kitchen.tally_cuisine("INDIAN"), 1);
//! assert!(kitchen.render_menu().contains("Ingredients: Potato, Peas, Beans\n"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod bag;
pub mod config;
pub mod kitchen;
pub mod report;

// Re-exports for convenience
pub use bag::{Bag, BagPolicy, BagRejection};
pub use config::{ConfigError, InvalidRecordPolicy, KitchenConfig};
pub use kitchen::Kitchen;
pub use report::KitchenReport;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
