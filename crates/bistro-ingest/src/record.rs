//! Record decoding
//!
//! One line of the menu source:
//!
//! ```text
//! dish_type,name,ingredients,prep_time,price,cuisine_type,additional_attributes
//! ```
//!
//! The discriminator is checked first; a line whose `dish_type` names no
//! course produces no dish and is not an error.

use bistro_menu::{Dish, DishCore, DishKind};

use crate::attributes::{
    decode_appetizer, decode_dessert, decode_main_course, parse_level, split_list,
    token_or_default,
};
use crate::error::RecordError;

/// Top-level field separator
pub const FIELD_SEPARATOR: char = ',';

/// Top-level fields a record must carry
pub const FIELD_COUNT: usize = 7;

/// Decode one record line
///
/// # Errors
/// Returns [`RecordError`] when the line has too few fields or a numeric
/// field is malformed. Unknown enum tokens are not errors.
pub fn parse_record(line: &str) -> Result<Option<Dish>, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    let Ok(kind) = fields[0].parse::<DishKind>() else {
        tracing::debug!(dish_type = fields[0], "unrecognized dish type, skipping record");
        return Ok(None);
    };

    let [_, name, ingredients, prep_time, price, cuisine, attributes, ..] = fields.as_slice()
    else {
        return Err(RecordError::MissingFields {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    let core = DishCore {
        name: (*name).to_string(),
        ingredients: split_list(ingredients),
        prep_time_minutes: parse_level("prep_time", prep_time)?,
        price: parse_price(price)?,
        cuisine: token_or_default(cuisine),
    };

    let dish = match kind {
        DishKind::Appetizer => Dish::appetizer(core, decode_appetizer(attributes)?),
        DishKind::MainCourse => Dish::main_course(core, decode_main_course(attributes)?),
        DishKind::Dessert => Dish::dessert(core, decode_dessert(attributes)?),
    };
    Ok(Some(dish))
}

/// Parse a finite, non-negative price
fn parse_price(raw: &str) -> Result<f64, RecordError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(RecordError::malformed("price", raw)),
    }
}
