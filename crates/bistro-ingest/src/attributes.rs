//! Course attribute blocks
//!
//! The last record field holds the course-specific attributes, separated by
//! `;`. Main courses nest one level deeper: side dishes are separated by `|`
//! and each is `name:category`.
//!
//! Unknown enum tokens fall back to the enum's default. Missing text and
//! flag attributes decode as empty / `false`; missing numbers are errors.

use std::str::FromStr;

use bistro_menu::{Appetizer, Dessert, MainCourse, SideDish, TokenError};

use crate::error::RecordError;

/// Separator between attributes and between ingredients
pub const LIST_SEPARATOR: char = ';';
/// Separator between side dishes
pub const SIDE_DISH_SEPARATOR: char = '|';
/// Separator between a side dish name and its category
pub const SIDE_CATEGORY_SEPARATOR: char = ':';

/// Decode `PLATED;3;true`
pub(crate) fn decode_appetizer(block: &str) -> Result<Appetizer, RecordError> {
    let attrs = Attributes::split(block);
    Ok(Appetizer::new(
        token_or_default(attrs.get(0)),
        parse_level("spiciness_level", attrs.get(1))?,
        parse_flag(attrs.get(2)),
    ))
}

/// Decode `GRILLED;Beef;Fries:STARCHES|Salad:SALAD;false`
pub(crate) fn decode_main_course(block: &str) -> Result<MainCourse, RecordError> {
    let attrs = Attributes::split(block);
    Ok(MainCourse::new(
        token_or_default(attrs.get(0)),
        attrs.get(1),
        decode_side_dishes(attrs.get(2)),
        parse_flag(attrs.get(3)),
    ))
}

/// Decode `SWEET;7;false`
pub(crate) fn decode_dessert(block: &str) -> Result<Dessert, RecordError> {
    let attrs = Attributes::split(block);
    Ok(Dessert::new(
        token_or_default(attrs.get(0)),
        parse_level("sweetness_level", attrs.get(1))?,
        parse_flag(attrs.get(2)),
    ))
}

/// Decode `name:CATEGORY|name:CATEGORY`
pub fn decode_side_dishes(block: &str) -> Vec<SideDish> {
    block
        .split_terminator(SIDE_DISH_SEPARATOR)
        .map(|entry| {
            let mut parts = entry.split(SIDE_CATEGORY_SEPARATOR);
            let name = parts.next().unwrap_or_default();
            let category = token_or_default(parts.next().unwrap_or_default());
            SideDish::new(name, category)
        })
        .collect()
}

/// Split a `;`-separated list, dropping one trailing empty entry
pub fn split_list(field: &str) -> Vec<String> {
    field
        .split_terminator(LIST_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// `true` only for the exact text `"true"`
#[inline]
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

/// Parse an enum token, falling back to the enum's default
pub fn token_or_default<T>(raw: &str) -> T
where
    T: FromStr<Err = TokenError> + Default,
{
    raw.parse().unwrap_or_else(|err: TokenError| {
        tracing::debug!(%err, "using default");
        T::default()
    })
}

/// Parse a non-negative integer level
pub(crate) fn parse_level(field: &'static str, raw: &str) -> Result<u32, RecordError> {
    raw.trim()
        .parse()
        .map_err(|_| RecordError::malformed(field, raw))
}

/// Positional view over an attribute block
struct Attributes<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Attributes<'a> {
    fn split(block: &'a str) -> Self {
        Self {
            parts: block.split(LIST_SEPARATOR).collect(),
        }
    }

    /// Attribute at `index`, empty when absent
    fn get(&self, index: usize) -> &'a str {
        self.parts.get(index).copied().unwrap_or_default()
    }
}
