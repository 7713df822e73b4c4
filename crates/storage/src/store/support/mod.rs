#![forbid(unsafe_code)]

pub(in crate::store) mod query;
pub(in crate::store) mod schema;

use super::StoreError;
use time::Date;
use time::macros::format_description;

pub(in crate::store) fn normalize_non_empty(
    value: &str,
    field: &'static str,
) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(field));
    }
    Ok(trimmed.to_string())
}

/// Primary dates are stored as ISO `YYYY-MM-DD` text; lexicographic ordering
/// on that format matches chronological ordering.
pub(in crate::store) fn normalize_date(
    value: &str,
    field: &'static str,
) -> Result<String, StoreError> {
    let trimmed = value.trim();
    let format = format_description!("[year]-[month]-[day]");
    if Date::parse(trimmed, &format).is_err() {
        return Err(StoreError::InvalidInput(field));
    }
    Ok(trimmed.to_string())
}
