//! Title and category input validation.
//!
//! Both checks are pure and idempotent: feeding a validated value back in
//! yields the same value.

use crate::core::category::{CATEGORY_COUNT, Category};
use crate::error::EntryError;

/// Strip surrounding whitespace and control characters from a title.
///
/// Inner spacing, punctuation and case are preserved.
pub fn validate_title(raw: &str) -> Result<String, EntryError> {
    let title = raw.trim_matches(|c: char| c.is_whitespace() || c.is_control());
    if title.is_empty() {
        return Err(EntryError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Resolve a category token, either a 1-based index or a key.
///
/// Any integer token is an index, including ones too large for `i64`.
pub fn validate_category(raw: &str) -> Result<Category, EntryError> {
    let token = raw.trim();
    if !is_integer(token) {
        return Category::by_name(token);
    }
    match token.parse::<i64>() {
        Ok(index) => Category::by_index(index),
        Err(_) => Err(EntryError::CategoryIndexOutOfRange {
            index: token.to_string(),
            max: CATEGORY_COUNT,
        }),
    }
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
