//! Identifier helpers.
//!
//! Identifiers are opaque strings. Values generated by this service are UUID v4, but
//! identifiers received from sessions or paths may carry surrounding whitespace or
//! uppercase hex, so every comparison goes through `normalize_id`.

use uuid::Uuid;

/// Generates a new identifier for a persisted record.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Normalizes an identifier for comparison and lookup.
///
/// Trims surrounding whitespace. Values that parse as a UUID are rendered in
/// canonical lowercase hyphenated form; anything else is returned trimmed.
pub fn normalize_id(value: &str) -> String {
    let trimmed = value.trim();

    match Uuid::parse_str(trimmed) {
        Ok(uuid) => uuid.hyphenated().to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Compares two identifiers after normalization.
pub fn same_id(a: &str, b: &str) -> bool {
    normalize_id(a) == normalize_id(b)
}
