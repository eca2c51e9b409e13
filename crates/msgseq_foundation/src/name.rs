//! Naming rules shared by fields, tags, and records.
//!
//! Every name starts with a letter and contains no whitespace. Field names
//! may carry a leading `.` (header fields) and tag names a leading `@`.
//! Names compare case-insensitively everywhere.

use crate::error::{Error, Result};

/// Prefix marking a header field.
pub const HEADER_PREFIX: char = '.';

/// Optional prefix on tag names.
pub const TAG_PREFIX: char = '@';

/// Separators accepted between path segments.
pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Validates the plain identifier grammar: a letter followed by non-whitespace.
pub fn validate_identifier(name: &str) -> Result<()> {
    check_body(name, name)
}

// Applies the identifier grammar to `body`, reporting errors against `name`.
fn check_body(name: &str, body: &str) -> Result<()> {
    let Some(first) = body.chars().next() else {
        return Err(Error::invalid_name(name, "name is empty"));
    };
    if !first.is_alphabetic() {
        return Err(Error::invalid_name(name, "name must start with a letter"));
    }
    if body.chars().any(char::is_whitespace) {
        return Err(Error::invalid_name(name, "name contains whitespace"));
    }
    Ok(())
}

/// Validates a field name: an optional `.` followed by an identifier that
/// contains no path separator.
pub fn validate_field_name(name: &str) -> Result<()> {
    let body = name.strip_prefix(HEADER_PREFIX).unwrap_or(name);
    if body.is_empty() && !name.is_empty() {
        return Err(Error::invalid_name(name, "header name has no body"));
    }
    check_body(name, body)?;
    if body.contains(PATH_SEPARATORS) {
        return Err(Error::invalid_name(name, "name contains a path separator"));
    }
    Ok(())
}

/// Validates a tag name: an optional `@` followed by an identifier.
pub fn validate_tag_name(name: &str) -> Result<()> {
    let body = name.strip_prefix(TAG_PREFIX).unwrap_or(name);
    if body.is_empty() && !name.is_empty() {
        return Err(Error::invalid_name(name, "tag name has no body"));
    }
    check_body(name, body)
}

/// Returns true if the name marks a header field.
#[must_use]
pub fn is_header_name(name: &str) -> bool {
    name.starts_with(HEADER_PREFIX)
}

/// Case-insensitive name comparison.
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Lookup key for a name: its lowercase form.
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Splits a path on either separator.
///
/// Leading and trailing separators are ignored; interior empty segments are
/// kept so callers can reject them.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.trim_matches(PATH_SEPARATORS)
        .split(PATH_SEPARATORS)
        .collect()
}
