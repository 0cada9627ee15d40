//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Redact wraps a secret so that `{:?}` never prints it in full.
///
/// - Empty values print as `EMPTY`.
/// - Values shorter than 12 bytes print as `***`.
/// - Longer values keep their first and last three characters, so two
///   access keys in a log line can still be told apart.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value)
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        match value.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 || !value.is_char_boundary(3) || !value.is_char_boundary(n - 3) => {
                f.write_str("***")
            }
            n => write!(f, "{}***{}", &value[..3], &value[n - 3..]),
        }
    }
}

/// Check that a required argument was given, and return it.
///
/// Rust strings can't be null, so an empty or whitespace-only value is what
/// counts as "not specified" here.
pub fn require_non_empty<'a>(value: &'a str, name: &str) -> crate::Result<&'a str> {
    if value.trim().is_empty() {
        return Err(crate::Error::invalid_argument(format!(
            "The {name} parameter must be specified."
        )));
    }
    Ok(value)
}
