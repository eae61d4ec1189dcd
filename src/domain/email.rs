use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::error::DomainError;

/// Local part: alphanumeric runs joined by single `.`, `_` or `-`.
/// Domain: dot-separated labels that never start or end with `-`, ending in
/// an alphanumeric label of at least two characters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[._-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-+[A-Za-z0-9]+)*\.)+[A-Za-z0-9]{2,}$",
    )
    .expect("Invalid email regex pattern")
});

/// Whether `s` is a well-formed email address.
///
/// The check is purely lexical and never touches the network.
pub fn is_email_valid(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// Validate and wrap an email address
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if is_email_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::InvalidEmail(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
