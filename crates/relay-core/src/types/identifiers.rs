//! Strongly-typed identifiers.

use crate::error::ValidationError;
use std::fmt;

/// Recipient identifier a channel delivers to.
///
/// Always non-blank; surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipient(String);

impl Recipient {
    /// Create a recipient, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankRecipient);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the recipient as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Recipient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Recipient {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_trims() {
        let r = Recipient::new("  +5511999999999 ").unwrap();
        assert_eq!(r.as_str(), "+5511999999999");
        assert_eq!(r.to_string(), "+5511999999999");
    }

    #[test]
    fn test_recipient_rejects_blank() {
        for input in ["", " ", "\t", "\n  \r"] {
            assert_eq!(Recipient::new(input), Err(ValidationError::BlankRecipient));
        }
    }

    #[test]
    fn test_recipient_try_from() {
        let r: Recipient = "user".try_into().unwrap();
        assert_eq!(r.as_ref(), "user");
        assert!(Recipient::try_from(String::new()).is_err());
    }
}
