//! Ternary-encoded strings

use crate::errors::{RemoteApiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters a tryte string may contain, in tryte-value order
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A validated tryte string (`9` and `A`-`Z` only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Trytes(String);

impl Trytes {
    /// Validate and wrap a tryte string
    ///
    /// # Errors
    ///
    /// Returns `InvalidTrytes` naming the first offending character.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if let Some((position, c)) = value
            .char_indices()
            .find(|(_, c)| !is_tryte_char(*c))
        {
            return Err(RemoteApiError::InvalidTrytes {
                reason: format!("character {:?} at position {} is not a tryte", c, position),
            });
        }
        Ok(Self(value))
    }

    /// Number of trytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_tryte_char(c: char) -> bool {
    c == '9' || c.is_ascii_uppercase()
}

impl fmt::Display for Trytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Trytes {
    type Err = RemoteApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Trytes {
    type Error = RemoteApiError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Trytes> for String {
    fn from(trytes: Trytes) -> Self {
        trytes.0
    }
}

impl AsRef<str> for Trytes {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_alphabet() {
        let trytes = Trytes::new(TRYTE_ALPHABET).unwrap();
        assert_eq!(trytes.len(), 27);
        assert_eq!(trytes.to_string(), TRYTE_ALPHABET);
    }

    #[test]
    fn test_rejects_lowercase() {
        let err = Trytes::new("ABCd").unwrap_err();
        match err {
            RemoteApiError::InvalidTrytes { reason } => assert!(reason.contains("position 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_digits_other_than_nine() {
        assert!(Trytes::new("ABC1").is_err());
        assert!(Trytes::new("999").is_ok());
    }

    #[test]
    fn test_serde_validates_on_the_way_in() {
        let ok: Trytes = serde_json::from_str("\"ABC9\"").unwrap();
        assert_eq!(ok.as_str(), "ABC9");
        assert!(serde_json::from_str::<Trytes>("\"abc\"").is_err());
    }
}
