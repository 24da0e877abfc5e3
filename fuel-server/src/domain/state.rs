//! State code type.

use std::fmt;

/// Error returned when parsing an invalid state code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid state code: {reason}")]
pub struct InvalidStateCode {
    reason: &'static str,
}

/// A valid 2-letter US postal state code.
///
/// State codes are always 2 uppercase ASCII letters ("CA", "TX"). This type
/// guarantees that any `StateCode` value is well-formed by construction;
/// whether a code denotes a real state is the alias table's concern.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::StateCode;
///
/// let ca = StateCode::parse("CA").unwrap();
/// assert_eq!(ca.as_str(), "CA");
///
/// // Lowercase is rejected
/// assert!(StateCode::parse("ca").is_err());
///
/// // Wrong length is rejected
/// assert!(StateCode::parse("C").is_err());
/// assert!(StateCode::parse("CAL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode([u8; 2]);

impl StateCode {
    /// Parse a state code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStateCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidStateCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStateCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(StateCode([bytes[0], bytes[1]]))
    }

    /// Parse a state code, uppercasing the input first.
    ///
    /// Accepts "ca", "Ca", "CA"; still rejects wrong lengths and non-letters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStateCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the state code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateCode({})", self.as_str())
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for StateCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid state codes: 2 uppercase ASCII letters
    fn valid_state_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{2}")
            .unwrap()
            .prop_filter("must be 2 chars", |s| s.len() == 2)
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_state_string()) {
            let code = StateCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid state code can be parsed
        #[test]
        fn valid_always_parses(s in valid_state_string()) {
            prop_assert!(StateCode::parse(&s).is_ok());
        }

        /// Mixed-case input always parses via parse_normalized
        #[test]
        fn normalized_accepts_any_case(s in "[a-zA-Z]{2}") {
            prop_assert!(StateCode::parse_normalized(&s).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,1}|[A-Z]{3,10}") {
            prop_assert!(StateCode::parse(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z0-9]{2}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(StateCode::parse(&s).is_err());
        }
    }
}
