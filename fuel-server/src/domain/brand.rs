//! Network brand type.

use std::fmt;

/// The closed classification of a station's network affiliation.
///
/// `Ta` and `Petro` are partner truck-stop networks; `Fleet` marks the
/// fleet's own terminals. Like [`crate::domain::Category`], every station
/// resolves to exactly one member and unrecognized source tokens fall back
/// to the configured default at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    Ta,
    Petro,
    Fleet,
}

impl Brand {
    /// All members, for facet enumeration.
    pub const ALL: [Brand; 3] = [Brand::Ta, Brand::Petro, Brand::Fleet];

    /// Returns the display token for this brand.
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Ta => "TA",
            Brand::Petro => "PETRO",
            Brand::Fleet => "Fleet",
        }
    }

    /// Parse a display token back into a brand.
    ///
    /// Exact match on [`Brand::as_str`] tokens; used for filter parameters.
    pub fn parse(s: &str) -> Option<Self> {
        Brand::ALL.into_iter().find(|b| b.as_str() == s)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Brand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_member() {
        for brand in Brand::ALL {
            assert_eq!(Brand::parse(brand.as_str()), Some(brand));
        }
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(Brand::parse("ta"), None);
        assert_eq!(Brand::parse("Petro"), None);
        assert_eq!(Brand::parse(""), None);
        assert_eq!(Brand::parse("all"), None);
    }
}
