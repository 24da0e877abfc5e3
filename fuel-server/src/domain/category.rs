//! Station category types.

use std::fmt;

/// The service tier of a regular fuel stop.
///
/// Fleet terminals are not a tier; they are a different kind of station
/// entirely (see [`crate::domain::StationKind`]). Code that deals with
/// regular stops uses this type so a terminal category can never leak in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopCategory {
    /// Contracted exclusive-use site.
    Exclusive,
    /// Standard network site.
    Primary,
    /// Limited-service site.
    Limited,
}

impl StopCategory {
    /// Returns the display token for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopCategory::Exclusive => "Exclusive",
            StopCategory::Primary => "Primary",
            StopCategory::Limited => "Limited",
        }
    }
}

impl fmt::Display for StopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed classification used for filtering and display.
///
/// Every station resolves to exactly one of these; there is no
/// null/unknown member. Unrecognized source tokens fall back to the
/// configured default at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Exclusive,
    Primary,
    Limited,
    /// A fleet-operated terminal rather than a partner fuel stop.
    FleetTerminal,
}

impl Category {
    /// All members, for facet enumeration.
    pub const ALL: [Category; 4] = [
        Category::Exclusive,
        Category::Primary,
        Category::Limited,
        Category::FleetTerminal,
    ];

    /// Returns the display token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exclusive => "Exclusive",
            Category::Primary => "Primary",
            Category::Limited => "Limited",
            Category::FleetTerminal => "Fleet Terminal",
        }
    }

    /// Parse a display token back into a category.
    ///
    /// Exact match on the tokens produced by [`Category::as_str`]; used for
    /// filter parameters, not for normalizing raw source data (see
    /// `dataset::convert` for that).
    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl From<StopCategory> for Category {
    fn from(tier: StopCategory) -> Self {
        match tier {
            StopCategory::Exclusive => Category::Exclusive,
            StopCategory::Primary => Category::Primary,
            StopCategory::Limited => Category::Limited,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Category {
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
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(Category::parse("exclusive"), None);
        assert_eq!(Category::parse("Terminal"), None);
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("all"), None);
    }

    #[test]
    fn stop_category_converts_to_matching_category() {
        assert_eq!(Category::from(StopCategory::Exclusive), Category::Exclusive);
        assert_eq!(Category::from(StopCategory::Primary), Category::Primary);
        assert_eq!(Category::from(StopCategory::Limited), Category::Limited);
    }

    #[test]
    fn display_tokens() {
        assert_eq!(Category::FleetTerminal.to_string(), "Fleet Terminal");
        assert_eq!(StopCategory::Primary.to_string(), "Primary");
    }
}
