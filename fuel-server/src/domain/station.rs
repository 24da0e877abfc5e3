//! The canonical station record.

use super::{Brand, Category, StateCode, StopCategory};

/// Fields that only exist for one kind of station.
///
/// Regular stops carry highway exit and fax details; fleet terminals carry
/// yard amenities. Keeping them in a variant means code can never read a
/// field that is meaningless for the record's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationKind {
    /// A partner-network fuel stop.
    Stop {
        /// Service tier of the stop.
        category: StopCategory,
        /// Highway exit information, e.g. "I-5, Exit 407".
        exit_info: Option<String>,
        /// Fax number.
        fax: Option<String>,
    },
    /// A fleet-operated terminal.
    Terminal(TerminalInfo),
}

/// Amenity details for a fleet terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalInfo {
    /// Amenities in source order.
    pub amenities: Vec<String>,
    /// Shower count, as reported by the source.
    pub showers: Option<String>,
    /// Parking capacity, as reported by the source.
    pub parking: Option<String>,
    /// Shop service, as reported by the source.
    pub shop: Option<String>,
}

/// One fuel-stop or terminal entry in the directory.
///
/// Records are built once from the backend dataset (see `dataset::convert`)
/// and never mutated. `id` is unique across the whole directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Unique identifier, derived from the source group and sequence number.
    pub id: String,
    /// Display name, e.g. "#163 TA Santa Nella".
    pub name: String,
    /// Street address.
    pub address: String,
    /// City name; empty when the source location string was malformed.
    pub city: String,
    /// Two-letter state code; `None` when the source location string was
    /// malformed or its state token was not a valid code.
    pub state: Option<StateCode>,
    /// ZIP code; empty when unparseable.
    pub zip: String,
    /// Network affiliation.
    pub brand: Brand,
    /// Opaque external routing identifier.
    pub routing_id: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Kind-specific fields.
    pub kind: StationKind,
}

impl Station {
    /// The display/filter category of this station, derived from its kind.
    pub fn category(&self) -> Category {
        match &self.kind {
            StationKind::Stop { category, .. } => (*category).into(),
            StationKind::Terminal(_) => Category::FleetTerminal,
        }
    }

    /// The state code as a string, empty when absent.
    pub fn state_str(&self) -> &str {
        self.state.as_ref().map(StateCode::as_str).unwrap_or("")
    }

    /// Whether this station is a fleet terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StationKind::Terminal(_))
    }
}
