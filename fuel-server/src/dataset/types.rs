//! Backend dataset DTOs.
//!
//! These types map directly to the static dataset JSON extracted from the
//! network's directory publication. They use `Option` liberally because the
//! extractor omits fields rather than writing null values.

use indexmap::IndexMap;
use serde::Deserialize;

/// Reserved group key holding fleet terminals instead of a state's stations.
pub const TERMINALS_KEY: &str = "FLEET_TERMINALS";

/// The grouped backend dataset: upper-case state name (or the reserved
/// [`TERMINALS_KEY`]) → that group's entries.
///
/// `IndexMap` preserves the source order of groups, which the flattener's
/// output ordering contract depends on.
pub type BackendData = IndexMap<String, StateEntry>;

/// One group in the backend dataset.
///
/// Regular state groups carry `stations`; only the reserved terminals group
/// carries `terminals`. Both default to empty so either shape deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateEntry {
    /// Partner-network fuel stops in this state, in source order.
    #[serde(default)]
    pub stations: Vec<RawStation>,

    /// Fleet terminals, in source order. Only present in the reserved group.
    #[serde(default)]
    pub terminals: Vec<RawTerminal>,
}

/// A raw fuel-stop record as extracted from the source.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStation {
    /// Sequence number within the network, e.g. "163".
    pub number: String,

    /// Brand token, e.g. "TA" or "PETRO".
    #[serde(rename = "type")]
    pub type_token: String,

    /// Display name, e.g. "#163 TA Santa Nella".
    pub name: String,

    /// Street address.
    pub address: String,

    /// Combined "City, ST ZIP" string.
    pub city_state_zip: String,

    /// Highway exit information.
    pub exit_info: Option<String>,

    /// Phone number.
    pub phone: Option<String>,

    /// Fax number.
    pub fax: Option<String>,

    /// Opaque external routing identifier.
    pub routing_id: String,

    /// Category token, e.g. "Primary" or "Exclusive".
    pub site_type: String,
}

/// A raw fleet-terminal record as extracted from the source.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTerminal {
    /// Display name.
    pub name: String,

    /// Combined "City, ST ZIP" address, when known.
    pub address: Option<String>,

    /// Phone number.
    pub phone: Option<String>,

    /// Opaque external routing identifier.
    pub routing_id: String,

    /// Amenities in source order.
    pub amenities: Option<Vec<String>>,

    /// Shower count, as reported by the source.
    pub showers: Option<String>,

    /// Parking capacity, as reported by the source.
    pub parking: Option<String>,

    /// Shop service, as reported by the source.
    pub shop: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_order_is_preserved() {
        let json = r#"{
            "TEXAS": {"stations": []},
            "ALABAMA": {"stations": []},
            "CALIFORNIA": {"stations": []}
        }"#;

        let data: BackendData = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["TEXAS", "ALABAMA", "CALIFORNIA"]);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let entry: StateEntry = serde_json::from_str("{}").unwrap();
        assert!(entry.stations.is_empty());
        assert!(entry.terminals.is_empty());
    }

    #[test]
    fn station_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "number": "100",
            "type": "TA",
            "name": "Test Station",
            "address": "123 Main St",
            "city_state_zip": "Houston, TX 77001",
            "routing_id": "FLT-TA100",
            "site_type": "Primary"
        }"#;

        let raw: RawStation = serde_json::from_str(json).unwrap();
        assert_eq!(raw.type_token, "TA");
        assert!(raw.phone.is_none());
        assert!(raw.fax.is_none());
        assert!(raw.exit_info.is_none());
    }
}
