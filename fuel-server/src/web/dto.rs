//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directory::DirectoryStats;
use crate::domain::{Station, StationKind};

/// Query parameters for the station list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StationQuery {
    /// Free-text search query
    pub q: Option<String>,

    /// State filter: code, full name, or "all"
    pub state: Option<String>,

    /// Category filter: a category token or "all"
    pub category: Option<String>,

    /// Brand filter: a brand token or "all"
    pub brand: Option<String>,
}

/// Query parameters for the suggestion endpoint.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// Partial query to complete
    pub q: String,
}

/// A station in list responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub category: String,
    pub brand: String,
    pub routing_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Highway exit information (regular stops only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_info: Option<String>,

    /// Fax number (regular stops only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,

    /// Amenities (fleet terminals only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,

    /// Shower count (fleet terminals only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showers: Option<String>,

    /// Parking capacity (fleet terminals only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parking: Option<String>,

    /// Shop service (fleet terminals only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop: Option<String>,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        let mut result = Self {
            id: station.id.clone(),
            name: station.name.clone(),
            address: station.address.clone(),
            city: station.city.clone(),
            state: station.state_str().to_string(),
            zip: station.zip.clone(),
            category: station.category().as_str().to_string(),
            brand: station.brand.as_str().to_string(),
            routing_id: station.routing_id.clone(),
            phone: station.phone.clone(),
            exit_info: None,
            fax: None,
            amenities: None,
            showers: None,
            parking: None,
            shop: None,
        };

        match &station.kind {
            StationKind::Stop {
                exit_info, fax, ..
            } => {
                result.exit_info = exit_info.clone();
                result.fax = fax.clone();
            }
            StationKind::Terminal(info) => {
                if !info.amenities.is_empty() {
                    result.amenities = Some(info.amenities.clone());
                }
                result.showers = info.showers.clone();
                result.parking = info.parking.clone();
                result.shop = info.shop.clone();
            }
        }

        result
    }
}

/// Response for the station list endpoint.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Matching stations, in dataset order
    pub stations: Vec<StationResult>,

    /// Number of matching stations
    pub count: usize,
}

/// Response for the facets endpoint: the distinct filter choices present
/// in the dataset.
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    /// State codes, sorted ascending
    pub states: Vec<String>,

    /// Category tokens, sorted ascending
    pub categories: Vec<String>,

    /// Brand tokens, sorted ascending
    pub brands: Vec<String>,
}

/// Response for the suggestion endpoint.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// Response for the stats endpoint.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub exclusive: usize,
    pub primary: usize,
    pub limited: usize,
    pub terminals: usize,
    pub states_covered: usize,

    /// When the snapshot was loaded, RFC 3339
    pub loaded_at: String,
}

impl StatsResponse {
    /// Create from directory stats.
    pub fn from_stats(stats: &DirectoryStats) -> Self {
        Self {
            total: stats.total,
            exclusive: stats.exclusive,
            primary: stats.primary,
            limited: stats.limited,
            terminals: stats.terminals,
            states_covered: stats.states_covered,
            loaded_at: stats.loaded_at.to_rfc3339(),
        }
    }
}

/// Error payload for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
