//! Conversion from backend DTOs to domain records.
//!
//! This module handles the transformation of the raw grouped dataset into
//! the flat, typed station list, including location parsing and token
//! normalization. Conversion is total: malformed locations become empty
//! fields and unrecognized tokens fall back to fixed defaults, so a
//! defective source row can never abort the load.

use crate::domain::{
    Brand, StateCode, Station, StationKind, StopCategory, TerminalInfo, parse_city_state_zip,
};

use super::types::{BackendData, RawStation, RawTerminal, TERMINALS_KEY};

/// Category assigned when a site-type token is unrecognized.
pub const DEFAULT_CATEGORY: StopCategory = StopCategory::Primary;

/// Brand assigned when a brand token is unrecognized.
pub const DEFAULT_BRAND: Brand = Brand::Ta;

/// Normalize a raw site-type token to a stop tier.
///
/// Lowercased substring match in priority order Exclusive > Primary >
/// Limited; anything else is [`DEFAULT_CATEGORY`].
pub fn normalize_site_type(raw: &str) -> StopCategory {
    let normalized = raw.to_lowercase();
    if normalized.contains("exclusive") {
        StopCategory::Exclusive
    } else if normalized.contains("primary") {
        StopCategory::Primary
    } else if normalized.contains("limited") {
        StopCategory::Limited
    } else {
        DEFAULT_CATEGORY
    }
}

/// Normalize a raw brand token to a brand.
///
/// Uppercased exact match; the network's own "FLEET" token maps to
/// [`Brand::Fleet`], anything unrecognized is [`DEFAULT_BRAND`].
pub fn normalize_brand(raw: &str) -> Brand {
    match raw.to_uppercase().as_str() {
        "TA" => Brand::Ta,
        "PETRO" => Brand::Petro,
        "FLEET" => Brand::Fleet,
        _ => DEFAULT_BRAND,
    }
}

/// Transform a raw fuel stop into a station record.
///
/// `group_key` is the source group's state name; ids are
/// `{group_key}-{number}` and are unique because source numbers are unique
/// within a group.
pub fn transform_station(raw: &RawStation, group_key: &str) -> Station {
    let location = parse_city_state_zip(&raw.city_state_zip);

    Station {
        id: format!("{group_key}-{}", raw.number),
        name: raw.name.clone(),
        address: raw.address.clone(),
        city: location.city,
        state: StateCode::parse_normalized(&location.state).ok(),
        zip: location.zip,
        brand: normalize_brand(&raw.type_token),
        routing_id: raw.routing_id.clone(),
        phone: raw.phone.clone(),
        kind: StationKind::Stop {
            category: normalize_site_type(&raw.site_type),
            exit_info: raw.exit_info.clone(),
            fax: raw.fax.clone(),
        },
    }
}

/// Transform a raw fleet terminal into a station record.
///
/// Terminals have no sequence number; ids are `TERMINAL-{index}` by
/// position. Brand and category are fixed.
pub fn transform_terminal(raw: &RawTerminal, index: usize) -> Station {
    let location = raw
        .address
        .as_deref()
        .map(parse_city_state_zip)
        .unwrap_or_default();

    Station {
        id: format!("TERMINAL-{index}"),
        name: raw.name.clone(),
        address: raw.address.clone().unwrap_or_default(),
        city: location.city,
        state: StateCode::parse_normalized(&location.state).ok(),
        zip: location.zip,
        brand: Brand::Fleet,
        routing_id: raw.routing_id.clone(),
        phone: raw.phone.clone(),
        kind: StationKind::Terminal(TerminalInfo {
            amenities: raw.amenities.clone().unwrap_or_default(),
            showers: raw.showers.clone(),
            parking: raw.parking.clone(),
            shop: raw.shop.clone(),
        }),
    }
}

/// Flatten the grouped backend dataset into a single ordered station list.
///
/// Groups are walked in source order, skipping the reserved terminals
/// group; its terminals are appended after all regular groups. The result
/// order (regular groups in source order with per-group source order
/// intact, then terminals in source order) is an observable contract.
pub fn flatten(data: &BackendData) -> Vec<Station> {
    let mut stations = Vec::new();

    for (group_key, entry) in data {
        if group_key == TERMINALS_KEY {
            continue;
        }
        for raw in &entry.stations {
            stations.push(transform_station(raw, group_key));
        }
    }

    if let Some(entry) = data.get(TERMINALS_KEY) {
        for (index, raw) in entry.terminals.iter().enumerate() {
            stations.push(transform_terminal(raw, index));
        }
    }

    stations
}
