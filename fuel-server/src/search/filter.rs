//! Exact-match narrowing by state, category, and brand.

use crate::domain::{Brand, Category, Station};
use crate::states;

/// Returns the filter value when it actually constrains the result.
///
/// Absent, empty, and the "all" sentinel all mean "no constraint".
fn active(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty() && *f != "all")
}

/// Narrow a station list by state and/or category.
///
/// The state criterion accepts a 2-letter code or a full state name
/// (resolved through the alias table), case-insensitively. The category
/// criterion is exact equality against the closed category set; a token
/// that names no category matches nothing. Both are pure intersections.
pub fn filter_by_state_and_category<'a>(
    stations: &[&'a Station],
    state_filter: Option<&str>,
    category_filter: Option<&str>,
) -> Vec<&'a Station> {
    let mut filtered = stations.to_vec();

    if let Some(selected) = active(state_filter) {
        let aliased = states::code_for_name(selected);
        filtered.retain(|station| {
            station.state_str().eq_ignore_ascii_case(selected)
                || (aliased.is_some() && station.state == aliased)
        });
    }

    if let Some(selected) = active(category_filter) {
        let category = Category::parse(selected);
        filtered.retain(|station| Some(station.category()) == category);
    }

    filtered
}

/// Narrow a station list by brand.
///
/// Exact equality against the closed brand set; a token that names no
/// brand matches nothing. Pure intersection.
pub fn filter_by_brand<'a>(
    stations: &[&'a Station],
    brand_filter: Option<&str>,
) -> Vec<&'a Station> {
    match active(brand_filter) {
        Some(selected) => {
            let brand = Brand::parse(selected);
            stations
                .iter()
                .filter(|station| Some(station.brand) == brand)
                .copied()
                .collect()
        }
        None => stations.to_vec(),
    }
}
