//! Search and filtering over the station list.
//!
//! Three independent narrowing stages: free-text search, state/category
//! filter, and brand filter. Each is a pure intersection over the input,
//! so the composed result does not depend on stage order; they are run
//! search-first because the query usually narrows hardest.

mod config;
mod filter;
mod query;
mod suggest;

pub use config::SearchConfig;
pub use filter::{filter_by_brand, filter_by_state_and_category};
pub use query::search_stations;
pub use suggest::suggestions;

use crate::domain::Station;

/// Compute the visible station set for a query plus filter criteria.
///
/// Applies search, then the state/category filter, then the brand filter.
/// Absent, empty, and `"all"` criteria are identity stages; the result
/// preserves dataset order.
pub fn visible_stations<'a>(
    all: &'a [Station],
    search_query: &str,
    state_filter: Option<&str>,
    category_filter: Option<&str>,
    brand_filter: Option<&str>,
    config: &SearchConfig,
) -> Vec<&'a Station> {
    let refs: Vec<&Station> = all.iter().collect();
    let result = search_stations(&refs, search_query, config);
    let result = filter_by_state_and_category(&result, state_filter, category_filter);
    filter_by_brand(&result, brand_filter)
}
