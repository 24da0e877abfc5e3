//! Search configuration.

/// Configuration parameters for search and suggestions.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum query length before non-state fields are searched.
    /// Prevents a short state-like fragment from matching inside a city
    /// name ("CA" vs "Cartersville").
    pub min_query_len: usize,

    /// Maximum number of search suggestions to return.
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            max_suggestions: 5,
        }
    }
}
