//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::StationDirectory;
use crate::search::SearchConfig;

/// Shared application state.
///
/// The directory is the immutable dataset snapshot; every request
/// re-filters it through the search module.
#[derive(Clone)]
pub struct AppState {
    /// The loaded station directory
    pub directory: Arc<StationDirectory>,

    /// Search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: StationDirectory, config: SearchConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            config: Arc::new(config),
        }
    }
}
