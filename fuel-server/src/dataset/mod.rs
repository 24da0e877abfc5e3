//! Backend dataset: raw DTOs, conversion to domain records, and loading.
//!
//! The dataset is a static JSON blob grouping stations by state, with one
//! reserved group for fleet terminals. This module turns that nested shape
//! into the flat, typed station list the rest of the crate works with.

pub mod convert;
mod error;
mod loader;
pub mod types;

pub use convert::{DEFAULT_BRAND, DEFAULT_CATEGORY, flatten};
pub use error::DatasetError;
pub use loader::load_stations;
pub use types::{BackendData, RawStation, RawTerminal, StateEntry, TERMINALS_KEY};
