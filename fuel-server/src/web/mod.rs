//! Web layer for the fuel-station directory.
//!
//! Provides HTTP endpoints for searching and filtering the station list,
//! plus facet and stats lookups for the frontend.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
