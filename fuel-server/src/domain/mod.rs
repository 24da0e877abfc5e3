//! Domain types for the fuel-station directory.
//!
//! This module contains the core domain model types that represent
//! validated station data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod brand;
mod category;
mod location;
mod state;
mod station;

pub use brand::Brand;
pub use category::{Category, StopCategory};
pub use location::{Location, parse_city_state_zip};
pub use state::{InvalidStateCode, StateCode};
pub use station::{Station, StationKind, TerminalInfo};
