//! Fuel-station directory server.
//!
//! A web application that answers: "where can I fuel on this route?"
//! It searches and filters a static directory of partner truck stops and
//! fleet terminals by free text, state, category, and brand.

pub mod dataset;
pub mod directory;
pub mod domain;
pub mod search;
pub mod states;
pub mod web;
