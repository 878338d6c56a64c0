//! Types and helpers shared by the TravelLight portal crates.

pub mod config;
pub mod macros;
pub mod models;
pub mod telemetry;
pub mod utils;
