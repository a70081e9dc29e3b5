//! Core library for MC Pro, the studio dashboard.
//!
//! - `store`: JSON values persisted under string keys, with best-effort loads
//! - `calendar`: month grids, the fixed event table, seasonal palettes
//! - `records` and `state`: the typed record sets and their accessors
//! - `timer` and `quote`: the workshop stopwatch and the pricing calculator

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod quote;
pub mod records;
pub mod state;
pub mod store;
pub mod timer;
pub mod validate;

pub use error::{McProError, McProResult};
