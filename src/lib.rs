//! # Award Intervals
//!
//! Finds the Golden Raspberry producers with the shortest and longest gap
//! between two consecutive "Worst Picture" wins.
//!
//! ## Usage
//!
//! ```bash
//! CSV_PATH=data/movielist.csv award-intervals serve --port 3000
//! award-intervals intervals --csv-path data/movielist.csv --pretty
//! ```
//!
//! ## Modules
//!
//! - `config` - Configuration layering from defaults, TOML, environment and CLI
//! - `error` - Crate error type
//! - `movie` - Movie records, CSV loading, storage, interval aggregation and the HTTP API
pub mod config;
pub mod error;
pub mod movie;

#[cfg(test)]
mod property_tests;

pub use error::{Error, Result};
