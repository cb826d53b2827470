//! Golden Raspberry movie records and producer award intervals
//!
//! Movie records are loaded from CSV into an in-memory store at startup;
//! the interval aggregation runs over the stored winners on every request.

pub mod api_server;
pub mod intervals;
pub mod loader;
pub mod models;
pub mod service;
pub mod store;

pub use api_server::ApiServer;
pub use intervals::compute_award_intervals;
pub use models::*;
pub use service::MovieService;
pub use store::{InMemoryMovieStore, MovieRepository};
