//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use award_intervals::movie::{InMemoryMovieStore, MovieRecord, MovieService};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::NamedTempFile;

pub const CSV_HEADER: &str = "year;title;studios;producers;winner";

/// Path to the bundled movie list
pub fn bundled_movie_list() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("movielist.csv")
}

/// Write `rows` below the standard header into a temporary CSV file
pub fn write_movie_list(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// A service backed by an empty in-memory store
pub fn empty_service() -> Arc<MovieService> {
    Arc::new(MovieService::new(Arc::new(InMemoryMovieStore::new())))
}

/// A service preloaded with `movies`
pub fn service_with(movies: Vec<MovieRecord>) -> Arc<MovieService> {
    Arc::new(MovieService::new(Arc::new(InMemoryMovieStore::with_movies(
        movies,
    ))))
}
