//! Movie record storage

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::models::MovieRecord;
use crate::error::Result;

/// Read and write access to loaded movie records
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Every stored record in insertion order
    async fn find_all(&self) -> Result<Vec<MovieRecord>>;

    /// Records flagged as winners in insertion order
    async fn find_winners(&self) -> Result<Vec<MovieRecord>>;

    /// Append records, returning how many were stored
    async fn save_all(&self, movies: Vec<MovieRecord>) -> Result<usize>;
}

/// Process-local store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<MovieRecord>>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<MovieRecord>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieStore {
    async fn find_all(&self) -> Result<Vec<MovieRecord>> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_winners(&self) -> Result<Vec<MovieRecord>> {
        let movies = self.movies.read().await;
        Ok(movies.iter().filter(|movie| movie.winner).cloned().collect())
    }

    async fn save_all(&self, movies: Vec<MovieRecord>) -> Result<usize> {
        let count = movies.len();
        let mut stored = self.movies.write().await;
        stored.extend(movies);
        debug!("Stored {} movies ({} total)", count, stored.len());
        Ok(count)
    }
}
