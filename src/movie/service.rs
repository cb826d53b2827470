//! Movie service tying storage, CSV loading and interval aggregation together

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::intervals::compute_award_intervals;
use super::loader::load_movies_from_path;
use super::models::{AwardIntervalResult, MovieRecord};
use super::store::MovieRepository;
use crate::config::AppConfig;
use crate::error::{Error, Result};

pub struct MovieService {
    repository: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    /// Load the configured movie list into the repository
    pub async fn init(&self, config: &AppConfig) -> Result<usize> {
        let path = config.csv_path.as_deref().ok_or_else(|| {
            Error::Config("CSV_PATH not defined in environment or configuration".to_string())
        })?;

        self.load_csv(path).await
    }

    pub async fn load_csv(&self, path: &Path) -> Result<usize> {
        debug!("Loading movie list from {}", path.display());

        let owned = path.to_path_buf();
        let movies = tokio::task::spawn_blocking(move || load_movies_from_path(owned))
            .await
            .map_err(|e| Error::Internal(format!("CSV loading task failed: {e}")))??;

        let saved = self.repository.save_all(movies).await?;
        info!("CSV loaded: {} movies saved", saved);
        Ok(saved)
    }

    pub async fn find_all(&self) -> Result<Vec<MovieRecord>> {
        self.repository.find_all().await
    }

    pub async fn get_award_intervals(&self) -> Result<AwardIntervalResult> {
        let winners = self.repository.find_winners().await?;
        Ok(compute_award_intervals(&winners))
    }
}
