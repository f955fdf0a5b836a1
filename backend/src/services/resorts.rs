//! Resort service reading the static ski resorts file
//!
//! Resorts are loaded fresh on every query; the file is the source of
//! truth and nothing is cached or mutated in place.

use std::path::PathBuf;

use shared::assembly;
use shared::models::Resort;

use crate::error::AppResult;

/// Service for reading ski resort metadata
#[derive(Clone)]
pub struct ResortService {
    resorts_file: PathBuf,
}

impl ResortService {
    /// Create a new ResortService over the given resorts file
    pub fn new(resorts_file: impl Into<PathBuf>) -> Self {
        Self {
            resorts_file: resorts_file.into(),
        }
    }

    /// Load all resorts from the file.
    ///
    /// An unreadable or malformed file is an error, never an empty list.
    pub async fn list(&self) -> AppResult<Vec<Resort>> {
        let bytes = tokio::fs::read(&self.resorts_file).await?;
        let resorts = serde_json::from_slice(&bytes)?;
        Ok(resorts)
    }

    /// Look up a single resort by id; `None` when the id is unknown.
    pub async fn get(&self, resort_id: &str) -> AppResult<Option<Resort>> {
        let resorts = self.list().await?;
        Ok(assembly::find_by_resort_id(&resorts, resort_id).cloned())
    }
}
