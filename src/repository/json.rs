use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::advocate::Advocate;
use crate::repository::AdvocateReader;
use crate::repository::errors::RepositoryResult;

/// Reads advocates from a JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parses a JSON array of advocates, validating every record.
pub fn parse_advocates(raw: &str) -> RepositoryResult<Vec<Advocate>> {
    Ok(serde_json::from_str(raw)?)
}

impl AdvocateReader for JsonFileRepository {
    fn list_advocates(&self) -> RepositoryResult<Arc<[Advocate]>> {
        let raw = fs::read_to_string(&self.path)?;
        let advocates = parse_advocates(&raw)?;

        log::info!(
            "Loaded {} advocates from {}",
            advocates.len(),
            self.path.display()
        );

        Ok(advocates.into())
    }
}
