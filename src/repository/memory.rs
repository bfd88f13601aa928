use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::advocate::Advocate;
use crate::repository::AdvocateReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Immutable advocate list held in memory for the lifetime of the process.
///
/// Cloning is cheap; all clones share the same records.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    advocates: Arc<[Advocate]>,
}

impl InMemoryRepository {
    /// Wraps `advocates`, rejecting duplicate ids.
    pub fn new(advocates: Vec<Advocate>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        for id in advocates.iter().filter_map(|advocate| advocate.id) {
            if !seen.insert(id) {
                return Err(RepositoryError::ValidationError(format!(
                    "duplicate advocate id {id}"
                )));
            }
        }

        Ok(Self {
            advocates: advocates.into(),
        })
    }

    /// Reads `source` once and keeps the result.
    pub fn load<R>(source: &R) -> RepositoryResult<Self>
    where
        R: AdvocateReader + ?Sized,
    {
        let advocates = source.list_advocates()?;
        Self::new(advocates.to_vec())
    }

    pub fn len(&self) -> usize {
        self.advocates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advocates.is_empty()
    }
}

impl AdvocateReader for InMemoryRepository {
    fn list_advocates(&self) -> RepositoryResult<Arc<[Advocate]>> {
        Ok(Arc::clone(&self.advocates))
    }
}
