//! Record sources for the advocate directory.
//!
//! Every source implements [`AdvocateReader`]. At startup one of the
//! persistent sources is read once into an [`InMemoryRepository`], which is
//! the only reader consulted while serving requests.

use std::sync::Arc;

use crate::db::DbPool;
use crate::domain::advocate::Advocate;
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
pub mod json;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;

/// Read-only access to the full advocate list.
pub trait AdvocateReader {
    /// Returns every advocate in source order.
    fn list_advocates(&self) -> RepositoryResult<Arc<[Advocate]>>;
}

/// Diesel-backed repository reading the `advocates` table.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
