//! Mock repository implementations for isolating services in tests.

use std::sync::Arc;

use mockall::mock;

use crate::domain::advocate::Advocate;
use crate::repository::AdvocateReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl AdvocateReader for Repository {
        fn list_advocates(&self) -> RepositoryResult<Arc<[Advocate]>>;
    }
}
