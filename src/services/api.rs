use std::sync::Arc;

use crate::domain::advocate::Advocate;
use crate::domain::query::{self, AdvocateQuery, QueryResult};
use crate::forms::advocates::AdvocatesQueryForm;
use crate::repository::AdvocateReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns the requested page of advocates for the `/api/advocates` endpoint.
pub fn list_advocates<R>(repo: &R, form: AdvocatesQueryForm) -> ServiceResult<QueryResult>
where
    R: AdvocateReader + ?Sized,
{
    let query = AdvocateQuery::try_from(form).map_err(|err| {
        log::warn!("Rejected advocates query: {err}");
        ServiceError::from(err)
    })?;

    let advocates = repo.list_advocates()?;

    Ok(query::query(&advocates, &query))
}

/// Returns the full dataset for the seed endpoint. Nothing is written.
pub fn seed_advocates<R>(repo: &R) -> ServiceResult<Arc<[Advocate]>>
where
    R: AdvocateReader + ?Sized,
{
    Ok(repo.list_advocates()?)
}
