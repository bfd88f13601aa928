use std::sync::Arc;

use diesel::prelude::*;

use crate::db::get_connection;
use crate::domain::advocate::Advocate;
use crate::models::advocate::Advocate as DbAdvocate;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdvocateReader, DieselRepository};
use crate::schema::advocates;

impl AdvocateReader for DieselRepository {
    fn list_advocates(&self) -> RepositoryResult<Arc<[Advocate]>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = advocates::table
            .order(advocates::id.asc())
            .select(DbAdvocate::as_select())
            .load::<DbAdvocate>(&mut conn)?;

        let advocates = rows
            .into_iter()
            .map(Advocate::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        log::info!("Loaded {} advocates from the database", advocates.len());

        Ok(advocates.into())
    }
}
