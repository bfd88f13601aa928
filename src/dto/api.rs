//! JSON bodies returned by the `/api` endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::advocate::Advocate;
use crate::domain::query::{PageInfo, QueryResult};

/// Successful body of `GET /api/advocates`.
#[derive(Debug, Serialize)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    pub pagination: PageInfo,
    pub success: bool,
}

impl From<QueryResult> for AdvocatesResponse {
    fn from(result: QueryResult) -> Self {
        Self {
            data: result.items,
            pagination: result.pagination,
            success: true,
        }
    }
}

/// Body of `POST /api/seed`.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub advocates: Vec<Advocate>,
}

impl From<Arc<[Advocate]>> for SeedResponse {
    fn from(advocates: Arc<[Advocate]>) -> Self {
        Self {
            advocates: advocates.to_vec(),
        }
    }
}

/// Failure body shared by the API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            success: false,
        }
    }
}
