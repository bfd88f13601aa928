use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::{AdvocatesResponse, ErrorResponse, SeedResponse};
use crate::forms::advocates::AdvocatesQueryForm;
use crate::repository::InMemoryRepository;
use crate::services::{ServiceError, api as api_service};

/// Query extractor settings for the `/api` scope. Malformed query strings
/// are answered with the same JSON error body as rejected values.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("Malformed advocates query: {message}");
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
        InternalError::from_response(err, response).into()
    })
}

#[get("/advocates")]
/// Filtered, sorted and paginated advocate listing.
pub async fn api_advocates(
    params: web::Query<AdvocatesQueryForm>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    match api_service::list_advocates(repo.get_ref(), params.into_inner()) {
        Ok(result) => HttpResponse::Ok().json(AdvocatesResponse::from(result)),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        Err(err) => {
            log::error!("Error fetching advocates: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch advocates"))
        }
    }
}

#[post("/seed")]
/// Returns the static dataset. The store is never written to.
pub async fn api_seed(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match api_service::seed_advocates(repo.get_ref()) {
        Ok(advocates) => HttpResponse::Ok().json(SeedResponse::from(advocates)),
        Err(err) => {
            log::error!("Error seeding advocates: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to seed advocates"))
        }
    }
}
