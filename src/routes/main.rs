use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, get, web};
use tera::{Context, Tera};

use crate::forms::advocates::AdvocatesQueryForm;
use crate::repository::InMemoryRepository;
use crate::routes::render_template;
use crate::services::{ServiceError, main as main_service};

#[get("/")]
/// Searchable advocates table.
pub async fn show_index(
    req: HttpRequest,
    params: web::Query<AdvocatesQueryForm>,
    repo: web::Data<InMemoryRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = Context::new();

    let status = match main_service::load_index_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            context.insert("page", &data);
            StatusCode::OK
        }
        Err(ServiceError::Validation(message)) => {
            context.insert("error", &message);
            context.insert("retry_href", "/");
            StatusCode::BAD_REQUEST
        }
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            context.insert("error", "Failed to fetch advocates");
            context.insert("retry_href", &req.uri().to_string());
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    render_template(&tera, "main/index.html", &context, status)
}
