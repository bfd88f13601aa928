//! HTTP handlers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

pub mod api;
pub mod main;

/// Renders `template` with `context`, answering 500 when rendering fails.
pub fn render_template(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
