pub mod health_handler;
pub mod material_handler;
pub mod question_handler;

use actix_cors::Cors;
use actix_web::{
    error::JsonPayloadError,
    http::header::{self, HeaderName},
    web, HttpRequest, HttpResponse,
};

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live, health_check_ready};

/// Registers every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(
            web::resource("/api/materials")
                .route(web::get().to(material_handler::list_materials))
                .route(web::post().to(material_handler::upload_material))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/materials/{id}/questions")
                .route(web::get().to(question_handler::list_material_questions))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/questions/generate")
                .route(web::post().to(question_handler::generate_questions))
                .default_service(web::to(method_not_allowed)),
        );
}

/// JSON extractor settings: uploads carry whole documents inline, and
/// malformed bodies are reported in the same shape as every other error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            AppError::ValidationError(format!("Invalid request body: {}", err)).into()
        })
}

/// Browser clients may call from any origin.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, HeaderName::from_static("x-user-id")])
        .max_age(86400)
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}
