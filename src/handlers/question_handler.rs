use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::GenerateQuestionsRequest,
};

pub async fn generate_questions(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::info!(
        "[{}] generate {} {} questions for material {:?}",
        get_request_id(&req).unwrap_or_default(),
        request.question_count,
        request.difficulty,
        request.material_id
    );

    let response = state.question_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn list_material_questions(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .question_service
        .list_for_material(id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
