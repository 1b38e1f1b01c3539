use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::UploadMaterialRequest,
};

pub async fn list_materials(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = state.material_service.list_materials().await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn upload_material(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<UploadMaterialRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::info!(
        "[{}] upload '{}' ({})",
        get_request_id(&req).unwrap_or_default(),
        request.file_name,
        request.file_type
    );

    let response = state.material_service.upload(request).await?;
    Ok(HttpResponse::Ok().json(response))
}
