use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    extraction,
    models::{
        domain::material::PREVIEW_LENGTH,
        dto::{
            request::UploadMaterialRequest,
            response::{MaterialListResponse, UploadMaterialResponse},
        },
    },
    repositories::MaterialRepository,
};

pub struct MaterialService {
    repository: Arc<dyn MaterialRepository>,
}

impl MaterialService {
    pub fn new(repository: Arc<dyn MaterialRepository>) -> Self {
        Self { repository }
    }

    /// Decodes, extracts and stores an uploaded document. Nothing is written
    /// unless extraction produced enough text.
    pub async fn upload(&self, request: UploadMaterialRequest) -> AppResult<UploadMaterialResponse> {
        request.validate()?;

        let content = decode_file_content(&request.file_content)?;
        let file_type = request.file_type.clone();

        let extracted = tokio::task::spawn_blocking(move || extraction::extract(&content, &file_type))
            .await?
            .map_err(|e| {
                log::warn!(
                    "Extraction failed for '{}' ({}): {}",
                    request.file_name,
                    request.file_type,
                    e
                );
                AppError::from(e)
            })?;

        let material = self
            .repository
            .insert_material(
                &request.file_name,
                &request.file_type.to_uppercase(),
                &extracted.text,
            )
            .await?;

        log::info!(
            "Stored material {} '{}' as {} ({} chars, {} bytes)",
            material.id,
            material.name,
            extracted.format,
            extracted.length,
            extracted.byte_len()
        );

        Ok(UploadMaterialResponse {
            material,
            text_length: extracted.length,
            preview: extracted.preview(PREVIEW_LENGTH),
        })
    }

    pub async fn list_materials(&self) -> AppResult<MaterialListResponse> {
        let materials = self.repository.list_materials().await?;
        Ok(MaterialListResponse { materials })
    }

    pub async fn get_material_text(&self, id: i64) -> AppResult<String> {
        self.repository
            .get_material_text(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material not found".to_string()))
    }
}

/// Accepts plain base64 or a `data:<mime>;base64,` URL, ignoring whitespace.
fn decode_file_content(encoded: &str) -> AppResult<Vec<u8>> {
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => encoded,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}
