use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Difficulty;

pub const DEFAULT_QUESTION_COUNT: i32 = 5;
pub const MAX_QUESTION_COUNT: i32 = 50;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadMaterialRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "fileName is required"))]
    pub file_name: String,

    /// Base64 encoded document bytes.
    #[serde(default)]
    #[validate(length(min = 1, message = "fileContent is required"))]
    pub file_content: String,

    #[serde(default)]
    pub file_type: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[validate(required(message = "materialId is required"), range(min = 1))]
    pub material_id: Option<i64>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = MAX_QUESTION_COUNT))]
    pub question_count: i32,
}

fn default_question_count() -> i32 {
    DEFAULT_QUESTION_COUNT
}
