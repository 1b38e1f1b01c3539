use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Difficulty, Material, MaterialSummary, Question};

#[derive(Debug, Serialize)]
pub struct UploadMaterialResponse {
    pub material: Material,
    pub text_length: usize,
    pub preview: String,
}

#[derive(Debug, Serialize)]
pub struct MaterialListResponse {
    pub materials: Vec<MaterialSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub text: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            text: question.text,
            difficulty: question.difficulty,
            created_at: question.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<QuestionDto>,
    pub count: usize,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub material_id: i64,
    pub questions: Vec<QuestionDto>,
}
