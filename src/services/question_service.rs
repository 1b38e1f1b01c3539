use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::Validate;

use crate::{
    constants::question_prompt::{build_question_prompt, QUESTION_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::dto::{
        request::GenerateQuestionsRequest,
        response::{GenerateQuestionsResponse, QuestionDto, QuestionListResponse},
    },
    repositories::{MaterialRepository, QuestionRepository},
    services::completion_service::CompletionClient,
};

static ENUMERATION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\W*\d+(?:\s*[.):\]-]\s*|\s+)")
        .expect("ENUMERATION_PREFIX is a valid regex pattern")
});

pub struct QuestionService {
    materials: Arc<dyn MaterialRepository>,
    questions: Arc<dyn QuestionRepository>,
    completion: Option<Arc<dyn CompletionClient>>,
    language: String,
}

impl QuestionService {
    pub fn new(
        materials: Arc<dyn MaterialRepository>,
        questions: Arc<dyn QuestionRepository>,
        completion: Option<Arc<dyn CompletionClient>>,
        language: &str,
    ) -> Self {
        Self {
            materials,
            questions,
            completion,
            language: language.to_string(),
        }
    }

    pub async fn generate(
        &self,
        request: GenerateQuestionsRequest,
    ) -> AppResult<GenerateQuestionsResponse> {
        request.validate()?;
        let material_id = request
            .material_id
            .ok_or_else(|| AppError::ValidationError("materialId is required".to_string()))?;

        let material_text = self
            .materials
            .get_material_text(material_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Material not found".to_string()))?;

        let completion = self.completion.as_ref().ok_or_else(|| {
            AppError::Configuration("OpenAI API key not configured".to_string())
        })?;

        let prompt = build_question_prompt(
            &material_text,
            request.difficulty,
            request.question_count,
            &self.language,
        );
        let generated = completion.complete(QUESTION_SYSTEM_PROMPT, &prompt).await?;

        let texts = parse_questions(&generated, request.question_count as usize);
        if texts.is_empty() {
            log::warn!(
                "Completion for material {} contained no numbered questions",
                material_id
            );
        }

        let inserted = self
            .questions
            .insert_batch(material_id, &texts, request.difficulty)
            .await?;

        if !inserted.is_empty() {
            self.materials
                .increment_question_count(material_id, inserted.len() as i32)
                .await?;
        }

        log::info!(
            "Generated {} {} questions for material {}",
            inserted.len(),
            request.difficulty,
            material_id
        );

        let questions: Vec<QuestionDto> = inserted.into_iter().map(QuestionDto::from).collect();
        Ok(GenerateQuestionsResponse {
            count: questions.len(),
            questions,
            model: completion.model(),
        })
    }

    pub async fn list_for_material(&self, material_id: i64) -> AppResult<QuestionListResponse> {
        if self.materials.find_by_id(material_id).await?.is_none() {
            return Err(AppError::NotFound("Material not found".to_string()));
        }

        let questions = self
            .questions
            .list_by_material(material_id)
            .await?
            .into_iter()
            .map(QuestionDto::from)
            .collect();

        Ok(QuestionListResponse {
            material_id,
            questions,
        })
    }
}

/// Picks numbered lines out of free-form model output and strips their
/// enumeration. A line counts as numbered when one of its first five
/// characters is a digit.
pub fn parse_questions(generated: &str, limit: usize) -> Vec<String> {
    generated
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().take(5).any(char::is_numeric))
        .map(|line| {
            ENUMERATION_PREFIX
                .replace(line, "")
                .trim_start_matches(['*', '_'])
                .trim()
                .to_string()
        })
        .filter(|question| !question.is_empty())
        .take(limit)
        .collect()
}
