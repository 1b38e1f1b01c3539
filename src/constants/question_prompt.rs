use crate::models::domain::Difficulty;

/// Characters of material text sent to the completion API.
pub const MATERIAL_EXCERPT_CHARS: usize = 3000;

pub const QUESTION_SYSTEM_PROMPT: &str =
    "You are an experienced teacher who writes high-quality exam questions.";

pub fn difficulty_description(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "easy questions for beginners",
        Difficulty::Medium => "questions of medium difficulty",
        Difficulty::Hard => "challenging questions for advanced students",
    }
}

/// Builds the user prompt asking for `count` numbered questions about the
/// start of `material_text`.
pub fn build_question_prompt(
    material_text: &str,
    difficulty: Difficulty,
    count: i32,
    language: &str,
) -> String {
    let excerpt: String = material_text.chars().take(MATERIAL_EXCERPT_CHARS).collect();

    format!(
        "Based on the following study material, write {count} {description} for an exam.

Material:
{excerpt}

Requirements:
- Questions must be specific and check understanding of the material
- Format: one question per line, numbered
- Questions must be written in {language}
- Vary the question types: definitions, examples, problem solving

Return only the list of questions without any additional commentary.",
        count = count,
        description = difficulty_description(difficulty),
        excerpt = excerpt,
        language = language,
    )
}
