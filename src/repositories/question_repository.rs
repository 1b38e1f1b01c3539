use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Question},
};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Inserts all questions of one generation run, all or nothing.
    async fn insert_batch(
        &self,
        material_id: i64,
        texts: &[String],
        difficulty: Difficulty,
    ) -> AppResult<Vec<Question>>;
    /// Newest first.
    async fn list_by_material(&self, material_id: i64) -> AppResult<Vec<Question>>;
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    material_id: i64,
    text: String,
    difficulty: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<QuestionRow> for Question {
    type Error = AppError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        let difficulty = row
            .difficulty
            .parse::<Difficulty>()
            .map_err(AppError::DatabaseError)?;

        Ok(Question {
            id: row.id,
            material_id: row.material_id,
            text: row.text,
            difficulty,
            created_at: row.created_at,
        })
    }
}

pub struct PgQuestionRepository {
    db: Database,
}

impl PgQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn insert_batch(
        &self,
        material_id: i64,
        texts: &[String],
        difficulty: Difficulty,
    ) -> AppResult<Vec<Question>> {
        let mut tx = self.db.pool().begin().await?;
        let mut inserted = Vec::with_capacity(texts.len());

        for text in texts {
            let row = sqlx::query_as::<_, QuestionRow>(
                r#"
                INSERT INTO questions (material_id, text, difficulty)
                VALUES ($1, $2, $3)
                RETURNING id, material_id, text, difficulty, created_at
                "#,
            )
            .bind(material_id)
            .bind(text)
            .bind(difficulty.as_str())
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(Question::try_from(row)?);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn list_by_material(&self, material_id: i64) -> AppResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, material_id, text, difficulty, created_at
            FROM questions
            WHERE material_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(material_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.into_iter().map(Question::try_from).collect()
    }
}
