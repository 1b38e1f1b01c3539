use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{material::PREVIEW_LENGTH, Material, MaterialSummary},
};

#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Stores extracted text; the store assigns id and upload date.
    async fn insert_material(&self, name: &str, file_type: &str, content: &str)
        -> AppResult<Material>;
    /// Newest first, text truncated to a preview.
    async fn list_materials(&self) -> AppResult<Vec<MaterialSummary>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Material>>;
    async fn get_material_text(&self, id: i64) -> AppResult<Option<String>>;
    async fn increment_question_count(&self, id: i64, by: i32) -> AppResult<()>;
}

pub struct PgMaterialRepository {
    db: Database,
}

impl PgMaterialRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl MaterialRepository for PgMaterialRepository {
    async fn insert_material(
        &self,
        name: &str,
        file_type: &str,
        content: &str,
    ) -> AppResult<Material> {
        let material = sqlx::query_as::<_, Material>(
            r#"
            INSERT INTO materials (name, file_type, content, questions_generated)
            VALUES ($1, $2, $3, 0)
            RETURNING id, name, file_type, upload_date, questions_generated
            "#,
        )
        .bind(name)
        .bind(file_type)
        .bind(content)
        .fetch_one(self.db.pool())
        .await?;

        Ok(material)
    }

    async fn list_materials(&self) -> AppResult<Vec<MaterialSummary>> {
        let items = sqlx::query_as::<_, MaterialSummary>(
            r#"
            SELECT id, name, file_type, upload_date, questions_generated,
                   LEFT(content, $1) AS content_preview
            FROM materials
            ORDER BY upload_date DESC, id DESC
            "#,
        )
        .bind(PREVIEW_LENGTH as i32)
        .fetch_all(self.db.pool())
        .await?;

        Ok(items)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Material>> {
        let material = sqlx::query_as::<_, Material>(
            r#"
            SELECT id, name, file_type, upload_date, questions_generated
            FROM materials
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(material)
    }

    async fn get_material_text(&self, id: i64) -> AppResult<Option<String>> {
        let content = sqlx::query_scalar::<_, String>("SELECT content FROM materials WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(content)
    }

    async fn increment_question_count(&self, id: i64, by: i32) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE materials
            SET questions_generated = questions_generated + $1
            WHERE id = $2
            "#,
        )
        .bind(by)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Material not found".to_string()));
        }
        Ok(())
    }
}
