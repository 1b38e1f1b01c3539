use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS materials (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        file_type TEXT NOT NULL,
        content TEXT NOT NULL,
        upload_date TIMESTAMPTZ NOT NULL DEFAULT now(),
        questions_generated INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS questions (
        id BIGSERIAL PRIMARY KEY,
        material_id BIGINT NOT NULL REFERENCES materials(id),
        text TEXT NOT NULL,
        difficulty TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS questions_material_id_idx ON questions (material_id)",
];

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let database_url = config
            .database_url
            .as_deref()
            .ok_or_else(|| AppError::Configuration("Database not configured".to_string()))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        log::info!("Successfully connected to PostgreSQL");

        Ok(Self { pool })
    }

    /// Creates the tables if they are missing. Safe to run on every start.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        log::info!("Ensuring materials and questions tables exist");

        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
