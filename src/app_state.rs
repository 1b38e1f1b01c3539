use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{PgMaterialRepository, PgQuestionRepository},
    services::{
        completion_service::{CompletionClient, OpenAiCompletionClient},
        material_service::MaterialService,
        question_service::QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub material_service: Arc<MaterialService>,
    pub question_service: Arc<QuestionService>,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ensure_schema().await?;

        let material_repository = Arc::new(PgMaterialRepository::new(&db));
        let question_repository = Arc::new(PgQuestionRepository::new(&db));

        let completion = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiCompletionClient::new(
                key,
                &config.openai_api_base,
                &config.completion_model,
            )) as Arc<dyn CompletionClient>
        });

        let material_service = Arc::new(MaterialService::new(material_repository.clone()));
        let question_service = Arc::new(QuestionService::new(
            material_repository,
            question_repository,
            completion,
            &config.question_language,
        ));

        Ok(Self {
            material_service,
            question_service,
            db: Some(db),
            config: Arc::new(config),
        })
    }

    /// Wires services over caller-supplied collaborators; no database.
    pub fn from_parts(
        material_service: Arc<MaterialService>,
        question_service: Arc<QuestionService>,
        config: Config,
    ) -> Self {
        Self {
            material_service,
            question_service,
            db: None,
            config: Arc::new(config),
        }
    }
}
