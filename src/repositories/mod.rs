pub mod material_repository;
pub mod question_repository;

pub use material_repository::{MaterialRepository, PgMaterialRepository};
pub use question_repository::{PgQuestionRepository, QuestionRepository};
