pub mod completion_service;
pub mod material_service;
pub mod question_service;
