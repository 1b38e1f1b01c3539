pub mod material;
pub mod question;
pub use material::{Material, MaterialSummary};
pub use question::{Difficulty, Question};
