use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::extraction::preview;

/// Characters of material text shown in listings and upload responses.
pub const PREVIEW_LENGTH: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct Material {
    pub id: i64,                  // Assigned by the store
    pub name: String,             // Original file name
    pub file_type: String,        // Declared tag, upper-cased
    pub upload_date: DateTime<Utc>,
    pub questions_generated: i32, // Only ever incremented
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromRow)]
pub struct MaterialSummary {
    pub id: i64,
    pub name: String,
    pub file_type: String,
    pub upload_date: DateTime<Utc>,
    pub questions_generated: i32,
    pub content_preview: String,
}

impl Material {
    pub fn summary(&self, content: &str) -> MaterialSummary {
        MaterialSummary {
            id: self.id,
            name: self.name.clone(),
            file_type: self.file_type.clone(),
            upload_date: self.upload_date,
            questions_generated: self.questions_generated,
            content_preview: preview(content, PREVIEW_LENGTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material() -> Material {
        Material {
            id: 7,
            name: "algebra.pdf".to_string(),
            file_type: "PDF".to_string(),
            upload_date: Utc::now(),
            questions_generated: 3,
        }
    }

    #[test]
    fn test_summary_truncates_preview() {
        let content = "x".repeat(500);
        let summary = material().summary(&content);

        assert_eq!(summary.id, 7);
        assert_eq!(summary.questions_generated, 3);
        assert_eq!(summary.content_preview.chars().count(), PREVIEW_LENGTH);
    }

    #[test]
    fn test_summary_keeps_short_content_whole() {
        let summary = material().summary("short text");
        assert_eq!(summary.content_preview, "short text");
    }

    #[test]
    fn test_material_serializes_snake_case_fields() {
        let json = serde_json::to_value(material()).unwrap();
        assert_eq!(json["file_type"], "PDF");
        assert_eq!(json["questions_generated"], 3);
        assert!(json.get("upload_date").is_some());
    }
}
