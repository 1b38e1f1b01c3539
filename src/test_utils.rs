#[cfg(test)]
pub mod fixtures {
    use std::io::{Cursor, Write};

    use lopdf::{
        content::{Content, Operation},
        dictionary, Document, Object, Stream,
    };
    use zip::{write::SimpleFileOptions, ZipWriter};

    /// Builds a PDF with one page per entry, each page showing its text in a
    /// single Courier text object. An empty entry yields a page with no text.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for text in pages {
            let operations = if text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content stream should encode"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("pdf should serialize");
        buffer
    }

    /// A single page PDF without a text layer.
    pub fn blank_pdf() -> Vec<u8> {
        pdf_with_pages(&[""])
    }

    pub fn zip_with_entry(name: &str, body: &str) -> Vec<u8> {
        zip_with_entries(&[(name, body)])
    }

    pub fn zip_with_entries(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .expect("zip entry should start");
            writer
                .write_all(body.as_bytes())
                .expect("zip entry should write");
        }
        writer.finish().expect("zip should finish").into_inner()
    }

    /// Wraps raw `w:body` markup into a minimal DOCX container.
    pub fn docx_from_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            body
        );
        zip_with_entry("word/document.xml", &xml)
    }

    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, p))
            .collect();
        docx_from_body(&body)
    }
}

#[cfg(test)]
pub mod repositories {
    use std::{collections::HashMap, sync::Arc};

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::RwLock;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{Difficulty, Material, Question},
        repositories::{MaterialRepository, QuestionRepository},
    };

    /// Materials and questions share one map so question batches can check
    /// that their material exists.
    #[derive(Default)]
    struct Store {
        materials: HashMap<i64, (Material, String)>,
        questions: Vec<Question>,
        next_material_id: i64,
        next_question_id: i64,
    }

    #[derive(Clone, Default)]
    pub struct InMemoryStore {
        inner: Arc<RwLock<Store>>,
    }

    impl InMemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn material_count(&self) -> usize {
            self.inner.read().await.materials.len()
        }

        pub async fn question_count(&self) -> usize {
            self.inner.read().await.questions.len()
        }
    }

    #[async_trait]
    impl MaterialRepository for InMemoryStore {
        async fn insert_material(
            &self,
            name: &str,
            file_type: &str,
            content: &str,
        ) -> AppResult<Material> {
            let mut store = self.inner.write().await;
            store.next_material_id += 1;
            let material = Material {
                id: store.next_material_id,
                name: name.to_string(),
                file_type: file_type.to_string(),
                upload_date: Utc::now(),
                questions_generated: 0,
            };
            store
                .materials
                .insert(material.id, (material.clone(), content.to_string()));
            Ok(material)
        }

        async fn list_materials(&self) -> AppResult<Vec<crate::models::domain::MaterialSummary>> {
            let store = self.inner.read().await;
            let mut items: Vec<_> = store
                .materials
                .values()
                .map(|(material, content)| material.summary(content))
                .collect();
            items.sort_by(|a, b| b.upload_date.cmp(&a.upload_date).then(b.id.cmp(&a.id)));
            Ok(items)
        }

        async fn find_by_id(&self, id: i64) -> AppResult<Option<Material>> {
            let store = self.inner.read().await;
            Ok(store.materials.get(&id).map(|(m, _)| m.clone()))
        }

        async fn get_material_text(&self, id: i64) -> AppResult<Option<String>> {
            let store = self.inner.read().await;
            Ok(store.materials.get(&id).map(|(_, content)| content.clone()))
        }

        async fn increment_question_count(&self, id: i64, by: i32) -> AppResult<()> {
            let mut store = self.inner.write().await;
            let (material, _) = store
                .materials
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound("Material not found".to_string()))?;
            material.questions_generated += by;
            Ok(())
        }
    }

    #[async_trait]
    impl QuestionRepository for InMemoryStore {
        async fn insert_batch(
            &self,
            material_id: i64,
            texts: &[String],
            difficulty: Difficulty,
        ) -> AppResult<Vec<Question>> {
            let mut store = self.inner.write().await;
            if !store.materials.contains_key(&material_id) {
                return Err(AppError::DatabaseError(format!(
                    "material {} does not exist",
                    material_id
                )));
            }

            let mut inserted = Vec::with_capacity(texts.len());
            for text in texts {
                store.next_question_id += 1;
                let question = Question {
                    id: store.next_question_id,
                    material_id,
                    text: text.clone(),
                    difficulty,
                    created_at: Utc::now(),
                };
                store.questions.push(question.clone());
                inserted.push(question);
            }
            Ok(inserted)
        }

        async fn list_by_material(&self, material_id: i64) -> AppResult<Vec<Question>> {
            let store = self.inner.read().await;
            let mut items: Vec<_> = store
                .questions
                .iter()
                .filter(|q| q.material_id == material_id)
                .cloned()
                .collect();
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(items)
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_pdf_fixture_starts_with_header() {
        let bytes = pdf_with_pages(&["Hello"]);
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_docx_fixture_is_zip() {
        let bytes = docx_with_paragraphs(&["A"]);
        assert!(bytes.starts_with(b"PK"));
    }
}
