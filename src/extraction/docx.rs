use std::io::{Cursor, Read};

use quick_xml::{events::Event, Reader};
use zip::ZipArchive;

use super::error::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";
const PACKAGE_RELATIONSHIPS: &str = "_rels/.rels";
const OFFICE_DOCUMENT_REL: &str = "/relationships/officeDocument";

/// Extracts body paragraphs in document order, joined with newlines and
/// trimmed. Paragraphs nested inside tables are not part of the body text.
pub fn extract(content: &[u8]) -> Result<String, ExtractionError> {
    let xml = read_document_part(content)?;
    let paragraphs = body_paragraphs(&xml)?;
    Ok(paragraphs.join("\n").trim().to_string())
}

fn read_document_part(content: &[u8]) -> Result<String, ExtractionError> {
    let mut archive =
        ZipArchive::new(Cursor::new(content)).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let part_name = match read_entry(&mut archive, PACKAGE_RELATIONSHIPS) {
        Ok(rels) => main_part_target(&rels)?.unwrap_or_else(|| DOCUMENT_PART.to_string()),
        Err(_) => DOCUMENT_PART.to_string(),
    };

    read_entry(&mut archive, &part_name)
}

fn read_entry(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<String, ExtractionError> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| ExtractionError::Docx(format!("{}: {}", name, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(format!("{}: {}", name, e)))?;
    Ok(xml)
}

/// Finds the package's main document part in `_rels/.rels`. Targets are
/// relative to the package root.
fn main_part_target(rels: &str) -> Result<Option<String>, ExtractionError> {
    let mut reader = Reader::from_str(rels);

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractionError::Docx(format!("malformed {}: {}", PACKAGE_RELATIONSHIPS, e)))?;

        match event {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut rel_type = None;
                let mut target = None;
                for attr in e.attributes().flatten() {
                    let value = attr
                        .unescape_value()
                        .map_err(|e| ExtractionError::Docx(format!("malformed relationship: {}", e)))?
                        .into_owned();
                    match attr.key.local_name().as_ref() {
                        b"Type" => rel_type = Some(value),
                        b"Target" => target = Some(value),
                        _ => {}
                    }
                }

                if let (Some(rel_type), Some(target)) = (rel_type, target) {
                    if rel_type.ends_with(OFFICE_DOCUMENT_REL) {
                        return Ok(Some(target.trim_start_matches('/').to_string()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut paragraph_depth = 0usize;
    let mut table_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractionError::Docx(format!("malformed document.xml: {}", e)))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" if table_depth == 0 => paragraph_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if table_depth == 0 && paragraph_depth == 0 => paragraphs.push(String::new()),
                b"tab" if paragraph_depth > 0 => current.push('\t'),
                b"br" | b"cr" if paragraph_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text && paragraph_depth > 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(format!("malformed text run: {}", e)))?;
                current.push_str(&text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" if table_depth == 0 && paragraph_depth > 0 => {
                    paragraph_depth -= 1;
                    if paragraph_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
