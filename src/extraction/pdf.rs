use lopdf::Document;

use super::error::ExtractionError;

/// Extracts the text layer of every page in document order, one page per line
/// block, with surrounding whitespace trimmed from the result.
pub fn extract(content: &[u8]) -> Result<String, ExtractionError> {
    let document =
        Document::load_mem(content).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for page_number in document.get_pages().into_keys() {
        let page_text = document
            .extract_text(&[page_number])
            .map_err(|e| ExtractionError::Pdf(format!("page {}: {}", page_number, e)))?;
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text.trim().to_string())
}
