//! Text extraction from uploaded study material.
//!
//! Each supported format has a stateless extractor (`bytes in, text out`).
//! [`extract`] picks one from the declared file type and rejects documents
//! that parse but carry too little text to be worth storing.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod plain_text;

use std::fmt;

pub use error::{DispatchError, ExtractionError};

/// Extracted text shorter than this is treated as "no text".
pub const MIN_TEXT_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    PlainText,
    Pdf,
    Docx,
}

impl FileFormat {
    /// Matches a declared file type case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "txt" | "text" => Some(FileFormat::PlainText),
            "pdf" => Some(FileFormat::Pdf),
            "docx" | "doc" => Some(FileFormat::Docx),
            _ => None,
        }
    }

    pub fn extract(self, content: &[u8]) -> Result<String, ExtractionError> {
        match self {
            FileFormat::PlainText => Ok(plain_text::extract(content)),
            FileFormat::Pdf => pdf::extract(content),
            FileFormat::Docx => docx::extract(content),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::PlainText => write!(f, "txt"),
            FileFormat::Pdf => write!(f, "pdf"),
            FileFormat::Docx => write!(f, "docx"),
        }
    }
}

/// Text ready for persistence. `length` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub format: FileFormat,
    pub text: String,
    pub length: usize,
}

impl ExtractionResult {
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// The first `max_chars` characters of the text.
    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.text, max_chars)
    }
}

pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Extracts text from `content` according to the declared `file_type`.
pub fn extract(content: &[u8], file_type: &str) -> Result<ExtractionResult, DispatchError> {
    let format = FileFormat::from_tag(file_type)
        .ok_or_else(|| DispatchError::UnsupportedFormat(file_type.to_string()))?;

    // Postgres TEXT cannot hold U+0000.
    let text = format.extract(content)?.replace('\0', "");
    let length = text.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Err(DispatchError::Empty { length });
    }

    Ok(ExtractionResult {
        format,
        text,
        length,
    })
}
