use thiserror::Error;

/// A document could not be parsed as the format it was declared as.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("DOCX extraction error: {0}")]
    Docx(String),
}

/// Failures surfaced by [`super::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("No text extracted from file")]
    Empty { length: usize },
}
