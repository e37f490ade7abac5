use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RespiraError {
    #[error("PDF file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("pdftotext not found. Install poppler-utils: sudo apt-get install poppler-utils (Ubuntu/Debian) or brew install poppler (macOS)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("invalid week identifier: {0}")]
    InvalidWeek(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
