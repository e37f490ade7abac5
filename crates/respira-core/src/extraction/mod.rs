pub mod pdftotext;

use crate::error::RespiraError;
use std::path::Path;

/// Trait for PDF-to-text backends.
pub trait TextExtractor {
    /// Render the whole PDF at `path` as plain text, keeping column alignment.
    fn extract_text(&self, path: &Path) -> Result<String, RespiraError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
