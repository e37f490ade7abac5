use crate::error::RespiraError;
use crate::extraction::TextExtractor;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output};

/// Text extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so table columns stay on one line with their
/// row label.
pub struct PdftotextExtractor {
    binary: OsString,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_binary("pdftotext")
    }

    /// Use a specific pdftotext executable instead of the one on `PATH`.
    pub fn with_binary(binary: impl Into<OsString>) -> Self {
        PdftotextExtractor {
            binary: binary.into(),
        }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, RespiraError> {
        let output = Command::new(&self.binary)
            .arg("-layout")
            .arg(path)
            .arg("-") // output to stdout
            .output();

        text_from_output(output)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn text_from_output(output: std::io::Result<Output>) -> Result<String, RespiraError> {
    let output = output.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RespiraError::PdftotextNotFound
        } else {
            RespiraError::Extraction(format!("pdftotext failed: {}", e))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RespiraError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_missing_binary_maps_to_not_found() {
        let err = text_from_output(Err(Error::from(ErrorKind::NotFound))).unwrap_err();
        assert!(matches!(err, RespiraError::PdftotextNotFound));
        assert!(err.to_string().contains("poppler"));
    }

    #[test]
    fn test_other_spawn_error_maps_to_extraction() {
        let err = text_from_output(Err(Error::from(ErrorKind::PermissionDenied))).unwrap_err();
        assert!(matches!(err, RespiraError::Extraction(_)));
    }

    #[test]
    fn test_nonexistent_binary_extract_fails_not_found() {
        let extractor = PdftotextExtractor::with_binary("/nonexistent/pdftotext-binary");
        let err = extractor
            .extract_text(Path::new("report.pdf"))
            .unwrap_err();
        assert!(matches!(err, RespiraError::PdftotextNotFound));
    }
}
