use respira_core::error::RespiraError;
use respira_core::extraction::TextExtractor;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    pdf_path: &Path,
    output_file: Option<PathBuf>,
    json: bool,
    extractor: &dyn TextExtractor,
) -> Result<(), RespiraError> {
    let report = respira_core::parse_pdf(pdf_path, extractor)?;

    // --output only applies to CSV
    if json {
        return output::json::print(&report);
    }

    match output_file {
        Some(path) => output::csv::append(&path, &report),
        None => output::csv::print(&report),
    }
}
