pub mod error;
pub mod extraction;
pub mod format;
pub mod model;
pub mod scanning;
pub mod week;

use error::RespiraError;
use extraction::TextExtractor;
use model::{WeekLabel, WeeklyReport};
use std::path::Path;

/// Main API entry point: turn one SZU weekly virus PDF into a report.
///
/// The week comes from the filename (`"51.KT 2025.pdf"`); when the filename
/// has no week marker a warning is logged and the week is `UNKNOWN`.
pub fn parse_pdf(
    pdf_path: &Path,
    extractor: &dyn TextExtractor,
) -> Result<WeeklyReport, RespiraError> {
    if !pdf_path.is_file() {
        return Err(RespiraError::InputNotFound(pdf_path.to_path_buf()));
    }

    let filename = pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let week = WeekLabel::from(week::parse_week_from_filename(&filename));
    match week {
        WeekLabel::Known(id) => match id.monday() {
            Some(monday) => log::info!("Report week {id} (starting {monday})"),
            None => log::info!("Report week {id}"),
        },
        WeekLabel::Unknown => {
            log::warn!("Could not extract week from filename: {filename}");
        }
    }

    let text = extractor.extract_text(pdf_path)?;
    log::debug!(
        "{} extracted {} lines from {}",
        extractor.backend_name(),
        text.lines().count(),
        pdf_path.display()
    );

    Ok(parse_text(&text, week))
}

/// Build a report from already extracted text.
pub fn parse_text(text: &str, week: WeekLabel) -> WeeklyReport {
    let outcome = scanning::scan_table(text);

    for m in &outcome.matches {
        log::debug!("line {}: {} = {}", m.line_number, m.category, m.value);
    }
    let explicit_total = outcome
        .matches
        .iter()
        .rev()
        .find(|m| m.category == model::Category::Total)
        .is_some_and(|m| m.value != 0);
    if !explicit_total {
        log::debug!(
            "no total row found, using sum of detections ({})",
            outcome.counts.total_tests
        );
    }

    WeeklyReport::new(week, outcome.counts)
}
