use crate::error::RespiraError;
use crate::model::WeeklyReport;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Header line of the weekly CSV.
pub const CSV_HEADER: &str =
    "week,influenzaA,influenzaB,rsv,adenovirus,rhinovirus,parainfluenza,coronavirus,totalTests";

/// Pretty-printed JSON object, `week` first.
pub fn to_json(report: &WeeklyReport) -> Result<String, RespiraError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Header line plus one data row, each terminated by a newline.
pub fn to_csv(report: &WeeklyReport) -> Result<String, RespiraError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, report, true)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write one report as a CSV row, optionally preceded by the header line.
pub fn write_csv<W: Write>(
    writer: W,
    report: &WeeklyReport,
    include_header: bool,
) -> Result<(), RespiraError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(include_header)
        .from_writer(writer);
    wtr.serialize(report)?;
    wtr.flush()?;
    Ok(())
}

/// Append a row to the CSV at `path`, creating the file with a header line
/// if it does not exist yet.
///
/// Existing content is not inspected: rows for the same week are not
/// de-duplicated and the header is not checked.
pub fn append_csv(path: &Path, report: &WeeklyReport) -> Result<(), RespiraError> {
    let write_header = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_csv(file, report, write_header)
}

/// Read back a CSV produced by [`append_csv`].
pub fn load_csv(path: &Path) -> Result<Vec<WeeklyReport>, RespiraError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut reports = Vec::new();
    for row in rdr.deserialize::<WeeklyReport>() {
        reports.push(row?);
    }
    Ok(reports)
}
