use respira_core::error::RespiraError;
use respira_core::format;
use respira_core::model::WeeklyReport;
use std::path::Path;

pub fn print(report: &WeeklyReport) -> Result<(), RespiraError> {
    print!("{}", format::to_csv(report)?);
    Ok(())
}

pub fn append(path: &Path, report: &WeeklyReport) -> Result<(), RespiraError> {
    format::append_csv(path, report)?;
    log::info!("Appended data to {}", path.display());
    Ok(())
}
