use respira_core::error::RespiraError;
use respira_core::model::WeeklyReport;

pub fn print(report: &WeeklyReport) -> Result<(), RespiraError> {
    let json = respira_core::format::to_json(report)?;
    println!("{json}");
    Ok(())
}
