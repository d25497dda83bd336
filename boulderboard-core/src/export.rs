use crate::chart::date_label;
use crate::error::ServiceError;
use crate::score::ScoreRecord;
use chrono::{NaiveDate, TimeZone};

/// Column order of the exported table.
pub const CSV_HEADER: [&str; 5] = ["Player", "Category", "Score", "Date", "Boulder Scores"];

/// A finished export ready to hand to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

/// `leaderboard-YYYY-MM-DD.csv`
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("leaderboard-{}.csv", today.format("%Y-%m-%d"))
}

/// Serialize records into the export table, dates rendered in `tz`.
///
/// # Errors
///
/// Returns [`ServiceError::Decode`] if the CSV writer fails, which only happens
/// on an internal encoding fault.
pub fn records_to_csv<Tz: TimeZone>(
    records: &[ScoreRecord],
    tz: &Tz,
) -> Result<String, ServiceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER).map_err(csv_fault)?;

    for record in records {
        let date = date_label(record.timestamp.with_timezone(tz).date_naive());
        let total = record.total_score.to_string();
        let boulders = record.boulder_summary();
        writer
            .write_record([
                record.player_name.as_str(),
                record.category.as_str(),
                total.as_str(),
                date.as_str(),
                boulders.as_str(),
            ])
            .map_err(csv_fault)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ServiceError::Decode(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ServiceError::Decode(err.to_string()))
}

fn csv_fault(err: csv::Error) -> ServiceError {
    ServiceError::Decode(format!("csv: {err}"))
}
