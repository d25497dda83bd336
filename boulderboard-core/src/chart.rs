//! Per-day averages for the performance chart.

use crate::score::ScoreRecord;
use chrono::{NaiveDate, TimeZone};

/// One point of the performance series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub label: String,
    pub average: f64,
    pub samples: usize,
}

/// Calendar date label used by the chart, the table and the export (`M/D/YYYY`).
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Group records by calendar date in `tz` and average `totalScore` per day.
///
/// Points come out in the order their date is first encountered in `records`,
/// which keeps the series aligned with whatever order the service returned.
#[must_use]
pub fn daily_averages<Tz: TimeZone>(records: &[ScoreRecord], tz: &Tz) -> Vec<ChartPoint> {
    let mut buckets: Vec<(NaiveDate, u64, usize)> = Vec::new();

    for record in records {
        let date = record.timestamp.with_timezone(tz).date_naive();
        let total = u64::from(record.total_score);
        match buckets.iter_mut().find(|(d, _, _)| *d == date) {
            Some((_, sum, count)) => {
                *sum += total;
                *count += 1;
            }
            None => buckets.push((date, total, 1)),
        }
    }

    buckets
        .into_iter()
        .map(|(date, sum, count)| {
            #[allow(clippy::cast_precision_loss)]
            let average = sum as f64 / count as f64;
            ChartPoint {
                date,
                label: date_label(date),
                average,
                samples: count,
            }
        })
        .collect()
}

/// Highest average in the series, used to scale the y-axis.
#[must_use]
pub fn peak_average(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.average).fold(0.0, f64::max)
}
