use boulderboard_core::date_label;
use chrono::NaiveDate;

/// Averages are shown with one decimal place.
#[must_use]
pub fn fmt_average(value: f64) -> String {
    format!("{value:.1}")
}

#[must_use]
pub fn fmt_date(date: NaiveDate) -> String {
    date_label(date)
}

#[must_use]
pub fn fmt_points(points: u32) -> String {
    let mut args = std::collections::BTreeMap::new();
    let value = points.to_string();
    args.insert("points", value.as_str());
    crate::i18n::tr("submit.points", Some(&args))
}
