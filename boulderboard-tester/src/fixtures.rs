use boulderboard_core::{Category, MemoryScoreService, RecordId, ScoreRecord};
use chrono::{DateTime, Duration, Utc};

/// Fixed clock for logic runs so timeframe windows are reproducible.
pub fn logic_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn record(id: u64, name: &str, category: Category, points: [u32; 10], age_days: i64) -> ScoreRecord {
    ScoreRecord {
        id: RecordId::from(id),
        player_name: name.to_string(),
        category,
        boulder_scores: points.to_vec(),
        total_score: points.iter().sum(),
        timestamp: logic_now() - Duration::days(age_days),
    }
}

/// Small competition spread over categories and the last two months.
pub fn seeded_records() -> Vec<ScoreRecord> {
    vec![
        record(1, "Ana", Category::A, [25, 25, 25, 20, 20, 20, 15, 15, 10, 5], 1),
        record(2, "Ben", Category::E, [10, 10, 10, 10, 5, 5, 5, 0, 0, 0], 3),
        record(3, "Cleo", Category::A, [20, 20, 20, 20, 15, 15, 10, 10, 5, 0], 12),
        record(4, "Dev", Category::Jr, [5, 5, 5, 5, 5, 5, 0, 0, 0, 0], 45),
        record(5, "Ana", Category::A, [20, 20, 15, 15, 15, 10, 10, 5, 5, 0], 20),
        record(7, "Eli", Category::Open, [25, 25, 25, 25, 25, 25, 25, 25, 20, 20], 2),
        record(8, "Fay", Category::C, [15, 15, 10, 10, 10, 5, 5, 0, 0, 0], 1),
    ]
}

pub fn seeded_service() -> MemoryScoreService {
    MemoryScoreService::with_records(logic_now(), seeded_records())
}
