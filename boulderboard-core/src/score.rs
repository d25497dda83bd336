use crate::error::ValidationError;
use crate::filters::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of boulder problems on a scorecard.
pub const BOULDER_COUNT: usize = 10;

/// Points available for a single boulder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct BoulderScore(u8);

impl BoulderScore {
    pub const ZERO: Self = Self(0);

    /// Every selectable value, lowest first.
    pub const OPTIONS: [Self; 6] = [Self(0), Self(5), Self(10), Self(15), Self(20), Self(25)];

    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBoulderScore`] for anything outside 0..=25 in steps of 5.
    pub fn new(points: u32) -> Result<Self, ValidationError> {
        Self::OPTIONS
            .into_iter()
            .find(|opt| u32::from(opt.0) == points)
            .ok_or(ValidationError::InvalidBoulderScore(points))
    }

    #[must_use]
    pub const fn points(self) -> u32 {
        self.0 as u32
    }
}

impl From<BoulderScore> for u32 {
    fn from(score: BoulderScore) -> Self {
        score.points()
    }
}

impl TryFrom<u32> for BoulderScore {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for BoulderScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier assigned by the score service.
///
/// Services disagree on whether ids are numbers or strings, so both are
/// accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(num) => Self(num.to_string()),
        })
    }
}

/// A stored score as returned by the service. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "WireScoreRecord")]
pub struct ScoreRecord {
    pub id: RecordId,
    pub player_name: String,
    pub category: Category,
    pub boulder_scores: Vec<u32>,
    pub total_score: u32,
    pub timestamp: DateTime<Utc>,
}

/// Record as services send it. Mongo-style backends may carry `_id` next to
/// an `id` virtual, and `createdAt` next to `timestamp`; `id` and `timestamp`
/// win when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireScoreRecord {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<RecordId>,
    player_name: String,
    category: Category,
    boulder_scores: Vec<u32>,
    total_score: u32,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<WireScoreRecord> for ScoreRecord {
    type Error = &'static str;

    fn try_from(wire: WireScoreRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id.or(wire.mongo_id).ok_or("record has no id or _id")?,
            player_name: wire.player_name,
            category: wire.category,
            boulder_scores: wire.boulder_scores,
            total_score: wire.total_score,
            timestamp: wire
                .timestamp
                .or(wire.created_at)
                .ok_or("record has no timestamp or createdAt")?,
        })
    }
}

impl ScoreRecord {
    /// Sub-scores joined the way the export file writes them (`5-10-0-...`).
    #[must_use]
    pub fn boulder_summary(&self) -> String {
        self.boulder_scores
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Body of a score submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScore {
    pub player_name: String,
    pub category: Category,
    pub boulder_scores: [BoulderScore; BOULDER_COUNT],
    pub total_score: u32,
}

impl NewScore {
    /// Assemble a submission, trimming the name and computing the total.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPlayerName`] when the trimmed name is empty.
    pub fn new(
        player_name: &str,
        category: Category,
        boulder_scores: [BoulderScore; BOULDER_COUNT],
    ) -> Result<Self, ValidationError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        Ok(Self {
            player_name: player_name.to_string(),
            category,
            total_score: total_of(&boulder_scores),
            boulder_scores,
        })
    }

    /// Build a submission from raw point values, e.g. from a command line.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a wrong count, an invalid value or an empty name.
    pub fn from_points(
        player_name: &str,
        category: Category,
        points: &[u32],
    ) -> Result<Self, ValidationError> {
        if points.len() != BOULDER_COUNT {
            return Err(ValidationError::BoulderCount {
                expected: BOULDER_COUNT,
                actual: points.len(),
            });
        }
        let mut scores = [BoulderScore::ZERO; BOULDER_COUNT];
        for (slot, value) in scores.iter_mut().zip(points) {
            *slot = BoulderScore::new(*value)?;
        }
        Self::new(player_name, category, scores)
    }

    /// Re-check the total against the sub-scores.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TotalMismatch`] if `total_score` was tampered with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.player_name.trim().is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        let expected = total_of(&self.boulder_scores);
        if expected != self.total_score {
            return Err(ValidationError::TotalMismatch {
                expected,
                actual: self.total_score,
            });
        }
        Ok(())
    }
}

/// Sum of a scorecard.
#[must_use]
pub fn total_of(scores: &[BoulderScore]) -> u32 {
    scores.iter().map(|s| s.points()).sum()
}

/// What the service answered to a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitReceipt {
    pub record: Option<ScoreRecord>,
    pub message: Option<String>,
}

impl SubmitReceipt {
    /// Interpret a success body. Services return either the created record,
    /// a `{ message }` acknowledgement, or both wrapped together.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::default();
        };
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        let record = serde_json::from_value::<ScoreRecord>(value.clone())
            .ok()
            .or_else(|| {
                ["score", "record", "data"]
                    .iter()
                    .find_map(|key| value.get(*key))
                    .and_then(|inner| serde_json::from_value(inner.clone()).ok())
            });
        Self { record, message }
    }
}
