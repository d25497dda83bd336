use thiserror::Error;

/// Client-side validation failures. Raised before any request is issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player name is required")]
    EmptyPlayerName,
    #[error("boulder score must be one of 0, 5, 10, 15, 20, 25 (got {0})")]
    InvalidBoulderScore(u32),
    #[error("expected {expected} boulder scores (got {actual})")]
    BoulderCount { expected: usize, actual: usize },
    #[error("total score {actual} does not match boulder sum {expected}")]
    TotalMismatch { expected: u32, actual: u32 },
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    #[error("unknown timeframe {0:?}")]
    UnknownTimeframe(String),
}

/// Failures talking to the remote score service.
///
/// Kept `Clone` so it can sit inside view state between renders.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Transport(String),
    /// Non-success HTTP status; `message` is shown to the user verbatim.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from server: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ServiceError {
    /// Build a status error from a response body, preferring the service's own
    /// `message` field when the body carries one.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self::Status { status, message }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Leaderboard failures, tagged with the action that produced them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("Failed to load leaderboard data: {0}")]
    Load(ServiceError),
    #[error("Failed to delete score: {0}")]
    Delete(ServiceError),
    #[error("Failed to clear leaderboard: {0}")]
    Clear(ServiceError),
    #[error("Failed to export leaderboard: {0}")]
    Export(ServiceError),
    /// The CSV was built but the browser would not save it.
    #[error("Failed to download export: {0}")]
    Download(String),
}

impl LeaderboardError {
    /// Only a failed list fetch offers the Retry affordance.
    #[must_use]
    pub const fn offers_retry(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_service_message() {
        let err = ServiceError::from_status(400, r#"{"message":"Player name taken"}"#);
        assert_eq!(err.to_string(), "Player name taken");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn status_error_falls_back_to_generic_text() {
        let err = ServiceError::from_status(503, "<html>down</html>");
        assert_eq!(err.to_string(), "request failed with status 503");

        let blank = ServiceError::from_status(500, r#"{"message":"  "}"#);
        assert_eq!(blank.to_string(), "request failed with status 500");
    }

    #[test]
    fn only_load_errors_offer_retry() {
        let cause = ServiceError::Transport("offline".into());
        assert!(LeaderboardError::Load(cause.clone()).offers_retry());
        assert!(!LeaderboardError::Delete(cause.clone()).offers_retry());
        assert!(!LeaderboardError::Clear(cause.clone()).offers_retry());
        assert!(!LeaderboardError::Export(cause).offers_retry());
    }

    #[test]
    fn leaderboard_error_mentions_action() {
        let err = LeaderboardError::Delete(ServiceError::Transport("offline".into()));
        assert_eq!(err.to_string(), "Failed to delete score: network error: offline");
    }
}
