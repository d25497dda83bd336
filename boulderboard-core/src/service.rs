//! Contract with the remote score service.

use crate::error::ServiceError;
use crate::filters::Timeframe;
use crate::score::{NewScore, RecordId, ScoreRecord, SubmitReceipt};
use async_trait::async_trait;
use std::rc::Rc;

pub mod memory;

/// Operations offered by the score service.
///
/// Browser futures are not `Send`, so implementations are `?Send`.
#[async_trait(?Send)]
pub trait ScoreService {
    /// `GET /leaderboard?timeframe=..`, ordered by the service.
    async fn list_scores(&self, timeframe: Timeframe) -> Result<Vec<ScoreRecord>, ServiceError>;

    /// `POST /submit-score`
    async fn submit_score(&self, score: &NewScore) -> Result<SubmitReceipt, ServiceError>;

    /// `DELETE /leaderboard/player/{id}`
    async fn delete_score(&self, id: &RecordId) -> Result<(), ServiceError>;

    /// `DELETE /leaderboard`
    async fn clear_scores(&self) -> Result<(), ServiceError>;

    /// `GET /export/leaderboard`
    async fn export_scores(&self) -> Result<Vec<ScoreRecord>, ServiceError>;

    /// `GET /player/{name}/history`
    async fn player_history(&self, player_name: &str) -> Result<Vec<ScoreRecord>, ServiceError>;
}

#[async_trait(?Send)]
impl<T: ScoreService + ?Sized> ScoreService for Rc<T> {
    async fn list_scores(&self, timeframe: Timeframe) -> Result<Vec<ScoreRecord>, ServiceError> {
        (**self).list_scores(timeframe).await
    }

    async fn submit_score(&self, score: &NewScore) -> Result<SubmitReceipt, ServiceError> {
        (**self).submit_score(score).await
    }

    async fn delete_score(&self, id: &RecordId) -> Result<(), ServiceError> {
        (**self).delete_score(id).await
    }

    async fn clear_scores(&self) -> Result<(), ServiceError> {
        (**self).clear_scores().await
    }

    async fn export_scores(&self) -> Result<Vec<ScoreRecord>, ServiceError> {
        (**self).export_scores().await
    }

    async fn player_history(&self, player_name: &str) -> Result<Vec<ScoreRecord>, ServiceError> {
        (**self).player_history(player_name).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Kind of call, used for logging and by the in-memory service's call log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Submit,
    Delete,
    Clear,
    Export,
    History,
}

/// One row of the REST table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListScores(Timeframe),
    SubmitScore,
    DeleteScore(&'a RecordId),
    ClearScores,
    Export,
    PlayerHistory(&'a str),
}

impl Endpoint<'_> {
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::ListScores(_) | Self::Export | Self::PlayerHistory(_) => Method::Get,
            Self::SubmitScore => Method::Post,
            Self::DeleteScore(_) | Self::ClearScores => Method::Delete,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::ListScores(_) => Operation::List,
            Self::SubmitScore => Operation::Submit,
            Self::DeleteScore(_) => Operation::Delete,
            Self::ClearScores => Operation::Clear,
            Self::Export => Operation::Export,
            Self::PlayerHistory(_) => Operation::History,
        }
    }

    /// Path and query. `encode` percent-encodes a single path segment; the
    /// browser and native clients each bring their own.
    #[must_use]
    pub fn path(&self, encode: impl Fn(&str) -> String) -> String {
        match self {
            Self::ListScores(timeframe) => {
                format!("/leaderboard?timeframe={}", timeframe.as_query())
            }
            Self::SubmitScore => "/submit-score".to_string(),
            Self::DeleteScore(id) => format!("/leaderboard/player/{}", encode(id.as_str())),
            Self::ClearScores => "/leaderboard".to_string(),
            Self::Export => "/export/leaderboard".to_string(),
            Self::PlayerHistory(name) => format!("/player/{}/history", encode(name)),
        }
    }

    #[must_use]
    pub fn url(&self, base: &str, encode: impl Fn(&str) -> String) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path(encode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(segment: &str) -> String {
        segment.replace(' ', "%20")
    }

    #[test]
    fn endpoint_table_matches_rest_contract() {
        let id = RecordId::from(7);
        let cases = [
            (
                Endpoint::ListScores(Timeframe::Week),
                Method::Get,
                "/leaderboard?timeframe=week",
            ),
            (Endpoint::SubmitScore, Method::Post, "/submit-score"),
            (Endpoint::DeleteScore(&id), Method::Delete, "/leaderboard/player/7"),
            (Endpoint::ClearScores, Method::Delete, "/leaderboard"),
            (Endpoint::Export, Method::Get, "/export/leaderboard"),
            (
                Endpoint::PlayerHistory("Ana Ruiz"),
                Method::Get,
                "/player/Ana%20Ruiz/history",
            ),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method);
            assert_eq!(endpoint.path(plain), path);
        }
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        let url = Endpoint::Export.url("https://scores.example/", plain);
        assert_eq!(url, "https://scores.example/export/leaderboard");
    }
}
