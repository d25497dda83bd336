//! `ScoreService` over the browser Fetch API.

use crate::dom::{FetchReply, fetch_text, js_error_message};
use async_trait::async_trait;
use boulderboard_core::{
    Endpoint, NewScore, RecordId, ScoreRecord, ScoreService, ServiceError, SubmitReceipt,
    Timeframe,
};
use serde::de::DeserializeOwned;

/// Talks to the remote score service at `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpScoreService {
    base: String,
}

impl HttpScoreService {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Service at the compile-time configured base URL.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(crate::paths::api_base())
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> String {
        endpoint.url(&self.base, encode_segment)
    }

    #[allow(clippy::future_not_send)]
    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&str>,
    ) -> Result<String, ServiceError> {
        let url = self.url_for(&endpoint);
        log::debug!("{} {url}", endpoint.method().as_str());
        let reply = fetch_text(endpoint.method(), &url, body)
            .await
            .map_err(|err| ServiceError::Transport(js_error_message(&err)))?;
        check_reply(reply)
    }

    #[allow(clippy::future_not_send)]
    async fn get_records(&self, endpoint: Endpoint<'_>) -> Result<Vec<ScoreRecord>, ServiceError> {
        let body = self.send(endpoint, None).await?;
        decode(&body)
    }
}

fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

fn check_reply(reply: FetchReply) -> Result<String, ServiceError> {
    if reply.ok {
        Ok(reply.body)
    } else {
        Err(ServiceError::from_status(reply.status, &reply.body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|err| ServiceError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl ScoreService for HttpScoreService {
    async fn list_scores(&self, timeframe: Timeframe) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.get_records(Endpoint::ListScores(timeframe)).await
    }

    async fn submit_score(&self, score: &NewScore) -> Result<SubmitReceipt, ServiceError> {
        score.validate()?;
        let payload =
            serde_json::to_string(score).map_err(|err| ServiceError::Decode(err.to_string()))?;
        let body = self.send(Endpoint::SubmitScore, Some(&payload)).await?;
        Ok(SubmitReceipt::from_body(&body))
    }

    async fn delete_score(&self, id: &RecordId) -> Result<(), ServiceError> {
        self.send(Endpoint::DeleteScore(id), None).await.map(|_| ())
    }

    async fn clear_scores(&self) -> Result<(), ServiceError> {
        self.send(Endpoint::ClearScores, None).await.map(|_| ())
    }

    async fn export_scores(&self) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.get_records(Endpoint::Export).await
    }

    async fn player_history(&self, player_name: &str) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.get_records(Endpoint::PlayerHistory(player_name)).await
    }
}
