//! `ScoreService` against a running backend over HTTP.

use anyhow::{Context, Result};
use async_trait::async_trait;
use boulderboard_core::{
    Endpoint, Method, NewScore, RecordId, ScoreRecord, ScoreService, ServiceError, SubmitReceipt,
    Timeframe,
};
use reqwest::{Client, Url};
use std::time::Duration;

pub struct LiveScoreService {
    client: Client,
    base: String,
    scratch: Url,
}

impl LiveScoreService {
    pub fn new(base_url: &str) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("invalid base url {base_url}"))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
            scratch: Url::parse("http://segment.invalid/").context("scratch url")?,
        })
    }

    /// Percent-encode one path segment using the URL parser's own rules.
    fn encode_segment(&self, segment: &str) -> String {
        let mut url = self.scratch.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.clear().push(segment);
        }
        url.path().trim_start_matches('/').to_string()
    }

    pub fn url_for(&self, endpoint: &Endpoint<'_>) -> String {
        endpoint.url(&self.base, |segment| self.encode_segment(segment))
    }

    async fn send(&self, endpoint: Endpoint<'_>, body: Option<String>) -> Result<String, ServiceError> {
        let url = self.url_for(&endpoint);
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        log::debug!("{method} {url}");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(ServiceError::from_status(status.as_u16(), &text))
        }
    }

    async fn get_records(&self, endpoint: Endpoint<'_>) -> Result<Vec<ScoreRecord>, ServiceError> {
        let body = self.send(endpoint, None).await?;
        serde_json::from_str(&body).map_err(|err| ServiceError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl ScoreService for LiveScoreService {
    async fn list_scores(&self, timeframe: Timeframe) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.get_records(Endpoint::ListScores(timeframe)).await
    }

    async fn submit_score(&self, score: &NewScore) -> Result<SubmitReceipt, ServiceError> {
        score.validate()?;
        let payload =
            serde_json::to_string(score).map_err(|err| ServiceError::Decode(err.to_string()))?;
        let body = self.send(Endpoint::SubmitScore, Some(payload)).await?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_are_percent_encoded() {
        let live = LiveScoreService::new("http://localhost:5000/").unwrap();
        assert_eq!(
            live.url_for(&Endpoint::PlayerHistory("Ana María/2")),
            "http://localhost:5000/player/Ana%20Mar%C3%ADa%2F2/history"
        );
        let id = RecordId::from(7);
        assert_eq!(
            live.url_for(&Endpoint::DeleteScore(&id)),
            "http://localhost:5000/leaderboard/player/7"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(LiveScoreService::new("not a url").is_err());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let live = LiveScoreService::new("http://127.0.0.1:9").unwrap();
        let err = live.list_scores(Timeframe::All).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }
}
