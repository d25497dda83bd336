//! In-process score service used by tests and the tester's logic mode.

use super::{Operation, ScoreService};
use crate::error::ServiceError;
use crate::filters::Timeframe;
use crate::score::{NewScore, RecordId, ScoreRecord, SubmitReceipt};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<ScoreRecord>,
    next_id: u64,
    failures: VecDeque<(Operation, ServiceError)>,
    calls: Vec<Operation>,
}

/// Keeps records in memory and answers like the real service: lists are
/// ordered by total (highest first) and restricted by timeframe relative to a
/// fixed clock.
#[derive(Debug)]
pub struct MemoryScoreService {
    inner: RefCell<Inner>,
    now: DateTime<Utc>,
}

impl Default for MemoryScoreService {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl MemoryScoreService {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            inner: RefCell::new(Inner {
                next_id: 1,
                ..Inner::default()
            }),
            now,
        }
    }

    /// Seed with existing records; ids are kept as given.
    #[must_use]
    pub fn with_records(now: DateTime<Utc>, records: Vec<ScoreRecord>) -> Self {
        let service = Self::new(now);
        {
            let mut inner = service.inner.borrow_mut();
            let highest = records
                .iter()
                .filter_map(|record| record.id.as_str().parse::<u64>().ok())
                .max()
                .unwrap_or(0);
            inner.next_id = highest.max(records.len() as u64) + 1;
            inner.records = records;
        }
        service
    }

    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Make the next call of `operation` fail with `error`.
    pub fn fail_next(&self, operation: Operation, error: ServiceError) {
        self.inner.borrow_mut().failures.push_back((operation, error));
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Operation> {
        self.inner.borrow().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self, operation: Operation) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|op| **op == operation)
            .count()
    }

    #[must_use]
    pub fn stored(&self) -> Vec<ScoreRecord> {
        self.inner.borrow().records.clone()
    }

    fn record_call(&self, operation: Operation) -> Result<(), ServiceError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(operation);
        let pending = inner
            .failures
            .iter()
            .position(|(op, _)| *op == operation);
        match pending.and_then(|idx| inner.failures.remove(idx)) {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }

    fn ranked(records: impl Iterator<Item = ScoreRecord>) -> Vec<ScoreRecord> {
        let mut out: Vec<ScoreRecord> = records.collect();
        out.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        out
    }

    fn within(&self, timeframe: Timeframe, record: &ScoreRecord) -> bool {
        timeframe
            .window_days()
            .is_none_or(|days| record.timestamp >= self.now - Duration::days(days))
    }
}

#[async_trait(?Send)]
impl ScoreService for MemoryScoreService {
    async fn list_scores(&self, timeframe: Timeframe) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.record_call(Operation::List)?;
        let records = self.inner.borrow().records.clone();
        Ok(Self::ranked(
            records
                .into_iter()
                .filter(|record| self.within(timeframe, record)),
        ))
    }

    async fn submit_score(&self, score: &NewScore) -> Result<SubmitReceipt, ServiceError> {
        self.record_call(Operation::Submit)?;
        score.validate()?;
        let mut inner = self.inner.borrow_mut();
        let record = ScoreRecord {
            id: RecordId::from(inner.next_id),
            player_name: score.player_name.clone(),
            category: score.category,
            boulder_scores: score.boulder_scores.iter().map(|s| s.points()).collect(),
            total_score: score.total_score,
            timestamp: self.now,
        };
        inner.next_id += 1;
        inner.records.push(record.clone());
        Ok(SubmitReceipt {
            record: Some(record),
            message: Some("Score submitted".to_string()),
        })
    }

    async fn delete_score(&self, id: &RecordId) -> Result<(), ServiceError> {
        self.record_call(Operation::Delete)?;
        let mut inner = self.inner.borrow_mut();
        let before = inner.records.len();
        inner.records.retain(|record| &record.id != id);
        if inner.records.len() == before {
            return Err(ServiceError::Status {
                status: 404,
                message: "Score not found".to_string(),
            });
        }
        Ok(())
    }

    async fn clear_scores(&self) -> Result<(), ServiceError> {
        self.record_call(Operation::Clear)?;
        self.inner.borrow_mut().records.clear();
        Ok(())
    }

    async fn export_scores(&self) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.record_call(Operation::Export)?;
        let records = self.inner.borrow().records.clone();
        Ok(Self::ranked(records.into_iter()))
    }

    async fn player_history(&self, player_name: &str) -> Result<Vec<ScoreRecord>, ServiceError> {
        self.record_call(Operation::History)?;
        let mut history: Vec<ScoreRecord> = self
            .inner
            .borrow()
            .records
            .iter()
            .filter(|record| record.player_name == player_name)
            .cloned()
            .collect();
        history.sort_by_key(|record| record.timestamp);
        Ok(history)
    }
}
