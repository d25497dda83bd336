//! Async drivers that pair the view state machines with a [`ScoreService`].
//!
//! The browser wires the same state types to its own event loop; these
//! controllers are what native callers (tests, the tester CLI) use.

use crate::export::CsvExport;
use crate::filters::{CategoryFilter, Timeframe};
use crate::history::HistoryState;
use crate::leaderboard::{
    Confirm, ConfirmRequest, DeleteOutcome, LeaderboardState, LoadOutcome, RequestTicket,
};
use crate::score::RecordId;
use crate::service::ScoreService;
use crate::submission::SubmissionState;
use chrono::{NaiveDate, Utc};

/// Result of a destructive, confirmation-gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Done,
    Failed,
}

pub struct LeaderboardController<S> {
    service: S,
    state: LeaderboardState,
    history: HistoryState,
}

impl<S: ScoreService> LeaderboardController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: LeaderboardState::new(),
            history: HistoryState::new(),
        }
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    pub const fn state(&self) -> &LeaderboardState {
        &self.state
    }

    pub const fn history(&self) -> &HistoryState {
        &self.history
    }

    async fn run_load(&mut self, ticket: RequestTicket) -> LoadOutcome {
        let result = self.service.list_scores(ticket.timeframe).await;
        self.state.finish_load(ticket, result)
    }

    /// Fetch the snapshot for the current timeframe.
    pub async fn load(&mut self) -> LoadOutcome {
        let ticket = self.state.begin_load();
        self.run_load(ticket).await
    }

    /// Re-issue the identical list request after a failure.
    pub async fn retry(&mut self) -> LoadOutcome {
        self.load().await
    }

    /// `None` when the timeframe did not change.
    pub async fn set_timeframe(&mut self, timeframe: Timeframe) -> Option<LoadOutcome> {
        let ticket = self.state.set_timeframe(timeframe)?;
        Some(self.run_load(ticket).await)
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.state.set_category_filter(filter);
    }

    /// Remove one record after confirmation, then reload to resync ranks.
    pub async fn delete(&mut self, id: &RecordId, confirm: &impl Confirm) -> ActionOutcome {
        let player_name = self
            .state
            .find(id)
            .map_or_else(|| id.to_string(), |record| record.player_name.clone());
        if !confirm.confirm(&ConfirmRequest::Delete { player_name }) {
            return ActionOutcome::Cancelled;
        }
        let result = self.service.delete_score(id).await;
        match self.state.finish_delete(id, result) {
            DeleteOutcome::Resync(ticket) => {
                self.run_load(ticket).await;
                ActionOutcome::Done
            }
            DeleteOutcome::Failed => ActionOutcome::Failed,
        }
    }

    /// Delete every record after confirmation.
    pub async fn clear_all(&mut self, confirm: &impl Confirm) -> ActionOutcome {
        if !confirm.confirm(&ConfirmRequest::ClearAll) {
            return ActionOutcome::Cancelled;
        }
        let result = self.service.clear_scores().await;
        if self.state.finish_clear(result) {
            ActionOutcome::Done
        } else {
            ActionOutcome::Failed
        }
    }

    /// Build the CSV download for `today`, dates rendered in UTC.
    pub async fn export_csv(&mut self, today: NaiveDate) -> Option<CsvExport> {
        let result = self.service.export_scores().await;
        self.state.finish_export(result, today, &Utc)
    }

    /// Returns whether the response was applied to the open modal.
    pub async fn open_player_history(&mut self, player_name: &str) -> bool {
        let ticket = self.history.open(player_name);
        let result = self.service.player_history(&ticket.player_name).await;
        self.history.finish(&ticket, result)
    }

    pub fn close_history(&mut self) {
        self.history.close();
    }
}

pub struct SubmissionController<S> {
    service: S,
    state: SubmissionState,
}

impl<S: ScoreService> SubmissionController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: SubmissionState::new(),
        }
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut SubmissionState {
        &mut self.state
    }

    /// Returns `true` when the service accepted the score.
    pub async fn submit(&mut self) -> bool {
        let Some(score) = self.state.begin_submit() else {
            return false;
        };
        let result = self.service.submit_score(&score).await;
        let accepted = result.is_ok();
        self.state.finish_submit(result);
        accepted
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}
