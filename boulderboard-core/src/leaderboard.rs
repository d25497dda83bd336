//! Leaderboard view state: snapshot, category filter, ranking and the
//! bookkeeping that keeps overlapping requests from clobbering each other.

use crate::error::{LeaderboardError, ServiceError};
use crate::export::{CsvExport, export_file_name, records_to_csv};
use crate::filters::{CategoryFilter, Timeframe};
use crate::score::{RecordId, ScoreRecord};
use chrono::{NaiveDate, TimeZone};

/// Podium marker for the first three rows. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    #[must_use]
    pub const fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Gold => "trophy-gold",
            Self::Silver => "trophy-silver",
            Self::Bronze => "trophy-bronze",
        }
    }
}

/// A row of the ranked table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedRow<'a> {
    pub rank: usize,
    pub medal: Option<Medal>,
    pub record: &'a ScoreRecord,
}

/// Handle for one issued list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Removal succeeded; the caller must run this reload ticket.
    Resync(RequestTicket),
    Failed,
}

/// Destructive actions that must be confirmed before any request goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmRequest {
    ClearAll,
    Delete { player_name: String },
}

impl ConfirmRequest {
    /// Default English prompt. The web app substitutes translated text.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::ClearAll => "Are you sure you want to clear the leaderboard?".to_string(),
            Self::Delete { player_name } => {
                format!("Delete this score for {player_name}?")
            }
        }
    }
}

/// Synchronous user confirmation gate.
pub trait Confirm {
    fn confirm(&self, request: &ConfirmRequest) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmRequest) -> bool,
{
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        self(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeaderboardState {
    snapshot: Vec<ScoreRecord>,
    timeframe: Timeframe,
    filter: CategoryFilter,
    loading: bool,
    error: Option<LeaderboardError>,
    last_issued: u64,
}

impl LeaderboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> &[ScoreRecord] {
        &self.snapshot
    }

    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    #[must_use]
    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn error(&self) -> Option<&LeaderboardError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Issue a list request for the current timeframe.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.last_issued += 1;
        self.loading = true;
        self.error = None;
        log::debug!(
            "leaderboard load #{} ({})",
            self.last_issued,
            self.timeframe
        );
        RequestTicket {
            seq: self.last_issued,
            timeframe: self.timeframe,
        }
    }

    /// Apply a list response. Only the most recently issued request may touch
    /// the snapshot; a failure keeps the previous snapshot visible.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<ScoreRecord>, ServiceError>,
    ) -> LoadOutcome {
        if ticket.seq != self.last_issued {
            log::debug!(
                "dropping stale leaderboard response #{} (latest #{})",
                ticket.seq,
                self.last_issued
            );
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.snapshot = records;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(err) => {
                log::warn!("leaderboard load failed: {err}");
                self.error = Some(LeaderboardError::Load(err));
                LoadOutcome::Failed
            }
        }
    }

    /// Switch timeframe. A change always needs a fresh load; picking the
    /// current value is a no-op.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Option<RequestTicket> {
        if timeframe == self.timeframe {
            return None;
        }
        self.timeframe = timeframe;
        Some(self.begin_load())
    }

    /// Local only; never triggers a request.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Snapshot records matching the category filter, in snapshot order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&ScoreRecord> {
        self.snapshot
            .iter()
            .filter(|record| self.filter.matches(record.category))
            .collect()
    }

    #[must_use]
    pub fn ranked_rows(&self) -> Vec<RankedRow<'_>> {
        self.filtered_view()
            .into_iter()
            .enumerate()
            .map(|(idx, record)| RankedRow {
                rank: idx + 1,
                medal: Medal::for_rank(idx + 1),
                record,
            })
            .collect()
    }

    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&ScoreRecord> {
        self.snapshot.iter().find(|record| &record.id == id)
    }

    pub fn finish_delete(
        &mut self,
        id: &RecordId,
        result: Result<(), ServiceError>,
    ) -> DeleteOutcome {
        match result {
            Ok(()) => {
                log::debug!("deleted score {id}; resyncing");
                DeleteOutcome::Resync(self.begin_load())
            }
            Err(err) => {
                log::error!("delete of score {id} failed: {err}");
                self.error = Some(LeaderboardError::Delete(err));
                DeleteOutcome::Failed
            }
        }
    }

    /// The cleared result is known, so the snapshot is emptied without a reload.
    /// Any list request still in flight predates the clear and becomes stale.
    pub fn finish_clear(&mut self, result: Result<(), ServiceError>) -> bool {
        match result {
            Ok(()) => {
                self.last_issued += 1;
                self.loading = false;
                self.snapshot.clear();
                self.error = None;
                true
            }
            Err(err) => {
                log::error!("clearing leaderboard failed: {err}");
                self.error = Some(LeaderboardError::Clear(err));
                false
            }
        }
    }

    /// Turn an export payload into a download, or record why it failed.
    pub fn finish_export<Tz: TimeZone>(
        &mut self,
        result: Result<Vec<ScoreRecord>, ServiceError>,
        today: NaiveDate,
        tz: &Tz,
    ) -> Option<CsvExport> {
        let built = result.and_then(|records| records_to_csv(&records, tz));
        match built {
            Ok(contents) => Some(CsvExport {
                file_name: export_file_name(today),
                contents,
            }),
            Err(err) => {
                log::error!("export failed: {err}");
                self.error = Some(LeaderboardError::Export(err));
                None
            }
        }
    }

    /// The export was built but could not be handed to the user.
    pub fn download_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("export download failed: {message}");
        self.error = Some(LeaderboardError::Download(message));
    }
}
