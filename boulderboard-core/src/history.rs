use crate::error::ServiceError;
use crate::score::ScoreRecord;

/// Best and mean totals across a player's history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySummary {
    pub attempts: usize,
    pub best: u32,
    pub average: f64,
}

impl HistorySummary {
    /// `None` for an empty history.
    #[must_use]
    pub fn from_records(records: &[ScoreRecord]) -> Option<Self> {
        let best = records.iter().map(|r| r.total_score).max()?;
        let sum: u64 = records.iter().map(|r| u64::from(r.total_score)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = sum as f64 / records.len() as f64;
        Some(Self {
            attempts: records.len(),
            best,
            average,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTicket {
    pub seq: u64,
    pub player_name: String,
}

/// State behind the player history modal. Exists only while the modal is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryState {
    player_name: Option<String>,
    records: Vec<ScoreRecord>,
    loading: bool,
    error: Option<ServiceError>,
    last_issued: u64,
}

impl HistoryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.player_name.is_some()
    }

    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ServiceError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<HistorySummary> {
        HistorySummary::from_records(&self.records)
    }

    /// Open the modal for `player_name` and issue the history fetch.
    pub fn open(&mut self, player_name: &str) -> HistoryTicket {
        self.last_issued += 1;
        self.player_name = Some(player_name.to_string());
        self.records.clear();
        self.error = None;
        self.loading = true;
        HistoryTicket {
            seq: self.last_issued,
            player_name: player_name.to_string(),
        }
    }

    /// Drops the history; any in-flight response becomes stale.
    pub fn close(&mut self) {
        self.last_issued += 1;
        self.player_name = None;
        self.records.clear();
        self.error = None;
        self.loading = false;
    }

    /// Returns `false` when the response belonged to a modal that is gone.
    pub fn finish(
        &mut self,
        ticket: &HistoryTicket,
        result: Result<Vec<ScoreRecord>, ServiceError>,
    ) -> bool {
        if ticket.seq != self.last_issued {
            log::debug!("dropping stale history for {}", ticket.player_name);
            return false;
        }
        self.loading = false;
        match result {
            Ok(records) => self.records = records,
            Err(err) => {
                log::warn!("history for {} unavailable: {err}", ticket.player_name);
                self.error = Some(err);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Category;
    use crate::score::RecordId;

    fn record(total: u32) -> ScoreRecord {
        ScoreRecord {
            id: RecordId::from(u64::from(total)),
            player_name: "Ana".into(),
            category: Category::C,
            boulder_scores: vec![0; 10],
            total_score: total,
            timestamp: "2024-02-02T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn summary_reports_best_and_average() {
        let summary =
            HistorySummary::from_records(&[record(40), record(80), record(60)]).unwrap();
        assert_eq!(summary.best, 80);
        assert_eq!(summary.attempts, 3);
        assert!((summary.average - 60.0).abs() < f64::EPSILON);
        assert!(HistorySummary::from_records(&[]).is_none());
    }

    #[test]
    fn closed_modal_ignores_late_response() {
        let mut state = HistoryState::new();
        let ticket = state.open("Ana");
        state.close();
        assert!(!state.finish(&ticket, Ok(vec![record(10)])));
        assert!(state.records().is_empty());
        assert!(!state.is_open());
    }

    #[test]
    fn reopening_for_another_player_drops_the_first() {
        let mut state = HistoryState::new();
        let ana = state.open("Ana");
        let ben = state.open("Ben");
        assert!(!state.finish(&ana, Ok(vec![record(10)])));
        assert!(state.finish(&ben, Ok(vec![record(20)])));
        assert_eq!(state.player_name(), Some("Ben"));
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn failure_is_kept_inside_the_modal() {
        let mut state = HistoryState::new();
        let ticket = state.open("Ana");
        assert!(state.finish(&ticket, Err(ServiceError::Transport("offline".into()))));
        assert!(state.is_open());
        assert!(state.error().is_some());
        assert!(!state.is_loading());
        assert!(state.summary().is_none());
    }
}
