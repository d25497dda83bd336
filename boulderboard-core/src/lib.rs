//! Boulderboard Core
//!
//! Platform-agnostic score model and view state for the Boulderboard climbing
//! leaderboard. This crate knows nothing about the browser; the web app and the
//! tester both drive the same state machines through the [`ScoreService`] trait.

pub mod chart;
pub mod controller;
pub mod error;
pub mod export;
pub mod filters;
pub mod history;
pub mod leaderboard;
pub mod score;
pub mod service;
pub mod submission;

// Re-export commonly used types
pub use chart::{ChartPoint, daily_averages, date_label};
pub use controller::{ActionOutcome, LeaderboardController, SubmissionController};
pub use error::{LeaderboardError, ServiceError, ValidationError};
pub use export::{CSV_HEADER, CsvExport, export_file_name, records_to_csv};
pub use filters::{Category, CategoryFilter, Timeframe};
pub use history::{HistoryState, HistorySummary, HistoryTicket};
pub use leaderboard::{
    ConfirmRequest, Confirm, DeleteOutcome, LeaderboardState, LoadOutcome, Medal, RankedRow,
    RequestTicket,
};
pub use score::{BOULDER_COUNT, BoulderScore, NewScore, RecordId, ScoreRecord, SubmitReceipt};
pub use service::{Endpoint, Method, Operation, ScoreService, memory::MemoryScoreService};
pub use submission::{SubmissionForm, SubmissionState};
