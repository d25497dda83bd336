pub mod boulder_select;
pub mod error_banner;
pub mod filter_bar;
pub mod history_modal;
pub mod leaderboard_table;
pub mod performance_chart;
