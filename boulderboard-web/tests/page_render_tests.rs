use boulderboard_core::{
    BoulderScore, Category, HistoryState, LeaderboardState, RecordId, ScoreRecord,
    ServiceError, SubmissionState, SubmitReceipt,
};
use boulderboard_web::pages::leaderboard::LeaderboardPage;
use boulderboard_web::pages::not_found::NotFound;
use boulderboard_web::pages::submit::SubmitPage;
use futures::executor::block_on;
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn record(id: u64, name: &str, total: u32, ts: &str) -> ScoreRecord {
    ScoreRecord {
        id: RecordId::from(id),
        player_name: name.to_string(),
        category: Category::C,
        boulder_scores: vec![0; 10],
        total_score: total,
        timestamp: ts.parse().unwrap(),
    }
}

fn leaderboard_props(board: LeaderboardState) -> boulderboard_web::pages::leaderboard::Props {
    boulderboard_web::pages::leaderboard::Props {
        board: Rc::new(board),
        history: Rc::new(HistoryState::new()),
        on_timeframe: Callback::noop(),
        on_filter: Callback::noop(),
        on_retry: Callback::noop(),
        on_dismiss_error: Callback::noop(),
        on_delete: Callback::noop(),
        on_clear: Callback::noop(),
        on_export: Callback::noop(),
        on_open_history: Callback::noop(),
        on_close_history: Callback::noop(),
    }
}

fn submit_props(state: SubmissionState) -> boulderboard_web::pages::submit::Props {
    boulderboard_web::pages::submit::Props {
        state: Rc::new(state),
        on_name: Callback::noop(),
        on_category: Callback::noop(),
        on_score: Callback::noop(),
        on_submit: Callback::noop(),
        on_reset: Callback::noop(),
    }
}

#[test]
fn leaderboard_page_renders_table_chart_and_actions() {
    boulderboard_web::i18n::set_lang("en");
    let mut board = LeaderboardState::new();
    let ticket = board.begin_load();
    board.finish_load(
        ticket,
        Ok(vec![
            record(1, "Ana", 60, "2024-06-28T12:00:00Z"),
            record(2, "Ben", 40, "2024-06-28T12:30:00Z"),
        ]),
    );
    let html = block_on(
        LocalServerRenderer::<LeaderboardPage>::with_props(leaderboard_props(board)).render(),
    );
    assert!(html.contains("Export CSV"));
    assert!(html.contains("Clear Leaderboard"));
    assert!(html.contains("<polyline"));
    assert!(html.contains("50.0"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn load_failure_offers_retry_and_keeps_rows() {
    boulderboard_web::i18n::set_lang("en");
    let mut board = LeaderboardState::new();
    let ticket = board.begin_load();
    board.finish_load(ticket, Ok(vec![record(1, "Ana", 60, "2024-06-28T12:00:00Z")]));
    let ticket = board.begin_load();
    board.finish_load(ticket, Err(ServiceError::Transport("offline".into())));

    let html = block_on(
        LocalServerRenderer::<LeaderboardPage>::with_props(leaderboard_props(board)).render(),
    );
    assert!(html.contains("Failed to load leaderboard data"));
    assert!(html.contains("Retry"));
    assert!(html.contains("Ana"));
}

#[test]
fn delete_failure_has_no_retry() {
    boulderboard_web::i18n::set_lang("en");
    let mut board = LeaderboardState::new();
    board.finish_delete(
        &RecordId::from(7),
        Err(ServiceError::from_status(404, r#"{"message":"Score not found"}"#)),
    );
    let html = block_on(
        LocalServerRenderer::<LeaderboardPage>::with_props(leaderboard_props(board)).render(),
    );
    assert!(html.contains("Failed to delete score: Score not found"));
    assert!(!html.contains("Retry"));
}

#[test]
fn submit_page_shows_total_and_ten_boulders() {
    boulderboard_web::i18n::set_lang("en");
    let mut state = SubmissionState::new();
    for (idx, pts) in [5, 10, 15, 20].into_iter().enumerate() {
        state.form.set_score(idx, BoulderScore::new(pts).unwrap());
    }
    let html = block_on(LocalServerRenderer::<SubmitPage>::with_props(submit_props(state)).render());
    assert!(html.contains("Total: 50"));
    assert!(html.contains("Boulder 10"));
    assert!(!html.contains("Boulder 11"));
    assert!(html.contains("Submit Scores"));
}

#[test]
fn submit_page_disables_controls_while_in_flight() {
    boulderboard_web::i18n::set_lang("en");
    let mut state = SubmissionState::new();
    state.form.player_name = "Ana".into();
    assert!(state.begin_submit().is_some());
    let html = block_on(LocalServerRenderer::<SubmitPage>::with_props(submit_props(state)).render());
    assert!(html.contains("Submitting..."));
    assert!(html.contains("disabled"));
}

#[test]
fn submit_page_shows_service_message_and_confirmation() {
    boulderboard_web::i18n::set_lang("en");
    let mut failed = SubmissionState::new();
    failed.form.player_name = "Ana".into();
    failed.begin_submit();
    failed.finish_submit(Err(ServiceError::from_status(
        400,
        r#"{"message":"Invalid category"}"#,
    )));
    let html =
        block_on(LocalServerRenderer::<SubmitPage>::with_props(submit_props(failed)).render());
    assert!(html.contains("Invalid category"));
    assert!(html.contains("value=\"Ana\"") || html.contains("Ana"));

    let mut done = SubmissionState::new();
    done.form.player_name = "Ana".into();
    done.begin_submit();
    done.finish_submit(Ok(SubmitReceipt::default()));
    let html = block_on(LocalServerRenderer::<SubmitPage>::with_props(submit_props(done)).render());
    assert!(html.contains(SubmissionState::CONFIRMATION));
}

#[test]
fn not_found_page_links_home() {
    boulderboard_web::i18n::set_lang("en");
    let props = boulderboard_web::pages::not_found::Props {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to leaderboard"));
}

#[test]
fn download_failure_is_shown_and_keeps_rows() {
    boulderboard_web::i18n::set_lang("en");
    let mut board = LeaderboardState::new();
    let ticket = board.begin_load();
    board.finish_load(ticket, Ok(vec![record(1, "Ana", 60, "2024-06-28T12:00:00Z")]));
    board.download_failed("download blocked");

    let html = block_on(
        LocalServerRenderer::<LeaderboardPage>::with_props(leaderboard_props(board)).render(),
    );
    assert!(html.contains("Failed to download export: download blocked"));
    assert!(!html.contains("Retry"));
    assert!(html.contains("Ana"));
}
