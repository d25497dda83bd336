use boulderboard_core::{
    ActionOutcome, BoulderScore, Category, CategoryFilter, ConfirmRequest, LeaderboardController,
    LoadOutcome, MemoryScoreService, Operation, RecordId, ScoreRecord, ServiceError,
    SubmissionController, Timeframe, daily_averages,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use futures::executor::block_on;
use std::rc::Rc;

fn now() -> DateTime<Utc> {
    "2024-06-30T12:00:00Z".parse().unwrap()
}

fn record(id: u64, name: &str, category: Category, total: u32, age_days: i64) -> ScoreRecord {
    ScoreRecord {
        id: RecordId::from(id),
        player_name: name.to_string(),
        category,
        boulder_scores: vec![0; 10],
        total_score: total,
        timestamp: now() - Duration::days(age_days),
    }
}

fn seeded() -> MemoryScoreService {
    MemoryScoreService::with_records(
        now(),
        vec![
            record(1, "Ana", Category::A, 220, 1),
            record(2, "Ben", Category::E, 150, 3),
            record(3, "Cleo", Category::A, 180, 12),
            record(4, "Dev", Category::Jr, 90, 45),
            record(7, "Eli", Category::Open, 240, 2),
        ],
    )
}

fn accept(_: &ConfirmRequest) -> bool {
    true
}

fn decline(_: &ConfirmRequest) -> bool {
    false
}

#[test]
fn load_replaces_snapshot_in_service_order() {
    let mut board = LeaderboardController::new(seeded());
    assert_eq!(block_on(board.load()), LoadOutcome::Applied);
    let names: Vec<_> = board
        .state()
        .snapshot()
        .iter()
        .map(|r| r.player_name.as_str())
        .collect();
    assert_eq!(names, vec!["Eli", "Ana", "Cleo", "Ben", "Dev"]);
}

#[test]
fn timeframe_change_reloads_but_category_change_does_not() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());

    assert_eq!(
        block_on(board.set_timeframe(Timeframe::Week)),
        Some(LoadOutcome::Applied)
    );
    assert_eq!(board.state().snapshot().len(), 3);
    assert_eq!(board.service().call_count(Operation::List), 2);

    board.set_category_filter(CategoryFilter::Only(Category::A));
    assert_eq!(board.service().call_count(Operation::List), 2);
    let view = board.state().filtered_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].player_name, "Ana");
}

#[test]
fn failed_fetch_keeps_snapshot_and_retry_repeats_request() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.set_timeframe(Timeframe::Month));
    let before = board.state().snapshot().to_vec();

    board
        .service()
        .fail_next(Operation::List, ServiceError::Transport("offline".into()));
    assert_eq!(block_on(board.load()), LoadOutcome::Failed);
    assert_eq!(board.state().snapshot(), before.as_slice());
    assert!(board.state().error().is_some_and(|e| e.offers_retry()));

    assert_eq!(block_on(board.retry()), LoadOutcome::Applied);
    assert_eq!(board.state().timeframe(), Timeframe::Month);
    assert!(board.state().error().is_none());
}

#[test]
fn deleting_record_seven_resyncs_snapshot() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());
    let id = RecordId::from(7);

    assert_eq!(block_on(board.delete(&id, &accept)), ActionOutcome::Done);
    assert!(board.state().find(&id).is_none());
    assert_eq!(board.service().call_count(Operation::List), 2);
    assert_eq!(board.state().ranked_rows()[0].record.player_name, "Ana");
}

#[test]
fn failed_delete_leaves_snapshot_and_surfaces_error() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());
    let id = RecordId::from(7);
    board.service().fail_next(
        Operation::Delete,
        ServiceError::from_status(500, r#"{"message":"db unavailable"}"#),
    );

    assert_eq!(block_on(board.delete(&id, &accept)), ActionOutcome::Failed);
    assert!(board.state().find(&id).is_some());
    let message = board.state().error().map(ToString::to_string).unwrap();
    assert!(message.contains("db unavailable"), "{message}");
}

#[test]
fn declined_delete_sends_nothing() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());
    let seen = std::cell::RefCell::new(None);
    let capture = |req: &ConfirmRequest| {
        *seen.borrow_mut() = Some(req.clone());
        false
    };
    assert_eq!(
        block_on(board.delete(&RecordId::from(2), &capture)),
        ActionOutcome::Cancelled
    );
    assert_eq!(board.service().call_count(Operation::Delete), 0);
    assert_eq!(
        seen.into_inner(),
        Some(ConfirmRequest::Delete {
            player_name: "Ben".into()
        })
    );
}

#[test]
fn clear_all_requires_confirmation() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());

    assert_eq!(block_on(board.clear_all(&decline)), ActionOutcome::Cancelled);
    assert_eq!(board.service().call_count(Operation::Clear), 0);
    assert_eq!(board.state().snapshot().len(), 5);

    assert_eq!(block_on(board.clear_all(&accept)), ActionOutcome::Done);
    assert!(board.state().snapshot().is_empty());
    assert_eq!(board.service().call_count(Operation::List), 1);
}

#[test]
fn export_builds_dated_csv() {
    let mut board = LeaderboardController::new(seeded());
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let export = block_on(board.export_csv(today)).unwrap();
    assert_eq!(export.file_name, "leaderboard-2024-06-30.csv");
    let mut lines = export.contents.lines();
    assert_eq!(
        lines.next(),
        Some("Player,Category,Score,Date,Boulder Scores")
    );
    assert!(lines.next().unwrap().starts_with("Eli,Open,240,6/28/2024,"));
}

#[test]
fn export_failure_leaves_view_unchanged() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());
    board
        .service()
        .fail_next(Operation::Export, ServiceError::Transport("offline".into()));
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    assert!(block_on(board.export_csv(today)).is_none());
    assert_eq!(board.state().snapshot().len(), 5);
    assert!(board.state().error().is_some_and(|e| !e.offers_retry()));
}

#[test]
fn history_failure_does_not_touch_leaderboard() {
    let mut board = LeaderboardController::new(seeded());
    block_on(board.load());
    board
        .service()
        .fail_next(Operation::History, ServiceError::Transport("offline".into()));

    assert!(block_on(board.open_player_history("Ana")));
    assert!(board.history().error().is_some());
    assert!(board.state().error().is_none());
    assert_eq!(board.state().snapshot().len(), 5);
}

#[test]
fn history_summary_for_player() {
    let service = MemoryScoreService::with_records(
        now(),
        vec![
            record(1, "Ana", Category::A, 40, 9),
            record(2, "Ana", Category::A, 80, 5),
            record(3, "Ben", Category::A, 200, 4),
            record(4, "Ana", Category::A, 60, 1),
        ],
    );
    let mut board = LeaderboardController::new(service);
    assert!(block_on(board.open_player_history("Ana")));
    let summary = board.history().summary().unwrap();
    assert_eq!(summary.attempts, 3);
    assert_eq!(summary.best, 80);
    assert!((summary.average - 60.0).abs() < f64::EPSILON);

    board.close_history();
    assert!(!board.history().is_open());
}

#[test]
fn submitted_score_appears_on_next_load() {
    let service = Rc::new(MemoryScoreService::new(now()));
    let mut form = SubmissionController::new(Rc::clone(&service));
    {
        let state = form.state_mut();
        state.form.player_name = "Fay".into();
        state.form.category = Category::C;
        for (idx, pts) in [5, 10, 15, 20].into_iter().enumerate() {
            state.form.set_score(idx, BoulderScore::new(pts).unwrap());
        }
    }
    assert!(block_on(form.submit()));
    assert_eq!(form.state().form.category, Category::E);

    let stored = service.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].total_score, 50);

    let mut board = LeaderboardController::new(service);
    block_on(board.load());
    assert_eq!(board.state().snapshot()[0].player_name, "Fay");
}

#[test]
fn rejected_submission_keeps_form() {
    let service = MemoryScoreService::new(now());
    service.fail_next(
        Operation::Submit,
        ServiceError::from_status(400, r#"{"message":"Scores closed for today"}"#),
    );
    let mut form = SubmissionController::new(service);
    form.state_mut().form.player_name = "Gus".into();
    assert!(!block_on(form.submit()));
    assert_eq!(form.state().error(), Some("Scores closed for today"));
    assert_eq!(form.state().form.player_name, "Gus");

    form.reset();
    assert!(form.state().form.player_name.is_empty());
    assert_eq!(form.service().call_count(Operation::Submit), 1);
}

#[test]
fn chart_follows_loaded_snapshot() {
    let service = MemoryScoreService::with_records(
        now(),
        vec![
            record(1, "Ana", Category::A, 40, 0),
            record(2, "Ben", Category::A, 60, 0),
        ],
    );
    let mut board = LeaderboardController::new(service);
    block_on(board.load());
    let points = daily_averages(board.state().snapshot(), &Utc);
    assert_eq!(points.len(), 1);
    assert!((points[0].average - 50.0).abs() < f64::EPSILON);
}
