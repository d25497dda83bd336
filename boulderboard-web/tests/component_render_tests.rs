use boulderboard_core::{
    Category, HistoryState, LeaderboardState, RecordId, ScoreRecord, ServiceError,
};
use boulderboard_web::components::modal::Modal;
use boulderboard_web::components::ui::history_modal::HistoryModal;
use boulderboard_web::components::ui::leaderboard_table::LeaderboardTable;
use futures::executor::block_on;
use std::rc::Rc;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn record(id: u64, name: &str, category: Category, total: u32) -> ScoreRecord {
    ScoreRecord {
        id: RecordId::from(id),
        player_name: name.to_string(),
        category,
        boulder_scores: vec![0; 10],
        total_score: total,
        timestamp: "2024-06-28T12:00:00Z".parse().unwrap(),
    }
}

fn loaded(records: Vec<ScoreRecord>) -> LeaderboardState {
    let mut state = LeaderboardState::new();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(records));
    state
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    boulderboard_web::i18n::set_lang("en");
    let open_props = boulderboard_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        description: Some(AttrValue::from("Desc")),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("Close dialog"));
    assert!(html.contains("Desc"));

    let closed_props = boulderboard_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        description: None,
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn table_ranks_rows_and_marks_podium() {
    boulderboard_web::i18n::set_lang("en");
    let board = loaded(vec![
        record(1, "Ana", Category::A, 220),
        record(2, "Ben", Category::E, 200),
        record(3, "Cleo", Category::A, 180),
        record(4, "Dev", Category::B, 90),
    ]);
    let props = boulderboard_web::components::ui::leaderboard_table::Props {
        board: Rc::new(board),
        on_delete: Callback::noop(),
        on_open_history: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LeaderboardTable>::with_props(props).render());
    assert!(html.contains("trophy-gold"));
    assert!(html.contains("trophy-silver"));
    assert!(html.contains("trophy-bronze"));
    assert_eq!(html.matches("<tr").count(), 5);
    assert!(html.contains("6/28/2024"));
    assert!(html.contains("Delete score for Dev"));
    assert!(html.contains("history-btn-3"));
}

#[test]
fn table_ranks_restart_under_category_filter() {
    boulderboard_web::i18n::set_lang("en");
    let mut board = loaded(vec![
        record(1, "Ana", Category::A, 220),
        record(2, "Ben", Category::E, 200),
        record(3, "Cleo", Category::A, 180),
    ]);
    board.set_category_filter(boulderboard_core::CategoryFilter::Only(Category::E));
    let props = boulderboard_web::components::ui::leaderboard_table::Props {
        board: Rc::new(board),
        on_delete: Callback::noop(),
        on_open_history: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LeaderboardTable>::with_props(props).render());
    assert!(html.contains("Ben"));
    assert!(!html.contains("Ana"));
    assert!(html.contains("trophy-gold"));
    assert!(!html.contains("trophy-silver"));
}

#[test]
fn empty_table_shows_placeholder() {
    boulderboard_web::i18n::set_lang("en");
    let props = boulderboard_web::components::ui::leaderboard_table::Props {
        board: Rc::new(LeaderboardState::new()),
        on_delete: Callback::noop(),
        on_open_history: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LeaderboardTable>::with_props(props).render());
    assert!(html.contains("No scores yet."));
    assert!(!html.contains("<table"));
}

#[test]
fn history_modal_shows_summary() {
    boulderboard_web::i18n::set_lang("en");
    let mut history = HistoryState::new();
    let ticket = history.open("Ana");
    history.finish(
        &ticket,
        Ok(vec![
            record(1, "Ana", Category::A, 40),
            record(2, "Ana", Category::A, 80),
            record(3, "Ana", Category::A, 60),
        ]),
    );
    let props = boulderboard_web::components::ui::history_modal::Props {
        history: Rc::new(history),
        on_close: Callback::noop(),
        return_focus_id: None,
    };
    let html = block_on(
        LocalServerRenderer::<HistoryModal>::with_props(props)
            .hydratable(false)
            .render(),
    );
    assert!(html.contains("s History"));
    assert!(html.contains("Ana"));
    assert!(html.contains("<dd>80</dd>"));
    assert!(html.contains("<dd>60.0</dd>"));
    assert!(html.contains("<dd>3</dd>"));
}

#[test]
fn history_modal_failure_stays_inside_modal() {
    boulderboard_web::i18n::set_lang("en");
    let mut history = HistoryState::new();
    let ticket = history.open("Ben");
    history.finish(&ticket, Err(ServiceError::Transport("offline".into())));
    let props = boulderboard_web::components::ui::history_modal::Props {
        history: Rc::new(history),
        on_close: Callback::noop(),
        return_focus_id: None,
    };
    let html = block_on(LocalServerRenderer::<HistoryModal>::with_props(props).render());
    assert!(html.contains("History unavailable right now."));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn closed_history_renders_nothing() {
    boulderboard_web::i18n::set_lang("en");
    let props = boulderboard_web::components::ui::history_modal::Props {
        history: Rc::new(HistoryState::new()),
        on_close: Callback::noop(),
        return_focus_id: None,
    };
    let html = block_on(LocalServerRenderer::<HistoryModal>::with_props(props).render());
    assert!(!html.contains("modal-backdrop"));
}
