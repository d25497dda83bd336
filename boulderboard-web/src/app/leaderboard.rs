//! Leaderboard screen: owns the view state and drives it against the backend.
//!
//! State sits in `Rc<RefCell<_>>` cells. Borrows are released before every
//! `.await`, and a forced redraw follows each mutation.

use crate::a11y::set_status;
use crate::api::HttpScoreService;
use crate::dom::{confirm, console_error, download_text, js_error_message};
use crate::i18n::{t, tr};
use crate::pages::leaderboard::LeaderboardPage;
use boulderboard_core::{
    CategoryFilter, Confirm, ConfirmRequest, DeleteOutcome, HistoryState, LeaderboardState,
    LoadOutcome, RecordId, RequestTicket, ScoreService, Timeframe,
};
use chrono::Local;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// `window.confirm` with translated prompts.
struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        let prompt = match request {
            ConfirmRequest::ClearAll => t("confirm.clear"),
            ConfirmRequest::Delete { player_name } => {
                let mut args = BTreeMap::new();
                args.insert("name", player_name.as_str());
                tr("confirm.delete", Some(&args))
            }
        };
        confirm(&prompt)
    }
}

#[derive(Clone)]
struct LeaderboardHandle {
    service: Rc<HttpScoreService>,
    board: Rc<RefCell<LeaderboardState>>,
    history: Rc<RefCell<HistoryState>>,
    redraw: UseForceUpdateHandle,
}

impl LeaderboardHandle {
    fn run_load(&self, ticket: RequestTicket) {
        self.redraw.force_update();
        let this = self.clone();
        spawn_local(async move {
            let result = this.service.list_scores(ticket.timeframe).await;
            let outcome = this.board.borrow_mut().finish_load(ticket, result);
            if outcome == LoadOutcome::Applied {
                let count = this.board.borrow().filtered_view().len().to_string();
                let mut args = BTreeMap::new();
                args.insert("count", count.as_str());
                set_status(&tr("leaderboard.loaded", Some(&args)));
            }
            if outcome != LoadOutcome::Stale {
                this.redraw.force_update();
            }
        });
    }

    fn load(&self) {
        let ticket = self.board.borrow_mut().begin_load();
        self.run_load(ticket);
    }

    fn set_timeframe(&self, timeframe: Timeframe) {
        let ticket = self.board.borrow_mut().set_timeframe(timeframe);
        if let Some(ticket) = ticket {
            self.run_load(ticket);
        }
    }

    fn set_category_filter(&self, filter: CategoryFilter) {
        self.board.borrow_mut().set_category_filter(filter);
        self.redraw.force_update();
    }

    fn dismiss_error(&self) {
        self.board.borrow_mut().dismiss_error();
        self.redraw.force_update();
    }

    fn delete(&self, id: RecordId) {
        let player_name = self
            .board
            .borrow()
            .find(&id)
            .map(|record| record.player_name.clone())
            .unwrap_or_else(|| id.to_string());
        if !BrowserConfirm.confirm(&ConfirmRequest::Delete { player_name }) {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            let result = this.service.delete_score(&id).await;
            let outcome = this.board.borrow_mut().finish_delete(&id, result);
            match outcome {
                DeleteOutcome::Resync(ticket) => this.run_load(ticket),
                DeleteOutcome::Failed => this.redraw.force_update(),
            }
        });
    }

    fn clear_all(&self) {
        if !BrowserConfirm.confirm(&ConfirmRequest::ClearAll) {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            let result = this.service.clear_scores().await;
            if this.board.borrow_mut().finish_clear(result) {
                set_status(&t("leaderboard.cleared"));
            }
            this.redraw.force_update();
        });
    }

    fn export_csv(&self) {
        let this = self.clone();
        spawn_local(async move {
            let result = this.service.export_scores().await;
            let today = Local::now().date_naive();
            let export = this.board.borrow_mut().finish_export(result, today, &Local);
            let Some(export) = export else {
                this.redraw.force_update();
                return;
            };
            match download_text(&export.file_name, "text/csv;charset=utf-8", &export.contents) {
                Ok(()) => set_status(&t("leaderboard.exported")),
                Err(err) => {
                    let message = js_error_message(&err);
                    console_error(&message);
                    this.board.borrow_mut().download_failed(message);
                    this.redraw.force_update();
                }
            }
        });
    }

    fn open_history(&self, player_name: String) {
        let ticket = self.history.borrow_mut().open(&player_name);
        self.redraw.force_update();
        let this = self.clone();
        spawn_local(async move {
            let result = this.service.player_history(&ticket.player_name).await;
            if this.history.borrow_mut().finish(&ticket, result) {
                this.redraw.force_update();
            }
        });
    }

    fn close_history(&self) {
        self.history.borrow_mut().close();
        self.redraw.force_update();
    }
}

#[function_component(LeaderboardScreen)]
pub fn leaderboard_screen() -> Html {
    let service = use_memo((), |_| HttpScoreService::from_env());
    let handle = LeaderboardHandle {
        service,
        board: use_mut_ref(LeaderboardState::new),
        history: use_mut_ref(HistoryState::new),
        redraw: use_force_update(),
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            handle.load();
            || {}
        });
    }

    let on = |f: fn(&LeaderboardHandle)| {
        let handle = handle.clone();
        Callback::from(move |()| f(&handle))
    };
    let on_timeframe = {
        let handle = handle.clone();
        Callback::from(move |timeframe| handle.set_timeframe(timeframe))
    };
    let on_filter = {
        let handle = handle.clone();
        Callback::from(move |filter| handle.set_category_filter(filter))
    };
    let on_delete = {
        let handle = handle.clone();
        Callback::from(move |id| handle.delete(id))
    };
    let on_open_history = {
        let handle = handle.clone();
        Callback::from(move |name| handle.open_history(name))
    };

    let board = Rc::new(handle.board.borrow().clone());
    let history = Rc::new(handle.history.borrow().clone());

    html! {
        <LeaderboardPage
            {board}
            {history}
            {on_timeframe}
            {on_filter}
            on_retry={on(LeaderboardHandle::load)}
            on_dismiss_error={on(LeaderboardHandle::dismiss_error)}
            {on_delete}
            on_clear={on(LeaderboardHandle::clear_all)}
            on_export={on(LeaderboardHandle::export_csv)}
            {on_open_history}
            on_close_history={on(LeaderboardHandle::close_history)}
        />
    }
}
