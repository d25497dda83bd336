use crate::components::ui::error_banner::ErrorBanner;
use crate::components::ui::filter_bar::FilterBar;
use crate::components::ui::history_modal::HistoryModal;
use crate::components::ui::leaderboard_table::LeaderboardTable;
use crate::components::ui::performance_chart::PerformanceChart;
use crate::i18n::t;
use boulderboard_core::{
    CategoryFilter, HistoryState, LeaderboardState, RecordId, Timeframe, daily_averages,
};
use chrono::Local;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: Rc<LeaderboardState>,
    pub history: Rc<HistoryState>,
    pub on_timeframe: Callback<Timeframe>,
    pub on_filter: Callback<CategoryFilter>,
    pub on_retry: Callback<()>,
    pub on_dismiss_error: Callback<()>,
    pub on_delete: Callback<RecordId>,
    pub on_clear: Callback<()>,
    pub on_export: Callback<()>,
    pub on_open_history: Callback<String>,
    pub on_close_history: Callback<()>,
}

/// Button that opened the history modal, so focus can go back to it.
fn history_trigger_id(board: &LeaderboardState, history: &HistoryState) -> Option<AttrValue> {
    let name = history.player_name()?;
    board
        .filtered_view()
        .into_iter()
        .find(|record| record.player_name == name)
        .map(|record| AttrValue::from(format!("history-btn-{}", record.id)))
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(p: &Props) -> Html {
    let points = daily_averages(p.board.snapshot(), &Local);
    let error = p.board.error().map(|err| {
        let on_retry = err.offers_retry().then(|| p.on_retry.clone());
        html! {
            <ErrorBanner
                message={AttrValue::from(err.to_string())}
                {on_retry}
                on_dismiss={Some(p.on_dismiss_error.clone())}
            />
        }
    });
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_export = {
        let cb = p.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let loading = p.board.is_loading();

    html! {
        <section class="leaderboard-page" aria-labelledby="leaderboard-heading">
            <div class="page-header">
                <h1 id="leaderboard-heading">{ t("leaderboard.title") }</h1>
                <div class="page-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_export}>
                        { t("leaderboard.export") }
                    </button>
                    <button type="button" class="btn btn-danger" onclick={on_clear}>
                        { t("leaderboard.clear") }
                    </button>
                </div>
            </div>
            <FilterBar
                timeframe={p.board.timeframe()}
                filter={p.board.filter()}
                on_timeframe={p.on_timeframe.clone()}
                on_filter={p.on_filter.clone()}
            />
            { error.unwrap_or_default() }
            if loading {
                <p class="loading" aria-busy="true">{ t("ui.loading") }</p>
            }
            <LeaderboardTable
                board={Rc::clone(&p.board)}
                on_delete={p.on_delete.clone()}
                on_open_history={p.on_open_history.clone()}
            />
            <PerformanceChart {points} />
            <HistoryModal
                history={Rc::clone(&p.history)}
                on_close={p.on_close_history.clone()}
                return_focus_id={history_trigger_id(&p.board, &p.history)}
            />
        </section>
    }
}
