use crate::i18n::{fmt_date, t, tr};
use boulderboard_core::{LeaderboardState, Medal, RankedRow, RecordId};
use chrono::Local;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: Rc<LeaderboardState>,
    pub on_delete: Callback<RecordId>,
    pub on_open_history: Callback<String>,
}

fn medal_label(medal: Medal) -> String {
    t(match medal {
        Medal::Gold => "medal.gold",
        Medal::Silver => "medal.silver",
        Medal::Bronze => "medal.bronze",
    })
}

fn named(key: &str, name: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    tr(key, Some(&args))
}

fn render_row(row: &RankedRow<'_>, p: &Props) -> Html {
    let record = row.record;
    let on_delete = {
        let cb = p.on_delete.clone();
        let id = record.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let on_history = {
        let cb = p.on_open_history.clone();
        let name = record.player_name.clone();
        Callback::from(move |_| cb.emit(name.clone()))
    };
    let history_btn_id = format!("history-btn-{}", record.id);
    let date = fmt_date(record.timestamp.with_timezone(&Local).date_naive());

    html! {
        <tr key={record.id.as_str().to_string()} class={classes!(row.medal.map(Medal::css_class))}>
            <td class="rank">
                { row.rank }
                { row.medal.map(|medal| html! {
                    <span class={classes!("trophy", medal.css_class())} role="img" aria-label={medal_label(medal)}>{"🏆"}</span>
                }).unwrap_or_default() }
            </td>
            <td>
                <button
                    type="button"
                    id={history_btn_id}
                    class="link-button player-link"
                    aria-label={named("leaderboard.history_label", &record.player_name)}
                    onclick={on_history}
                >
                    { record.player_name.clone() }
                </button>
            </td>
            <td>{ record.category.as_str() }</td>
            <td class="score">{ record.total_score }</td>
            <td>{ date }</td>
            <td>
                <button
                    type="button"
                    class="btn btn-danger btn-sm"
                    aria-label={named("leaderboard.delete_label", &record.player_name)}
                    onclick={on_delete}
                >
                    { t("leaderboard.delete") }
                </button>
            </td>
        </tr>
    }
}

/// Ranked rows of the filtered view. Ranks restart at 1 for every filter.
#[function_component(LeaderboardTable)]
pub fn leaderboard_table(p: &Props) -> Html {
    let rows = p.board.ranked_rows();
    if rows.is_empty() {
        return html! { <p class="empty-state">{ t("leaderboard.empty") }</p> };
    }

    html! {
        <table class="table leaderboard-table" aria-busy={p.board.is_loading().to_string()}>
            <caption class="sr-only">{ t("leaderboard.caption") }</caption>
            <thead>
                <tr>
                    <th scope="col">{ t("leaderboard.col_rank") }</th>
                    <th scope="col">{ t("leaderboard.col_player") }</th>
                    <th scope="col">{ t("leaderboard.col_category") }</th>
                    <th scope="col">{ t("leaderboard.col_score") }</th>
                    <th scope="col">{ t("leaderboard.col_date") }</th>
                    <th scope="col">{ t("leaderboard.col_actions") }</th>
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|row| render_row(row, p)) }
            </tbody>
        </table>
    }
}
