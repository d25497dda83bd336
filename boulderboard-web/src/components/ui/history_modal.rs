use crate::components::modal::Modal;
use crate::i18n::{fmt_average, fmt_date, t, tr};
use boulderboard_core::HistoryState;
use chrono::Local;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub history: Rc<HistoryState>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

fn body(history: &HistoryState) -> Html {
    if history.is_loading() {
        return html! { <p class="loading" aria-busy="true">{ t("ui.loading") }</p> };
    }
    if history.error().is_some() {
        return html! { <p class="history-unavailable">{ t("history.unavailable") }</p> };
    }
    let Some(summary) = history.summary() else {
        return html! { <p class="empty-state">{ t("history.empty") }</p> };
    };

    html! {
        <>
            <dl class="history-summary">
                <dt>{ t("history.attempts") }</dt>
                <dd>{ summary.attempts }</dd>
                <dt>{ t("history.best") }</dt>
                <dd>{ summary.best }</dd>
                <dt>{ t("history.average") }</dt>
                <dd>{ fmt_average(summary.average) }</dd>
            </dl>
            <table class="table history-table">
                <thead>
                    <tr>
                        <th scope="col">{ t("leaderboard.col_date") }</th>
                        <th scope="col">{ t("leaderboard.col_category") }</th>
                        <th scope="col">{ t("leaderboard.col_score") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for history.records().iter().map(|record| html! {
                        <tr key={record.id.as_str().to_string()}>
                            <td>{ fmt_date(record.timestamp.with_timezone(&Local).date_naive()) }</td>
                            <td>{ record.category.as_str() }</td>
                            <td>{ record.total_score }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </>
    }
}

#[function_component(HistoryModal)]
pub fn history_modal(p: &Props) -> Html {
    let name = p.history.player_name().unwrap_or_default();
    let mut args = BTreeMap::new();
    args.insert("name", name);
    let title = tr("history.title", Some(&args));

    html! {
        <Modal
            open={p.history.is_open()}
            title={AttrValue::from(title)}
            description={Some(AttrValue::from(t("history.description")))}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
        >
            { body(&p.history) }
        </Modal>
    }
}
