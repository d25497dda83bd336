use crate::components::ui::boulder_select::BoulderSelect;
use crate::i18n::{t, tr};
use boulderboard_core::{BoulderScore, Category, SubmissionState};
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: Rc<SubmissionState>,
    pub on_name: Callback<String>,
    pub on_category: Callback<Category>,
    pub on_score: Callback<(usize, BoulderScore)>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(SubmitPage)]
pub fn submit_page(p: &Props) -> Html {
    let form = &p.state.form;
    let busy = p.state.is_submitting();

    let on_name = {
        let cb = p.on_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let on_category = {
        let cb = p.on_category.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                match sel.value().parse::<Category>() {
                    Ok(category) => cb.emit(category),
                    Err(err) => log::warn!("ignoring category selection: {err}"),
                }
            }
        })
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let total = form.total().to_string();
    let mut args = BTreeMap::new();
    args.insert("total", total.as_str());
    let total_label = tr("submit.total", Some(&args));

    html! {
        <section class="submit-page" aria-labelledby="submit-heading">
            <h1 id="submit-heading">{ t("submit.title") }</h1>
            <form class="score-form" onsubmit={on_submit} novalidate=true>
                <div class="form-group">
                    <label for="player-name">{ t("submit.player_name") }</label>
                    <input
                        id="player-name"
                        type="text"
                        class="form-control"
                        required=true
                        placeholder={t("submit.placeholder")}
                        value={form.player_name.clone()}
                        oninput={on_name}
                        disabled={busy}
                    />
                </div>
                <div class="form-group">
                    <label for="player-category">{ t("submit.category") }</label>
                    <select id="player-category" class="form-select" onchange={on_category} disabled={busy}>
                        { for Category::ALL.into_iter().map(|category| html! {
                            <option value={category.as_str()} selected={category == form.category}>
                                { category.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="boulder-grid">
                    { for form.scores.iter().enumerate().map(|(index, value)| html! {
                        <BoulderSelect
                            {index}
                            value={*value}
                            on_change={p.on_score.clone()}
                            disabled={busy}
                        />
                    }) }
                </div>
                <p class="total" aria-live="polite">{ total_label }</p>
                if let Some(message) = p.state.error() {
                    <div class="alert alert-danger" role="alert">{ message.to_string() }</div>
                }
                if let Some(message) = p.state.confirmation() {
                    <div class="alert alert-success" role="status">{ message.to_string() }</div>
                }
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        { if busy { t("submit.submitting") } else { t("submit.submit") } }
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_reset} disabled={busy}>
                        { t("submit.reset") }
                    </button>
                </div>
            </form>
        </section>
    }
}
