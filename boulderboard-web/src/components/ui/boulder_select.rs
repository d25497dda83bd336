use crate::i18n::{fmt_points, tr};
use boulderboard_core::BoulderScore;
use std::collections::BTreeMap;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub index: usize,
    pub value: BoulderScore,
    pub on_change: Callback<(usize, BoulderScore)>,
    #[prop_or_default]
    pub disabled: bool,
}

/// One of the ten sub-score pickers on the scorecard.
#[function_component(BoulderSelect)]
pub fn boulder_select(p: &Props) -> Html {
    let id = format!("boulder-{}", p.index + 1);
    let number = (p.index + 1).to_string();
    let mut args = BTreeMap::new();
    args.insert("n", number.as_str());
    let label = tr("submit.boulder", Some(&args));

    let onchange = {
        let cb = p.on_change.clone();
        let index = p.index;
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let parsed = sel
                .value()
                .parse::<u32>()
                .ok()
                .and_then(|points| BoulderScore::new(points).ok());
            match parsed {
                Some(score) => cb.emit((index, score)),
                None => log::warn!("ignoring boulder value {:?}", sel.value()),
            }
        })
    };

    html! {
        <div class="boulder-select">
            <label for={id.clone()}>{ label }</label>
            <select {id} class="form-select" disabled={p.disabled} {onchange}>
                { for BoulderScore::OPTIONS.into_iter().map(|option| html! {
                    <option value={option.points().to_string()} selected={option == p.value}>
                        { fmt_points(option.points()) }
                    </option>
                }) }
            </select>
        </div>
    }
}
