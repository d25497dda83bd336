use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
    /// Present only for failures that can be retried as-is.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    let retry = p.on_retry.as_ref().map(|cb| {
        let cb = cb.clone();
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <button type="button" class="btn retry-btn" {onclick}>{ t("leaderboard.retry") }</button>
        }
    });
    let dismiss = p.on_dismiss.as_ref().map(|cb| {
        let cb = cb.clone();
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <button type="button" class="btn-close" aria-label={t("ui.dismiss")} {onclick}>{"X"}</button>
        }
    });

    html! {
        <div class="alert alert-danger" role="alert">
            <span class="alert__message">{ p.message.clone() }</span>
            { retry.unwrap_or_default() }
            { dismiss.unwrap_or_default() }
        </div>
    }
}
