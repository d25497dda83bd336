use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

/// Fallback for unknown paths; offers a way back to the leaderboard.
#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let back = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <section class="not-found" aria-labelledby="not-found-heading">
            <h1 id="not-found-heading">{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <button type="button" class="btn btn-primary" onclick={back}>
                { t("not_found.back") }
            </button>
        </section>
    }
}
