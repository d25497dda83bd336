use crate::i18n::t;
use crate::router::View;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Highlighted entry; `None` on the not-found page.
    pub active: Option<View>,
    pub on_navigate: Callback<View>,
}

#[function_component(NavBar)]
pub fn nav_bar(p: &Props) -> Html {
    let item = |view: View, key: &str| {
        let active = p.active == Some(view);
        let onclick = {
            let cb = p.on_navigate.clone();
            Callback::from(move |_| cb.emit(view))
        };
        html! {
            <li>
                <button
                    type="button"
                    class={classes!("nav-link", active.then_some("active"))}
                    aria-current={active.then_some("page")}
                    {onclick}
                >
                    { t(key) }
                </button>
            </li>
        }
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <nav class="navbar" aria-label={t("nav.label")}>
                <span class="navbar-brand">{ t("nav.title") }</span>
                <ul class="navbar-nav">
                    { item(View::Submit, "nav.submit") }
                    { item(View::Leaderboard, "nav.leaderboard") }
                </ul>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn active_view_is_marked_current() {
        crate::i18n::set_lang("en");
        let props = Props {
            active: Some(View::Submit),
            on_navigate: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NavBar>::with_props(props).render());
        assert!(html.contains("Boulder League"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        let current = html.find("aria-current").unwrap();
        let submit = html.find("Submit Scores").unwrap();
        let board = html.find("View Leaderboard").unwrap();
        assert!(current < submit && submit < board);
    }

    #[test]
    fn nothing_is_current_on_unknown_routes() {
        crate::i18n::set_lang("en");
        let props = Props {
            active: None,
            on_navigate: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NavBar>::with_props(props).render());
        assert!(!html.contains("aria-current"));
    }
}
