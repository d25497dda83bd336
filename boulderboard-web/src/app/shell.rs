use crate::a11y::STATUS_REGION_ID;
use crate::components::nav::NavBar;
use crate::router::View;
use yew::prelude::*;

/// Navigation bar, main landmark and the polite live region around a view.
#[must_use]
pub fn render_shell(active: Option<View>, on_navigate: Callback<View>, content: Html) -> Html {
    html! {
        <>
            <NavBar {active} {on_navigate} />
            <main id="main" class="container" tabindex="-1">
                { content }
            </main>
            <div id={STATUS_REGION_ID} class="sr-only" aria-live="polite" role="status"></div>
        </>
    }
}
