#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
pub mod leaderboard;
pub mod shell;
#[cfg(target_arch = "wasm32")]
pub mod submit;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |view| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from_view(view));
            }
        })
    };
    let on_go_home = Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Leaderboard);
        }
    });

    let content = match route.view() {
        Some(crate::router::View::Leaderboard) => {
            html! { <leaderboard::LeaderboardScreen /> }
        }
        Some(crate::router::View::Submit) => html! { <submit::SubmitScreen /> },
        None => html! { <crate::pages::not_found::NotFound {on_go_home} /> },
    };

    shell::render_shell(route.view(), on_navigate, content)
}
