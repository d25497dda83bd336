use crate::a11y::set_status;
use crate::api::HttpScoreService;
use crate::pages::submit::SubmitPage;
use boulderboard_core::{BoulderScore, Category, ScoreService, SubmissionState};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(SubmitScreen)]
pub fn submit_screen() -> Html {
    let service = use_memo((), |_| HttpScoreService::from_env());
    let state = use_mut_ref(SubmissionState::new);
    let redraw = use_force_update();

    let on_name = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |name: String| {
            state.borrow_mut().form.player_name = name;
            redraw.force_update();
        })
    };
    let on_category = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |category: Category| {
            state.borrow_mut().form.category = category;
            redraw.force_update();
        })
    };
    let on_score = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |(index, score): (usize, BoulderScore)| {
            state.borrow_mut().form.set_score(index, score);
            redraw.force_update();
        })
    };
    let on_reset = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            state.borrow_mut().reset();
            redraw.force_update();
        })
    };
    let on_submit = {
        let state = state.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            let pending = state.borrow_mut().begin_submit();
            redraw.force_update();
            let Some(score) = pending else {
                return;
            };
            let service = Rc::clone(&service);
            let state = state.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let result = service.submit_score(&score).await;
                state.borrow_mut().finish_submit(result);
                if let Some(message) = state.borrow().confirmation() {
                    set_status(message);
                }
                redraw.force_update();
            });
        })
    };

    let snapshot = Rc::new(state.borrow().clone());

    html! {
        <SubmitPage
            state={snapshot}
            {on_name}
            {on_category}
            {on_score}
            {on_submit}
            {on_reset}
        />
    }
}
