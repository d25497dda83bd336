#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use boulderboard_web::a11y::{STATUS_REGION_ID, restore_focus, set_status, trap_focus_in};
use boulderboard_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, tag: &str) -> HtmlElement {
    let doc = dom::document().expect("document");
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.remove();
    }
    let el = doc.create_element(tag).expect("create element");
    el.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&el)
        .expect("append element");
    el.dyn_into().expect("html element")
}

#[wasm_bindgen_test]
fn status_lands_in_live_region() {
    let region = mount(STATUS_REGION_ID, "div");
    set_status("Scores submitted successfully!");
    assert_eq!(
        region.text_content().unwrap_or_default(),
        "Scores submitted successfully!"
    );
}

#[wasm_bindgen_test]
fn download_cleans_up_its_anchor() {
    let doc = dom::document().expect("document");
    let before = doc.query_selector_all("a[download]").expect("query").length();
    dom::download_text("leaderboard-2024-06-30.csv", "text/csv", "Player\n").expect("download");
    let after = doc.query_selector_all("a[download]").expect("query").length();
    assert_eq!(before, after);
}

#[wasm_bindgen_test]
fn focus_trap_is_installed_once() {
    let dialog = mount("trap-dialog", "div");
    trap_focus_in("trap-dialog");
    trap_focus_in("trap-dialog");
    assert_eq!(dialog.get_attribute("data-focus-trap").as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn focus_returns_to_trigger() {
    let trigger = mount("history-btn-7", "button");
    restore_focus("history-btn-7");
    let active = dom::document()
        .expect("document")
        .active_element()
        .expect("focused element");
    assert!(trigger.is_same_node(Some(&active)));
}
