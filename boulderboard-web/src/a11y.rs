// Accessibility helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "status-live";

const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex='-1'])";

/// Announce a message through the live region for screen readers.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

/// Keep Tab and Shift+Tab cycling inside the element with `container_id`.
pub fn trap_focus_in(container_id: &str) {
    let Some(container) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return;
    };
    if container.get_attribute("data-focus-trap").is_some() {
        return;
    }
    let _ = container.set_attribute("data-focus-trap", "1");

    let scope = container.clone();
    let handler = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            let Ok(nodes) = scope.query_selector_all(FOCUSABLE) else {
                return;
            };
            let len = nodes.length();
            if len == 0 {
                event.prevent_default();
                return;
            }
            let first = nodes.item(0).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
            let last = nodes
                .item(len - 1)
                .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok());
            let active = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.active_element());
            let at = |target: &Option<web_sys::HtmlElement>| {
                matches!((target, active.as_ref()), (Some(t), Some(a)) if t.is_same_node(Some(a)))
            };
            let wrap_to = if event.shift_key() && at(&first) {
                last.as_ref()
            } else if !event.shift_key() && at(&last) {
                first.as_ref()
            } else {
                None
            };
            if let Some(target) = wrap_to {
                event.prevent_default();
                let _ = target.focus();
            }
        },
    );
    let _ = container
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
