use crate::a11y::{restore_focus, trap_focus_in};
use crate::i18n::t;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static NEXT_DIALOG: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Element id that receives focus again once the dialog closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Element ids tying the dialog to its title and description.
#[derive(Clone, PartialEq)]
struct DialogIds {
    container: String,
    title: String,
    description: String,
}

impl DialogIds {
    fn next() -> Self {
        let n = NEXT_DIALOG.fetch_add(1, Ordering::Relaxed);
        Self {
            container: format!("dialog-{n}"),
            title: format!("dialog-{n}-title"),
            description: format!("dialog-{n}-desc"),
        }
    }
}

/// Focus the dialog and trap Tab while open; on the open-to-closed edge hand
/// focus back to `return_focus_id`.
#[hook]
fn use_dialog_focus(
    open: bool,
    container_id: String,
    return_focus_id: Option<AttrValue>,
    node: NodeRef,
) {
    let was_open = use_mut_ref(|| false);
    use_effect_with((open, return_focus_id), move |(open, return_focus_id)| {
        let closing = *was_open.borrow() && !*open;
        *was_open.borrow_mut() = *open;
        if *open {
            if let Some(el) = node.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            trap_focus_in(&container_id);
        } else if closing && let Some(id) = return_focus_id {
            restore_focus(id);
        }
        || {}
    });
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let ids = use_memo((), |_| DialogIds::next());
    let node = use_node_ref();
    use_dialog_focus(
        props.open,
        ids.container.clone(),
        props.return_focus_id.clone(),
        node.clone(),
    );

    if !props.open {
        return Html::default();
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                on_close.emit(());
            }
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let described_by = props.description.as_ref().map(|_| ids.description.clone());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={close.clone()}>
            <div
                id={ids.container.clone()}
                class="modal"
                role="dialog"
                tabindex="-1"
                aria-modal="true"
                aria-labelledby={ids.title.clone()}
                aria-describedby={described_by}
                onkeydown={on_keydown}
                onclick={keep_open}
                ref={node}
            >
                <div class="modal__header">
                    <h2 id={ids.title.clone()}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={t("modal.close")} onclick={close}>
                        {"×"}
                    </button>
                </div>
                if let Some(text) = props.description.clone() {
                    <p id={ids.description.clone()} class="modal__description">{ text }</p>
                }
                <div class="modal__body">{ props.children.clone() }</div>
            </div>
        </div>
    }
}
