use crate::i18n::locales::load_translations;
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn english() -> Value {
    load_translations("en").unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if lang == "en" {
        return Some(english_bundle());
    }
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback: english(),
    })
}

/// English is parsed once and shared as both translations and fallback.
fn english_bundle() -> I18nBundle {
    let fallback = english();
    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn browser_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.navigator().language())
            .and_then(|tag| tag.split('-').next().map(str::to_lowercase))
            .filter(|code| load_translations(code).is_some())
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = browser_lang();
        build_bundle(&initial).unwrap_or_else(english_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language and mirror it on the `<html lang>` attribute.
///
/// Unknown codes leave the current bundle in place.
pub fn set_lang(lang: &str) {
    if let Some(bundle) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(bundle));
        #[cfg(target_arch = "wasm32")]
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
