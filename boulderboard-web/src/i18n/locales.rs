use serde_json::Value;

pub(super) fn load_translations(lang: &str) -> Option<Value> {
    let raw = match lang {
        "en" => include_str!("../../i18n/en.json"),
        _ => return None,
    };
    serde_json::from_str(raw).ok()
}
