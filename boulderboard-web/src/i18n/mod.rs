mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_average, fmt_date, fmt_points};
pub use render::{t, tr};
