//! Deployment-dependent locations, fixed at compile time.

/// Backend used when `SCORE_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Base path for the router (e.g., `/scores` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base URL of the remote score service, without a trailing slash.
///
/// Taken from `SCORE_API_URL` at compile time.
#[must_use]
pub fn api_base() -> String {
    api_base_with(option_env!("SCORE_API_URL"))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn api_base_with(configured: Option<&str>) -> String {
    let base = configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/').to_string()
}
