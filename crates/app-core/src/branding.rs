//! Todo Smart branding
//!
//! Fixed identity of the application package. The display name is not
//! here: it is supplied by the environment (see [`crate::config`]).

/// Package slug
pub const APP_SLUG: &str = "todo-smart";

/// URL scheme used for deep links (`todo-smart://task/42`)
pub const URL_SCHEME: &str = "todo-smart";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of deep-link URLs, e.g. `todo-smart://`
pub fn deep_link_prefix() -> String {
    format!("{}://", URL_SCHEME)
}

/// Build a deep-link URL for an app path (`/task/42` -> `todo-smart://task/42`)
pub fn deep_link(path: &str) -> String {
    format!("{}{}", deep_link_prefix(), path.trim_start_matches('/'))
}
