//! Error type shared by the core and the host adapters.
//!
//! Most failures here are reported and swallowed by the controller: the theme
//! degrades to a usable default instead of surfacing to the page.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("document error: {0}")]
    Dom(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme manager already installed")]
    AlreadyInstalled,
    #[error("theme manager not installed")]
    NotInstalled,
    #[error("theme controller already initialized")]
    AlreadyInitialized,
    #[error("theme controller is busy with another transition")]
    Busy,
}
