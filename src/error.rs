//! Startup and configuration errors.
//!
//! ERROR HANDLING
//! ==============
//! Only startup can fail hard. Every required element is acquired once by the
//! composition root, so a page that does not match the expected markup is
//! reported with the missing selector instead of failing later inside an
//! event handler. Runtime DOM hiccups are logged, not raised.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Invalid `portfolio-config` contents.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid page config: {0}")]
    Invalid(String),
}

/// Failure while acquiring page elements or installing listeners.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    /// A required element was not found. Holds the id or selector.
    #[error("required element `{0}` is missing from the page")]
    MissingElement(String),
    #[error("element `{selector}` is not a {expected}")]
    WrongElementKind { selector: String, expected: &'static str },
    #[error("selector `{0}` is not valid")]
    BadSelector(String),
    #[error("failed to install `{event}` listener on `{target}`")]
    Listener { event: String, target: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
