//! Widget errors.
//!
//! None of these reach the user. The DOM layer logs them and keeps going, so a
//! failing effect or storage write degrades one widget instead of the page.

use crate::effect::Target;

/// Errors produced while configuring widgets or applying their effects.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The JSON configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// An effect addressed an element the host does not know about.
    #[error("no element bound for target {0:?}")]
    MissingTarget(Target),

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// Local storage is unavailable or rejected the write.
    #[error("storage write failed: {0}")]
    Storage(String),
}
