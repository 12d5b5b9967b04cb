//! Default anchors, class names, labels and storage key for the page widgets.

// ── Theme toggle ────────────────────────────────────────────────

/// Local-storage key holding the persisted theme flag.
pub const THEME_STORAGE_KEY: &str = "df-theme";

/// Persisted value for light mode.
pub const THEME_VALUE_LIGHT: &str = "light";

/// Persisted value for dark mode.
pub const THEME_VALUE_DARK: &str = "dark";

pub const THEME_BUTTON_ID: &str = "theme-switch-btn";

/// Body class present while the light theme is active.
pub const THEME_LIGHT_CLASS: &str = "light-theme";

/// Button label shown in light mode ("dark theme", the mode a click switches to).
pub const THEME_LABEL_WHEN_LIGHT: &str = "Тёмная тема";

/// Button label shown in dark mode ("light theme").
pub const THEME_LABEL_WHEN_DARK: &str = "Светлая тема";

// ── Modal dialog ────────────────────────────────────────────────

pub const MODAL_ID: &str = "main-modal";
pub const MODAL_OPEN_BUTTON_ID: &str = "open-modal-btn";
pub const MODAL_CLOSE_BUTTON_ID: &str = "close-modal-btn-x";
pub const MODAL_FOOTER_CLOSE_ID: &str = "close-modal-btn-footer";

/// Dialog class present while the modal is shown.
pub const MODAL_OPEN_CLASS: &str = "open";

/// Inline body style property used for the scroll lock.
pub const SCROLL_LOCK_PROPERTY: &str = "overflow";

/// Inline value of [`SCROLL_LOCK_PROPERTY`] while the modal is open.
pub const SCROLL_LOCK_VALUE: &str = "hidden";

/// `KeyboardEvent.key` value that dismisses the modal.
pub const ESCAPE_KEY: &str = "Escape";

// ── Carousel ────────────────────────────────────────────────────

pub const CAROUSEL_TRACK_ID: &str = "slides-container";
pub const CAROUSEL_DOTS_ID: &str = "slider-dots";
pub const CAROUSEL_PREV_ID: &str = "prev-slide-btn";
pub const CAROUSEL_NEXT_ID: &str = "next-slide-btn";
pub const CAROUSEL_SLIDE_CLASS: &str = "slide";
pub const CAROUSEL_DOT_CLASS: &str = "dot-btn";
pub const CAROUSEL_ACTIVE_CLASS: &str = "active";

/// Attribute tagging each generated dot with its slide index.
pub const CAROUSEL_INDEX_ATTRIBUTE: &str = "data-slide-index";

/// Inline track style property carrying the slide offset.
pub const TRACK_TRANSFORM_PROPERTY: &str = "transform";

/// Horizontal distance between neighbouring slides, in percent of the track.
pub const SLIDE_STEP_PERCENT: i64 = 100;
