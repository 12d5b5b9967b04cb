//! Widget configuration: anchor ids, class names, labels, storage key.
//!
//! DESIGN
//! ======
//! Every field has a default from [`crate::consts`], and every section is
//! `#[serde(default)]`, so a host page only passes what differs from the
//! stock markup. Unknown fields are rejected to surface typos early.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::WidgetError;

/// Configuration for all three widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub theme: ThemeConfig,
    pub modal: ModalConfig,
    pub carousel: CarouselConfig,
}

impl WidgetConfig {
    /// Parse a JSON configuration object. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] if the JSON is malformed or names an
    /// unknown field.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Theme toggle anchors, labels and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub button_id: String,
    pub light_class: String,
    pub label_when_light: String,
    pub label_when_dark: String,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            button_id: consts::THEME_BUTTON_ID.into(),
            light_class: consts::THEME_LIGHT_CLASS.into(),
            label_when_light: consts::THEME_LABEL_WHEN_LIGHT.into(),
            label_when_dark: consts::THEME_LABEL_WHEN_DARK.into(),
            storage_key: consts::THEME_STORAGE_KEY.into(),
        }
    }
}

/// Modal dialog anchors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalConfig {
    pub modal_id: String,
    pub open_button_id: String,
    pub close_button_id: String,
    pub footer_close_id: String,
    pub open_class: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: consts::MODAL_ID.into(),
            open_button_id: consts::MODAL_OPEN_BUTTON_ID.into(),
            close_button_id: consts::MODAL_CLOSE_BUTTON_ID.into(),
            footer_close_id: consts::MODAL_FOOTER_CLOSE_ID.into(),
            open_class: consts::MODAL_OPEN_CLASS.into(),
        }
    }
}

/// Carousel anchors and class names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub track_id: String,
    pub dots_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub slide_class: String,
    pub dot_class: String,
    pub active_class: String,
    pub index_attribute: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track_id: consts::CAROUSEL_TRACK_ID.into(),
            dots_id: consts::CAROUSEL_DOTS_ID.into(),
            prev_id: consts::CAROUSEL_PREV_ID.into(),
            next_id: consts::CAROUSEL_NEXT_ID.into(),
            slide_class: consts::CAROUSEL_SLIDE_CLASS.into(),
            dot_class: consts::CAROUSEL_DOT_CLASS.into(),
            active_class: consts::CAROUSEL_ACTIVE_CLASS.into(),
            index_attribute: consts::CAROUSEL_INDEX_ATTRIBUTE.into(),
        }
    }
}

impl CarouselConfig {
    /// CSS selector matching slide elements inside the track.
    #[must_use]
    pub fn slide_selector(&self) -> String {
        format!(".{}", self.slide_class)
    }
}
