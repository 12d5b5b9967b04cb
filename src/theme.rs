//! Theme toggle: light/dark body class, button label, persisted flag.
//!
//! DESIGN
//! ======
//! The light class is already on the body before this widget runs (an inline
//! bootstrap script applies the stored preference before first paint). The
//! widget only re-derives its flag from that class and re-synchronizes the
//! label on mount. Storage is written on every click and never read here.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
use crate::consts::{THEME_VALUE_DARK, THEME_VALUE_LIGHT};
use crate::effect::{Effect, Target};

/// Theme toggle state: whether the light theme is active.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    is_light: bool,
    config: ThemeConfig,
}

impl ThemeToggle {
    /// Create the toggle from the class state already applied to the body.
    #[must_use]
    pub fn new(is_light: bool, config: ThemeConfig) -> Self {
        Self { is_light, config }
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.is_light
    }

    /// Label shown on the toggle button for the given mode.
    #[must_use]
    pub fn label(&self, is_light: bool) -> &str {
        if is_light { &self.config.label_when_light } else { &self.config.label_when_dark }
    }

    /// Persisted flag value for the current mode.
    #[must_use]
    pub fn stored_value(&self) -> &'static str {
        if self.is_light { THEME_VALUE_LIGHT } else { THEME_VALUE_DARK }
    }

    /// Effects that put the body class and button label in line with `is_light`.
    #[must_use]
    pub fn apply_theme(&self, is_light: bool) -> Vec<Effect> {
        vec![
            Effect::SetClass { target: Target::Body, class: self.config.light_class.clone(), on: is_light },
            Effect::SetText { target: Target::ThemeButton, text: self.label(is_light).to_owned() },
        ]
    }

    /// Initial synchronization of the label with the derived flag.
    #[must_use]
    pub fn mount(&self) -> Vec<Effect> {
        self.apply_theme(self.is_light)
    }

    /// Click handler: flip the mode, re-apply it and persist the new value.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.is_light = !self.is_light;
        let mut effects = self.apply_theme(self.is_light);
        effects.push(Effect::Persist { key: self.config.storage_key.clone(), value: self.stored_value() });
        effects
    }
}
