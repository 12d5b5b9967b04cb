//! Modal dialog: open/close with scroll lock.
//!
//! DESIGN
//! ======
//! One dialog per page. Open adds the visibility class and locks body scroll
//! with an inline `overflow: hidden`; close removes both, so the stylesheet
//! decides scrolling again. Every trigger funnels through [`ModalDialog::handle`].

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::config::ModalConfig;
use crate::consts::{ESCAPE_KEY, SCROLL_LOCK_PROPERTY, SCROLL_LOCK_VALUE};
use crate::effect::{Effect, Target};

/// A user interaction the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent<'a> {
    /// The open control was clicked.
    OpenClicked,
    /// The close icon or the footer close control was clicked.
    CloseClicked,
    /// A click landed on the dialog element. `on_backdrop` is true only when
    /// the click target is the dialog element itself, not its content.
    DialogClicked { on_backdrop: bool },
    /// A key was pressed anywhere on the page (`KeyboardEvent.key`).
    KeyDown(&'a str),
}

/// Modal dialog state.
#[derive(Debug, Clone)]
pub struct ModalDialog {
    open: bool,
    config: ModalConfig,
}

impl ModalDialog {
    /// Create the dialog. `open` reflects whether the markup already carries
    /// the visibility class (normally it does not).
    #[must_use]
    pub fn new(open: bool, config: ModalConfig) -> Self {
        Self { open, config }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the dialog and lock page scroll.
    pub fn open(&mut self) -> Vec<Effect> {
        self.open = true;
        vec![
            Effect::SetClass { target: Target::Modal, class: self.config.open_class.clone(), on: true },
            Effect::SetStyle {
                target: Target::Body,
                property: SCROLL_LOCK_PROPERTY,
                value: Some(SCROLL_LOCK_VALUE.to_owned()),
            },
        ]
    }

    /// Hide the dialog and drop the inline scroll override.
    pub fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        vec![
            Effect::SetClass { target: Target::Modal, class: self.config.open_class.clone(), on: false },
            Effect::SetStyle { target: Target::Body, property: SCROLL_LOCK_PROPERTY, value: None },
        ]
    }

    /// Teardown: close the dialog if it is open, so no scroll lock outlives
    /// the widget. A closed dialog yields no effects.
    pub fn release(&mut self) -> Vec<Effect> {
        if self.open { self.close() } else { Vec::new() }
    }

    /// Route one interaction. Returns no effects when it does not apply.
    pub fn handle(&mut self, event: ModalEvent<'_>) -> Vec<Effect> {
        match event {
            ModalEvent::OpenClicked => self.open(),
            ModalEvent::CloseClicked | ModalEvent::DialogClicked { on_backdrop: true } => self.close(),
            ModalEvent::KeyDown(key) if key == ESCAPE_KEY && self.open => self.close(),
            ModalEvent::DialogClicked { on_backdrop: false } | ModalEvent::KeyDown(_) => Vec::new(),
        }
    }
}
