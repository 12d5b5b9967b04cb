//! Effects: the DOM mutations widget cores ask their host to perform.
//!
//! Cores never touch the page. Each handler returns the effects for one
//! event, in the order they must be applied, and a [`crate::host::Host`]
//! carries them out.

/// An element an effect is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// The document body.
    Body,
    /// The theme toggle button.
    ThemeButton,
    /// The modal dialog element (its backdrop).
    Modal,
    /// The carousel slide track.
    Track,
    /// The element holding the carousel dots.
    DotContainer,
    /// The generated carousel dot for the given slide index.
    Dot(usize),
}

/// One DOM mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Add (`on == true`) or remove a class.
    SetClass { target: Target, class: String, on: bool },
    /// Replace the text content.
    SetText { target: Target, text: String },
    /// Set an inline style property, or clear it with `None`.
    SetStyle { target: Target, property: &'static str, value: Option<String> },
    /// Create a dot control for `index`, tag it and append it to the dot container.
    CreateDot { index: usize, class: String, attribute: String },
    /// Remove `class` from every `dot_class` element in the dot container,
    /// including dots that were already in the markup.
    ClearDots { dot_class: String, class: String },
    /// Write a key/value pair to local storage.
    Persist { key: String, value: &'static str },
}

impl Effect {
    /// The element this effect mutates, if it mutates one.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::SetClass { target, .. } | Self::SetText { target, .. } | Self::SetStyle { target, .. } => {
                Some(*target)
            }
            Self::CreateDot { index, .. } => Some(Target::Dot(*index)),
            Self::ClearDots { .. } => Some(Target::DotContainer),
            Self::Persist { .. } => None,
        }
    }
}
