//! Hosts apply widget effects to a page.
//!
//! [`Host`] is the seam between the browser-independent widget cores and the
//! page. The browser implementation lives in `dom` (feature `hydrate`);
//! [`MemoryHost`] keeps an in-memory model of the anchors so widgets can be
//! driven and inspected natively.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::effect::{Effect, Target};
use crate::error::WidgetError;

/// Something that can carry out [`Effect`]s.
pub trait Host {
    /// Apply a single effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the target element is unknown or the underlying
    /// page operation fails.
    fn apply(&mut self, effect: &Effect) -> Result<(), WidgetError>;

    /// Apply effects in order. A failing effect does not stop later ones;
    /// every failure is returned alongside the effect that caused it.
    fn apply_all<'a>(&mut self, effects: &'a [Effect]) -> Vec<(&'a Effect, WidgetError)> {
        effects
            .iter()
            .filter_map(|effect| self.apply(effect).err().map(|err| (effect, err)))
            .collect()
    }
}

/// In-memory state of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

/// A page held in memory: the static anchors, generated dots and storage.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    elements: BTreeMap<Target, MemoryElement>,
    /// Dots written into the container by the markup itself.
    markup_dots: Vec<MemoryElement>,
    storage: BTreeMap<String, String>,
    storage_available: bool,
}

impl Default for MemoryHost {
    fn default() -> Self {
        let elements = [Target::Body, Target::ThemeButton, Target::Modal, Target::Track, Target::DotContainer]
            .into_iter()
            .map(|target| (target, MemoryElement::default()))
            .collect();
        Self { elements, markup_dots: Vec::new(), storage: BTreeMap::new(), storage_available: true }
    }
}

impl MemoryHost {
    /// A page with every static anchor present and empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `class` already applied to `target`.
    #[must_use]
    pub fn with_class(mut self, target: Target, class: &str) -> Self {
        self.elements.entry(target).or_default().classes.insert(class.to_owned());
        self
    }

    /// Put a dot with the given space-separated classes into the container, as
    /// if the markup already held it.
    #[must_use]
    pub fn with_markup_dot(mut self, classes: &str) -> Self {
        let classes = classes.split_whitespace().map(str::to_owned).collect();
        self.markup_dots.push(MemoryElement { classes, ..MemoryElement::default() });
        self
    }

    /// Make every storage write fail, as when storage is disabled.
    #[must_use]
    pub fn without_storage(mut self) -> Self {
        self.storage_available = false;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn element(&self, target: Target) -> Option<&MemoryElement> {
        self.elements.get(&target)
    }

    #[must_use]
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.element(target).is_some_and(|el| el.classes.contains(class))
    }

    #[must_use]
    pub fn text(&self, target: Target) -> Option<&str> {
        self.element(target).map(|el| el.text.as_str())
    }

    #[must_use]
    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.element(target).and_then(|el| el.style.get(property)).map(String::as_str)
    }

    #[must_use]
    pub fn attribute(&self, target: Target, name: &str) -> Option<&str> {
        self.element(target).and_then(|el| el.attributes.get(name)).map(String::as_str)
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }

    /// Number of generated dots.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.elements.keys().filter(|target| matches!(target, Target::Dot(_))).count()
    }

    /// Indices of the dots carrying `class`, ascending.
    #[must_use]
    pub fn dots_with_class(&self, class: &str) -> Vec<usize> {
        self.elements
            .iter()
            .filter_map(|(target, el)| match target {
                Target::Dot(index) if el.classes.contains(class) => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Number of markup dots carrying `class`.
    #[must_use]
    pub fn markup_dots_with_class(&self, class: &str) -> usize {
        self.markup_dots.iter().filter(|dot| dot.classes.contains(class)).count()
    }

    fn element_mut(&mut self, target: Target) -> Result<&mut MemoryElement, WidgetError> {
        self.elements.get_mut(&target).ok_or(WidgetError::MissingTarget(target))
    }
}

impl Host for MemoryHost {
    fn apply(&mut self, effect: &Effect) -> Result<(), WidgetError> {
        match effect {
            Effect::SetClass { target, class, on } => {
                let el = self.element_mut(*target)?;
                if *on {
                    el.classes.insert(class.clone());
                } else {
                    el.classes.remove(class);
                }
            }
            Effect::SetText { target, text } => {
                self.element_mut(*target)?.text.clone_from(text);
            }
            Effect::SetStyle { target, property, value } => {
                let el = self.element_mut(*target)?;
                match value {
                    Some(value) => {
                        el.style.insert((*property).to_owned(), value.clone());
                    }
                    None => {
                        el.style.remove(*property);
                    }
                }
            }
            Effect::CreateDot { index, class, attribute } => {
                let mut dot = MemoryElement::default();
                dot.classes.insert(class.clone());
                dot.attributes.insert(attribute.clone(), index.to_string());
                self.elements.insert(Target::Dot(*index), dot);
            }
            Effect::ClearDots { dot_class, class } => {
                self.element_mut(Target::DotContainer)?;
                let generated = self
                    .elements
                    .iter_mut()
                    .filter_map(|(target, el)| matches!(target, Target::Dot(_)).then_some(el));
                for dot in generated.chain(self.markup_dots.iter_mut()) {
                    if dot.classes.contains(dot_class) {
                        dot.classes.remove(class);
                    }
                }
            }
            Effect::Persist { key, value } => {
                if !self.storage_available {
                    return Err(WidgetError::Storage("local storage is disabled".into()));
                }
                self.storage.insert(key.clone(), (*value).to_owned());
            }
        }
        Ok(())
    }
}
