//! Browser host: applies effects to live elements through `web-sys`.
//!
//! [`DomHost`] resolves each [`Target`] to an element bound at mount time.
//! Dots are created by the host itself and removed again when it drops, so
//! unmounting leaves the dot container as the markup had it.
//!
//! [`Listener`] owns an event callback for as long as it is attached;
//! dropping it detaches the callback.

use std::collections::HashMap;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::effect::{Effect, Target};
use crate::error::WidgetError;
use crate::host::Host;

/// Wrap a thrown JS value as a [`WidgetError::Dom`].
pub fn js_error(err: JsValue) -> WidgetError {
    WidgetError::Dom(format!("{err:?}"))
}

fn storage_error(err: JsValue) -> WidgetError {
    WidgetError::Storage(format!("{err:?}"))
}

/// True when `element` is the event's own target, not one of its descendants.
#[must_use]
pub fn event_targets(event: &Event, element: &Element) -> bool {
    event.target().is_some_and(|target| same_object(target.as_ref(), element.as_ref()))
}

fn same_object(a: &JsValue, b: &JsValue) -> bool {
    a == b
}

// =============================================================================
// HOST
// =============================================================================

/// Applies effects to the elements of one widget.
pub struct DomHost {
    window: Window,
    document: Document,
    anchors: HashMap<Target, Element>,
    created: Vec<Element>,
}

impl DomHost {
    /// A host knowing only the body.
    #[must_use]
    pub fn new(window: Window, document: Document, body: HtmlElement) -> Self {
        let mut anchors = HashMap::new();
        anchors.insert(Target::Body, Element::from(body));
        Self { window, document, anchors, created: Vec::new() }
    }

    /// Bind `target` to `element`.
    #[must_use]
    pub fn bind(mut self, target: Target, element: Element) -> Self {
        self.anchors.insert(target, element);
        self
    }

    fn element(&self, target: Target) -> Result<&Element, WidgetError> {
        self.anchors.get(&target).ok_or(WidgetError::MissingTarget(target))
    }

    fn create_dot(&mut self, index: usize, class: &str, attribute: &str) -> Result<(), WidgetError> {
        let container = self.element(Target::DotContainer)?;
        let dot = self.document.create_element("button").map_err(js_error)?;
        dot.class_list().add_1(class).map_err(js_error)?;
        dot.set_attribute(attribute, &index.to_string()).map_err(js_error)?;
        container.append_child(&dot).map_err(js_error)?;
        self.anchors.insert(Target::Dot(index), dot.clone());
        self.created.push(dot);
        Ok(())
    }

    fn clear_dots(&self, dot_class: &str, class: &str) -> Result<(), WidgetError> {
        let container = self.element(Target::DotContainer)?;
        let dots = container.query_selector_all(&format!(".{dot_class}")).map_err(js_error)?;
        for node in (0..dots.length()).filter_map(|index| dots.item(index)) {
            if let Some(dot) = node.dyn_ref::<Element>() {
                dot.class_list().remove_1(class).map_err(js_error)?;
            }
        }
        Ok(())
    }

    fn persist(&self, key: &str, value: &str) -> Result<(), WidgetError> {
        let storage = self
            .window
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| WidgetError::Storage("local storage unavailable".into()))?;
        storage.set_item(key, value).map_err(storage_error)
    }
}

impl Host for DomHost {
    fn apply(&mut self, effect: &Effect) -> Result<(), WidgetError> {
        match effect {
            Effect::SetClass { target, class, on } => {
                let classes = self.element(*target)?.class_list();
                let result = if *on { classes.add_1(class) } else { classes.remove_1(class) };
                result.map_err(js_error)
            }
            Effect::SetText { target, text } => {
                self.element(*target)?.set_text_content(Some(text));
                Ok(())
            }
            Effect::SetStyle { target, property, value } => {
                let style = self
                    .element(*target)?
                    .dyn_ref::<HtmlElement>()
                    .ok_or_else(|| WidgetError::Dom(format!("{target:?} is not an HTML element")))?
                    .style();
                match value {
                    Some(value) => style.set_property(property, value).map_err(js_error),
                    None => style.remove_property(property).map(|_previous| ()).map_err(js_error),
                }
            }
            Effect::CreateDot { index, class, attribute } => self.create_dot(*index, class, attribute),
            Effect::ClearDots { dot_class, class } => self.clear_dots(dot_class, class),
            Effect::Persist { key, value } => self.persist(key, value),
        }
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        for element in self.created.drain(..) {
            element.remove();
        }
    }
}

// =============================================================================
// LISTENER
// =============================================================================

/// An attached event callback. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Dom`] if the browser rejects the listener.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, WidgetError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()).map_err(js_error)?;
        Ok(Self { target: target.clone(), event, callback })
    }

    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) =
            self.target.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach {} listener: {err:?}", self.event);
        }
    }
}
