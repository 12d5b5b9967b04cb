//! Startup: wait for page ready, then bind each widget to its anchors.
//!
//! DESIGN
//! ======
//! Widgets are mounted independently: a missing anchor or a failing mount
//! leaves that one widget inert and the others running. Each widget's state
//! lives in one `Rc<RefCell<Bound<_>>>` shared by its listeners, and every
//! listener is owned by the [`MountedPage`] kept in a thread-local until
//! [`unmount`] drops it. Dropping the page first releases an open modal so
//! the body is not left scroll-locked.
//!
//! Handlers run synchronously in the browser's dispatch order. A re-entrant
//! event for a widget that is mid-update is dropped with a warning.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, DocumentReadyState, Element, HtmlElement, KeyboardEvent, Window};

use crate::carousel::Carousel;
use crate::config::{CarouselConfig, ModalConfig, ThemeConfig, WidgetConfig};
use crate::dom::{DomHost, Listener, event_targets, js_error};
use crate::effect::{Effect, Target};
use crate::error::WidgetError;
use crate::host::Host;
use crate::modal::{ModalDialog, ModalEvent};
use crate::theme::ThemeToggle;

const PAGE_READY_EVENT: &str = "DOMContentLoaded";

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

// =============================================================================
// JS EXPORTS
// =============================================================================

/// Mount every widget with the stock anchors.
///
/// # Errors
///
/// Rejects when there is no window or document.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    start_when_ready(WidgetConfig::default()).map_err(to_js)
}

/// Mount every widget with a JSON configuration; omitted fields keep their defaults.
///
/// # Errors
///
/// Rejects when the JSON is malformed, or when there is no window or document.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    init_logging();
    let config = WidgetConfig::from_json(json).map_err(to_js)?;
    start_when_ready(config).map_err(to_js)
}

/// Close an open modal, detach every listener and remove generated dots.
#[wasm_bindgen]
pub fn unmount() {
    match MOUNTED.with(RefCell::take) {
        Some(page) => info!("unmounted page widgets ({} listeners)", page.listeners.len()),
        None => debug!("unmount: nothing mounted"),
    }
}

fn to_js(err: WidgetError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn init_logging() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if let Err(err) = console_log::init_with_level(level) {
            debug!("console logger already installed: {err}");
        }
    });
}

// =============================================================================
// PAGE READY
// =============================================================================

fn start_when_ready(config: WidgetConfig) -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    if document.ready_state() != DocumentReadyState::Loading {
        return install(&config);
    }

    debug!("document still loading, deferring mount to {PAGE_READY_EVENT}");
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(move || {
        if let Err(err) = install(&config) {
            warn!("page widgets failed to mount: {err}");
        }
    });
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            PAGE_READY_EVENT,
            callback.unchecked_ref(),
            &options,
        )
        .map_err(js_error)
}

fn install(config: &WidgetConfig) -> Result<(), WidgetError> {
    if MOUNTED.with(|slot| slot.borrow().is_some()) {
        warn!("page widgets already mounted; call unmount() before starting again");
        return Ok(());
    }
    let page = mount_page(config)?;
    info!("page widgets mounted ({} listeners)", page.listeners.len());
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

// =============================================================================
// MOUNTING
// =============================================================================

/// Listeners of every mounted widget, plus the modal state unmount releases.
struct MountedPage {
    listeners: Vec<Listener>,
    modal: Option<Shared<ModalDialog>>,
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        if let Some(dialog) = self.modal.take() {
            dispatch(&dialog, ModalDialog::release);
        }
    }
}

/// Shared handles every widget mount starts from.
struct Page {
    window: Window,
    document: Document,
    body: HtmlElement,
}

impl Page {
    fn current() -> Result<Self, WidgetError> {
        let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
        let document = window.document().ok_or(WidgetError::NoDocument)?;
        let body = document.body().ok_or(WidgetError::NoBody)?;
        Ok(Self { window, document, body })
    }

    fn host(&self) -> DomHost {
        DomHost::new(self.window.clone(), self.document.clone(), self.body.clone())
    }

    fn find(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// A widget core together with the host that applies its effects.
struct Bound<W> {
    widget: W,
    host: DomHost,
}

type Shared<W> = Rc<RefCell<Bound<W>>>;

impl<W> Bound<W> {
    fn shared(widget: W, host: DomHost) -> Shared<W> {
        Rc::new(RefCell::new(Self { widget, host }))
    }
}

/// Run one widget step and apply its effects, logging failures.
fn dispatch<W>(bound: &Shared<W>, step: impl FnOnce(&mut W) -> Vec<Effect>) {
    let Ok(mut bound) = bound.try_borrow_mut() else {
        warn!("widget busy, dropping re-entrant event");
        return;
    };
    let Bound { widget, host } = &mut *bound;
    let effects = step(widget);
    for (effect, err) in host.apply_all(&effects) {
        match effect.target() {
            Some(target) => warn!("effect on {target:?} failed: {err}"),
            None => warn!("{err}"),
        }
    }
}

fn attach(
    listeners: &mut Vec<Listener>,
    target: &web_sys::EventTarget,
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), WidgetError> {
    let listener = Listener::attach(target, event, handler)?;
    debug!("attached {} listener", listener.event());
    listeners.push(listener);
    Ok(())
}

fn mount_page(config: &WidgetConfig) -> Result<MountedPage, WidgetError> {
    let page = Page::current()?;
    let mut mounted = MountedPage { listeners: Vec::new(), modal: None };
    match mount_modal(&page, &config.modal) {
        Ok(Some((mut attached, dialog))) => {
            mounted.listeners.append(&mut attached);
            mounted.modal = Some(dialog);
        }
        Ok(None) => {}
        Err(err) => warn!("modal failed to mount: {err}"),
    }
    for (name, result) in [
        ("theme toggle", mount_theme(&page, &config.theme)),
        ("carousel", mount_carousel(&page, &config.carousel)),
    ] {
        match result {
            Ok(mut attached) => mounted.listeners.append(&mut attached),
            Err(err) => warn!("{name} failed to mount: {err}"),
        }
    }
    Ok(mounted)
}

fn mount_theme(page: &Page, config: &ThemeConfig) -> Result<Vec<Listener>, WidgetError> {
    let Some(button) = page.find(&config.button_id) else {
        debug!("theme toggle inert: #{} not found", config.button_id);
        return Ok(Vec::new());
    };
    let is_light = page.body.class_list().contains(&config.light_class);
    let host = page.host().bind(Target::ThemeButton, button.clone());
    let toggle = Bound::shared(ThemeToggle::new(is_light, config.clone()), host);
    dispatch(&toggle, |widget| widget.mount());

    let mut listeners = Vec::new();
    attach(&mut listeners, &button, "click", move |_event| dispatch(&toggle, ThemeToggle::toggle))?;
    Ok(listeners)
}

fn mount_modal(
    page: &Page,
    config: &ModalConfig,
) -> Result<Option<(Vec<Listener>, Shared<ModalDialog>)>, WidgetError> {
    let Some(modal) = page.find(&config.modal_id) else {
        debug!("modal inert: #{} not found", config.modal_id);
        return Ok(None);
    };
    let open = modal.class_list().contains(&config.open_class);
    let host = page.host().bind(Target::Modal, modal.clone());
    let dialog = Bound::shared(ModalDialog::new(open, config.clone()), host);
    let mut listeners = Vec::new();

    let triggers = [
        (&config.open_button_id, ModalEvent::OpenClicked),
        (&config.close_button_id, ModalEvent::CloseClicked),
        (&config.footer_close_id, ModalEvent::CloseClicked),
    ];
    for (id, trigger) in triggers {
        let Some(control) = page.find(id) else {
            debug!("modal trigger #{id} not found");
            continue;
        };
        let dialog = Rc::clone(&dialog);
        attach(&mut listeners, &control, "click", move |_event| {
            dispatch(&dialog, |widget| widget.handle(trigger));
        })?;
    }

    {
        let dialog = Rc::clone(&dialog);
        let backdrop = modal.clone();
        attach(&mut listeners, &modal, "click", move |event| {
            let on_backdrop = event_targets(&event, &backdrop);
            dispatch(&dialog, |widget| widget.handle(ModalEvent::DialogClicked { on_backdrop }));
        })?;
    }

    {
        let dialog = Rc::clone(&dialog);
        attach(&mut listeners, &page.document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = key_event.key();
            dispatch(&dialog, |widget| widget.handle(ModalEvent::KeyDown(&key)));
        })?;
    }

    Ok(Some((listeners, dialog)))
}

fn mount_carousel(page: &Page, config: &CarouselConfig) -> Result<Vec<Listener>, WidgetError> {
    let (Some(track), Some(dots)) = (page.find(&config.track_id), page.find(&config.dots_id)) else {
        debug!("carousel inert: #{} or #{} not found", config.track_id, config.dots_id);
        return Ok(Vec::new());
    };
    let total = track.query_selector_all(&config.slide_selector()).map_err(js_error)?.length() as usize;
    let carousel = Carousel::new(total, config.clone());
    if carousel.is_empty() {
        debug!("carousel inert: no {} elements in #{}", config.slide_selector(), config.track_id);
        return Ok(Vec::new());
    }

    let host = page.host().bind(Target::Track, track).bind(Target::DotContainer, dots.clone());
    let carousel = Bound::shared(carousel, host);
    dispatch(&carousel, |widget| widget.mount());
    let mut listeners = Vec::new();

    {
        let carousel = Rc::clone(&carousel);
        let dot_class = config.dot_class.clone();
        let index_attribute = config.index_attribute.clone();
        attach(&mut listeners, &dots, "click", move |event| {
            let Some(target) = event.target() else {
                return;
            };
            let Some(dot) = target.dyn_ref::<Element>() else {
                return;
            };
            if !dot.class_list().contains(&dot_class) {
                return;
            }
            let raw = dot.get_attribute(&index_attribute).unwrap_or_default();
            match Carousel::parse_dot_index(&raw) {
                Ok(index) => dispatch(&carousel, |widget| widget.go_to_slide(index)),
                Err(err) => debug!("ignoring dot click, bad index {raw:?}: {err}"),
            }
        })?;
    }

    let controls: [(&str, fn(&mut Carousel) -> Vec<Effect>); 2] =
        [(&config.prev_id, Carousel::prev), (&config.next_id, Carousel::next)];
    for (id, step) in controls {
        let Some(control) = page.find(id) else {
            debug!("carousel control #{id} not found");
            continue;
        };
        let carousel = Rc::clone(&carousel);
        attach(&mut listeners, &control, "click", move |_event| dispatch(&carousel, step))?;
    }

    Ok(listeners)
}
