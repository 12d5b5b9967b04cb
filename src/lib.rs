//! Page widgets for a static site, compiled to WebAssembly.
//!
//! Three independent widgets share one startup trigger (page ready): a
//! persisted light/dark theme toggle, a modal dialog and a cyclic carousel.
//! Each widget activates only when its anchors exist in the page.
//!
//! Widget logic never touches the DOM. Cores own their state and return
//! [`effect::Effect`]s; a [`host::Host`] applies them. The browser host and
//! the event wiring live behind the `hydrate` feature, so everything else
//! builds and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme toggle core |
//! | [`modal`] | Modal dialog core |
//! | [`carousel`] | Carousel core with wraparound navigation |
//! | [`effect`] | Effects and targets returned by the cores |
//! | [`host`] | `Host` trait and the in-memory `MemoryHost` |
//! | [`config`] | Anchor ids, classes, labels (JSON-loadable) |
//! | [`consts`] | Default values for the config |
//! | [`error`] | `WidgetError` |
//! | `dom` | Browser host, listener guards (feature `hydrate`) |
//! | `mount` | Page-ready trigger, widget wiring, wasm exports (feature `hydrate`) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod effect;
pub mod error;
pub mod host;
pub mod modal;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod mount;

pub use config::WidgetConfig;
pub use error::WidgetError;
