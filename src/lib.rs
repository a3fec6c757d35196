//! Light/dark theme state for web pages, compiled to WebAssembly.
//!
//! This crate owns the whole lifecycle of a page's theme: resolving the
//! initial theme from storage or the system preference, persisting explicit
//! choices, reflecting the theme onto the document, keeping other tabs in
//! sync, and notifying theme-aware widgets. The core is host-independent and
//! driven through the traits in [`host`]; the [`web`] module plugs in the
//! browser (`hydrate` feature) and [`host::memory`] provides an in-memory host
//! for tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme`, preference provenance, and change payloads |
//! | [`store`] | Initial resolution and persistence of the preference |
//! | [`applier`] | Document mutation: attributes, colors, meta tag, toggle control |
//! | [`events`] | Change notification to the document and in-process listeners |
//! | [`controller`] | Orchestration, input handling, cross-tab and system sync |
//! | [`input`] | Inbound events, keyboard shortcut, and input outcomes |
//! | [`shared`] | `Rc<RefCell<_>>` controller handle for event callbacks |
//! | [`host`] | Host capability traits and the in-memory host |
//! | [`config`] | Serde-backed runtime configuration |
//! | [`consts`] | Fixed names, colors, and the override selector set |
//! | [`web`] | Browser adapter, event bindings, and JS exports |
//! | [`components`] | Leptos theme switch component |

pub mod applier;
pub mod components;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod events;
pub mod host;
pub mod input;
pub mod shared;
pub mod store;
pub mod theme;
pub mod web;

pub use config::ThemeConfig;
pub use controller::{ThemeController, ThemeSnapshot};
pub use error::ThemeError;
pub use input::{InputOutcome, KeyChord, ThemeInput};
pub use shared::SharedController;
pub use theme::{PreferenceSource, Theme, ThemeChange, ThemePreference};
