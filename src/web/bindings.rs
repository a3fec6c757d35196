//! DOM event listeners that feed [`ThemeInput`] into the installed controller.
//!
//! Every listener is owned by [`Bindings`]; dropping it detaches them all, so
//! uninstalling the manager leaves no callbacks behind on the page.

use leptos::logging::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, MediaQueryListEvent, StorageEvent, Window};

use super::BrowserController;
use super::document::js_error;
use super::media::MatchMedia;
use crate::config::ThemeConfig;
use crate::consts::DARK_SCHEME_QUERY;
use crate::error::ThemeError;
use crate::input::{KeyChord, ThemeInput};

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: impl Into<EventTarget>,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, ThemeError> {
        let target = target.into();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_error(&e)))?;
        Ok(Self { target, event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("theme listener detach failed: event={} error={}", self.event, js_error(&e));
        }
    }
}

pub(super) struct Bindings {
    listeners: Vec<Listener>,
}

impl Bindings {
    pub(super) fn attach(
        window: &Window,
        document: &Document,
        config: &ThemeConfig,
        controller: &BrowserController,
    ) -> Result<Self, ThemeError> {
        let mut listeners = Vec::with_capacity(5);

        if let Some(control) = document.get_element_by_id(&config.toggle_id) {
            let controller = controller.clone();
            listeners.push(Listener::attach(control, "click", move |_event: Event| {
                controller.handle_input(ThemeInput::ToggleControlClick);
            })?);
        }

        {
            let controller = controller.clone();
            let marker = config.marker_selector();
            let toggle_id = config.toggle_id.clone();
            listeners.push(Listener::attach(document.clone(), "click", move |event: Event| {
                let Some(target) = event.target() else {
                    return;
                };
                let Some(element) = target.dyn_ref::<Element>() else {
                    return;
                };
                // The toggle control has its own listener.
                if element.id() == toggle_id {
                    return;
                }
                let matches_marker = element.matches(&marker).unwrap_or(false);
                let outcome = controller.handle_input(ThemeInput::DelegatedClick { matches_marker });
                if outcome.prevent_default {
                    event.prevent_default();
                }
            })?);
        }

        {
            let controller = controller.clone();
            listeners.push(Listener::attach(document.clone(), "keydown", move |event: Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let chord = KeyChord {
                    key: key.key(),
                    shift: key.shift_key(),
                    ctrl: key.ctrl_key(),
                    alt: key.alt_key(),
                    meta: key.meta_key(),
                };
                if controller.handle_input(ThemeInput::KeyDown(chord)).prevent_default {
                    event.prevent_default();
                }
            })?);
        }

        {
            let controller = controller.clone();
            listeners.push(Listener::attach(window.clone(), "storage", move |event: Event| {
                let Some(storage) = event.dyn_ref::<StorageEvent>() else {
                    return;
                };
                controller.handle_input(ThemeInput::StorageChanged {
                    key: storage.key(),
                    new_value: storage.new_value(),
                });
            })?);
        }

        match MatchMedia::new(window.clone()).query_list(DARK_SCHEME_QUERY) {
            Some(list) => {
                let controller = controller.clone();
                listeners.push(Listener::attach(list, "change", move |event: Event| {
                    let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                        return;
                    };
                    controller.handle_input(ThemeInput::SystemPreferenceChanged { prefers_dark: change.matches() });
                })?);
            }
            None => warn!("color scheme changes will not be followed: matchMedia unavailable"),
        }

        Ok(Self { listeners })
    }

    pub(super) fn len(&self) -> usize {
        self.listeners.len()
    }
}
