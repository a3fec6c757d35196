//! Theme change notifications.
//!
//! Every transition is announced twice: as a DOM event on the document (for
//! page scripts and third-party widgets) and to in-process listeners
//! registered from Rust. Both are synchronous and fire-and-forget.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::logging::warn;

use crate::host::ThemeEventSink;
use crate::theme::{Theme, ThemeChange};

/// Handle returned by [`ThemeEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&ThemeChange)>;

pub struct ThemeEventBus<E> {
    sink: E,
    event_name: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl<E: ThemeEventSink> ThemeEventBus<E> {
    pub fn new(sink: E, event_name: impl Into<String>) -> Self {
        Self { sink, event_name: event_name.into(), listeners: Vec::new(), next_id: 0 }
    }

    /// Register a listener; listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl Fn(&ThemeChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit(&self, theme: Theme, previous_theme: Theme) -> ThemeChange {
        let change = ThemeChange::new(theme, previous_theme);
        if let Err(e) = self.sink.dispatch_theme_change(&self.event_name, &change) {
            warn!("theme change dispatch failed: event={} error={e}", self.event_name);
        }
        for (_, listener) in &self.listeners {
            listener(&change);
        }
        change
    }
}
