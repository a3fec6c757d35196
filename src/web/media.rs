//! `window.matchMedia` as [`MediaPreference`].

use leptos::logging::warn;
use web_sys::{MediaQueryList, Window};

use crate::host::MediaPreference;

#[derive(Clone)]
pub struct MatchMedia {
    window: Window,
}

impl MatchMedia {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// The live query list, for subscribing to `change` events.
    pub fn query_list(&self, query: &str) -> Option<MediaQueryList> {
        match self.window.match_media(query) {
            Ok(list) => list,
            Err(e) => {
                warn!("matchMedia failed: query={query} error={e:?}");
                None
            }
        }
    }
}

impl MediaPreference for MatchMedia {
    fn matches(&self, query: &str) -> Option<bool> {
        self.query_list(query).map(|list| list.matches())
    }
}
