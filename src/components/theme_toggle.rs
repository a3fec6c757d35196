//! Theme switch button for Leptos apps.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button drives the page's installed theme manager (`crate::web`) and
//! mirrors its state, so it stays correct when the theme changes through the
//! keyboard shortcut, another tab, or the system preference. It does not carry
//! the toggle marker attribute; its own click handler is the only one that
//! toggles.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::consts::{SR_ONLY_CLASS, TOGGLE_DARK_CLASS};
use crate::host::ToggleControlState;
use crate::theme::Theme;

const BASE_CLASS: &str = "theme-toggle";

/// Glyph for the theme a click switches to.
fn icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

fn button_class(extra: &str, theme: Theme) -> String {
    let mut class = BASE_CLASS.to_owned();
    if theme.is_dark() {
        class.push(' ');
        class.push_str(TOGGLE_DARK_CLASS);
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Subscribe to the page's theme manager. A component that mounts before the
/// manager exists installs it from the page configuration, then subscribes.
#[cfg(any(feature = "hydrate", test))]
fn subscribe_or_install<T>(
    mut subscribe: impl FnMut() -> Result<T, crate::error::ThemeError>,
    install: impl FnOnce() -> Result<Theme, crate::error::ThemeError>,
) -> Result<T, crate::error::ThemeError> {
    match subscribe() {
        Err(crate::error::ThemeError::NotInstalled) => {
            install()?;
            subscribe()
        }
        other => other,
    }
}

/// Accessible light/dark switch.
///
/// Renders as light on the server; the hydrated button picks up the page's
/// theme once mounted. If no manager is installed yet, mounting installs one
/// with the configuration from `<script id="theme-config">`.
#[component]
pub fn ThemeToggle(#[prop(optional, into)] class: String) -> impl IntoView {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || match crate::web::current() {
            Ok(current) => theme.set(current),
            Err(e) => warn!("theme toggle has no manager to follow: {e}"),
        });

        let subscribed = subscribe_or_install(
            || crate::web::subscribe(move |change| theme.set(change.theme)),
            crate::web::install_from_page,
        );
        match subscribed {
            Ok(id) => on_cleanup(move || {
                crate::web::unsubscribe(id);
            }),
            Err(e) => warn!("theme toggle will not follow theme changes: {e}"),
        }
    }

    let on_click = move |_| match crate::web::toggle() {
        Ok(change) => theme.set(change.theme),
        Err(e) => warn!("theme toggle failed: {e}"),
    };

    view! {
        <button
            type="button"
            class=move || button_class(&class, theme.get())
            aria-pressed=move || if theme.get().is_dark() { "true" } else { "false" }
            aria-label=move || ToggleControlState::for_theme(theme.get()).label
            title="Toggle theme"
            on:click=on_click
        >
            <span aria-hidden="true">{move || icon(theme.get())}</span>
            <span class=SR_ONLY_CLASS>
                {move || ToggleControlState::for_theme(theme.get()).status_text}
            </span>
        </button>
    }
}
