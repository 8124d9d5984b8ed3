//! Dark/light theme switching with localStorage persistence.

use leptos::prelude::*;
use log::warn;

const STORAGE_KEY: &str = "theme";
const DEFAULT_THEME: &str = "dark";

fn saved_theme() -> Option<String> {
	web_sys::window()?
		.local_storage()
		.ok()
		.flatten()?
		.get_item(STORAGE_KEY)
		.ok()
		.flatten()
}

fn set_document_theme(theme: &str) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	if root.set_attribute("data-theme", theme).is_err() {
		warn!("theme: failed to set data-theme attribute");
	}
}

fn persist_theme(theme: &str) {
	let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
	if let Some(storage) = storage {
		// Storage can fail (private browsing, quota); the theme still
		// applies for the session.
		if storage.set_item(STORAGE_KEY, theme).is_err() {
			warn!("theme: failed to persist preference");
		}
	}
}

/// Apply the saved theme, or the dark default, to the document root.
/// Called once at startup before components mount.
pub fn apply_saved_theme() {
	let theme = saved_theme().unwrap_or_else(|| DEFAULT_THEME.to_string());
	set_document_theme(&theme);
}

/// Button that flips between dark and light themes and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let (theme, set_theme) = signal(saved_theme().unwrap_or_else(|| DEFAULT_THEME.to_string()));

	let toggle = move |_| {
		let next = if theme.get_untracked() == "dark" {
			"light"
		} else {
			"dark"
		};
		set_document_theme(next);
		persist_theme(next);
		set_theme.set(next.to_string());
	};

	view! {
		<button class="theme-toggle" on:click=toggle aria-label="Toggle theme">
			{move || if theme.get() == "dark" { "☀" } else { "☾" }}
		</button>
	}
}
