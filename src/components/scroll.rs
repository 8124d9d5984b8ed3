//! Scroll-driven chrome: the navbar with scroll-spy links, the mobile menu
//! toggle, and the reading progress bar.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

/// Scroll offset in pixels past which the navbar takes its `scrolled` style.
const NAVBAR_THRESHOLD: f64 = 50.0;
/// Added to the scroll position when picking the active section, so a section
/// lights up while its heading is still under the navbar.
const SCROLL_SPY_OFFSET: f64 = 100.0;

/// A navigation target: the section element id and the link label.
#[derive(Clone, Copy, Debug)]
pub struct NavSection {
	pub id: &'static str,
	pub label: &'static str,
}

fn scroll_metrics() -> (f64, f64) {
	let Some(window) = web_sys::window() else {
		return (0.0, 0.0);
	};
	let scroll_top = window.scroll_y().unwrap_or(0.0);
	let doc_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|e| e.scroll_height() as f64)
		.unwrap_or(0.0);
	let viewport = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0);
	(scroll_top, (doc_height - viewport).max(0.0))
}

/// Pick the section whose vertical span contains `scroll_pos`. Spans are
/// half-open, and later entries win when spans overlap, matching document
/// order.
fn pick_active(scroll_pos: f64, measured: &[(&'static str, f64, f64)]) -> Option<&'static str> {
	let mut active = None;
	for &(id, top, height) in measured {
		if scroll_pos >= top && scroll_pos < top + height {
			active = Some(id);
		}
	}
	active
}

fn active_section(sections: &[NavSection]) -> Option<&'static str> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let scroll_pos = window.scroll_y().unwrap_or(0.0) + SCROLL_SPY_OFFSET;

	let measured: Vec<(&'static str, f64, f64)> = sections
		.iter()
		.filter_map(|section| {
			let el = document.get_element_by_id(section.id)?;
			let el: web_sys::HtmlElement = el.dyn_into().ok()?;
			Some((section.id, el.offset_top() as f64, el.offset_height() as f64))
		})
		.collect();

	pick_active(scroll_pos, &measured)
}

fn set_body_scroll_locked(locked: bool) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let overflow = if locked { "hidden" } else { "" };
	let _ = body.style().set_property("overflow", overflow);
}

fn smooth_scroll_to(id: &str) {
	let Some(el) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
	else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Site navbar: progress bar, scroll-spy nav links, and the mobile menu
/// toggle. `children` hold the brand and the theme toggle.
///
/// Nav links smooth-scroll to their section and the link whose section is
/// under the navbar carries the `active` class. The mobile toggle locks body
/// scrolling while the menu is open; Escape closes it.
#[component]
pub fn Navbar(sections: Vec<NavSection>, children: Children) -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);
	let (progress, set_progress) = signal(0.0_f64);
	let (active, set_active) = signal("");
	let (menu_open, set_menu_open) = signal(false);

	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let key_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (scroll_cb_init, key_cb_init) = (scroll_cb.clone(), key_cb.clone());
	let spy_sections = sections.clone();

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		if scroll_cb_init.borrow().is_some() {
			return;
		}

		let spy = spy_sections.clone();
		*scroll_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (top, scrollable) = scroll_metrics();
			set_scrolled.set(top > NAVBAR_THRESHOLD);
			let fraction = if scrollable > 0.0 { top / scrollable } else { 0.0 };
			set_progress.set(fraction * 100.0);
			if let Some(id) = active_section(&spy) {
				set_active.set(id);
			}
		}));
		if let Some(ref cb) = *scroll_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}

		// Escape closes the mobile menu and releases the scroll lock.
		*key_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if ev.key() == "Escape" && menu_open.get_untracked() {
				set_menu_open.set(false);
				set_body_scroll_locked(false);
			}
		}));
		if let Some(ref cb) = *key_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
	});

	let (scroll_cb_cleanup, key_cb_cleanup) = (scroll_cb.clone(), key_cb.clone());
	// `on_cleanup` demands `Send + Sync`; the `Rc` handles never leave the
	// browser's single thread, so a `SendWrapper` satisfies the bound safely.
	let cleanup = SendWrapper::new(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *scroll_cb_cleanup.borrow() {
			let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = *key_cb_cleanup.borrow() {
			let _ =
				window.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
	});
	on_cleanup(move || cleanup.take()());

	let toggle_menu = move |_| {
		let open = !menu_open.get_untracked();
		set_menu_open.set(open);
		set_body_scroll_locked(open);
	};

	let links = sections
		.into_iter()
		.map(|section| {
			let NavSection { id, label } = section;
			view! {
				<a
					class="nav-link"
					class:active=move || active.get() == id
					href=format!("#{}", id)
					on:click=move |ev: MouseEvent| {
						ev.prevent_default();
						smooth_scroll_to(id);
						set_menu_open.set(false);
						set_body_scroll_locked(false);
					}
				>
					{label}
				</a>
			}
		})
		.collect_view();

	view! {
		<header class="navbar" class:scrolled=move || scrolled.get()>
			<div class="progress-bar" style:width=move || format!("{}%", progress.get())></div>
			{children()}
			<nav class="nav-menu" class:active=move || menu_open.get()>
				{links}
			</nav>
			<button
				class="nav-toggle"
				class:active=move || menu_open.get()
				on:click=toggle_menu
				aria-label="Toggle navigation"
			>
				"☰"
			</button>
		</header>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SECTIONS: &[(&str, f64, f64)] = &[
		("books", 600.0, 800.0),
		("testimonials", 1400.0, 500.0),
		("contact", 1900.0, 700.0),
	];

	#[test]
	fn position_inside_a_section_selects_it() {
		assert_eq!(pick_active(700.0, SECTIONS), Some("books"));
		assert_eq!(pick_active(1650.0, SECTIONS), Some("testimonials"));
	}

	#[test]
	fn section_spans_are_half_open() {
		// A shared boundary belongs to the following section.
		assert_eq!(pick_active(1399.9, SECTIONS), Some("books"));
		assert_eq!(pick_active(1400.0, SECTIONS), Some("testimonials"));
		assert_eq!(pick_active(1900.0, SECTIONS), Some("contact"));
	}

	#[test]
	fn positions_outside_every_section_select_nothing() {
		assert_eq!(pick_active(0.0, SECTIONS), None);
		assert_eq!(pick_active(2600.0, SECTIONS), None);
	}

	#[test]
	fn overlapping_sections_resolve_to_the_later_one() {
		let overlapping = [("hero", 0.0, 1000.0), ("books", 500.0, 1000.0)];
		assert_eq!(pick_active(700.0, &overlapping), Some("books"));
	}
}
