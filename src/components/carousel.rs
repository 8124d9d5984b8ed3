//! Testimonial carousel with autoplay, dot indicators, and keyboard arrows.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::types::Testimonial;

/// Autoplay period in milliseconds.
const AUTOPLAY_MS: i32 = 5000;

/// Sliding testimonial carousel.
///
/// Advances automatically every five seconds, pausing while hovered. Slides
/// can also be driven by the prev/next buttons, the dots, or the arrow keys.
#[component]
pub fn Carousel(testimonials: Vec<Testimonial>) -> impl IntoView {
	let total = testimonials.len();
	let (current, set_current) = signal(0_usize);

	let next = move || {
		if total > 0 {
			set_current.update(|i| *i = (*i + 1) % total);
		}
	};
	let prev = move || {
		if total > 0 {
			set_current.update(|i| *i = (*i + total - 1) % total);
		}
	};

	let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let tick_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let start_autoplay = {
		let interval_id = interval_id.clone();
		let tick_cb = tick_cb.clone();
		move || {
			if interval_id.get().is_some() {
				return;
			}
			let Some(window) = web_sys::window() else {
				return;
			};
			if tick_cb.borrow().is_none() {
				*tick_cb.borrow_mut() = Some(Closure::new(move || next()));
			}
			if let Some(ref cb) = *tick_cb.borrow() {
				if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					AUTOPLAY_MS,
				) {
					interval_id.set(Some(id));
				}
			}
		}
	};
	let stop_autoplay = {
		let interval_id = interval_id.clone();
		move || {
			if let Some(id) = interval_id.take() {
				if let Some(window) = web_sys::window() {
					window.clear_interval_with_handle(id);
				}
			}
		}
	};

	let key_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
		Rc::new(RefCell::new(None));
	let key_cb_init = key_cb.clone();
	let start_on_mount = start_autoplay.clone();

	Effect::new(move |_| {
		start_on_mount();

		let Some(window) = web_sys::window() else {
			return;
		};
		if key_cb_init.borrow().is_some() {
			return;
		}
		*key_cb_init.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			match ev.key().as_str() {
				"ArrowLeft" => prev(),
				"ArrowRight" => next(),
				_ => {}
			}
		}));
		if let Some(ref cb) = *key_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}
	});

	let (key_cb_cleanup, stop_on_unmount) = (key_cb.clone(), stop_autoplay.clone());
	// `on_cleanup` demands `Send + Sync`; the `Rc` handles never leave the
	// browser's single thread, so a `SendWrapper` satisfies the bound safely.
	let cleanup = SendWrapper::new(move || {
		stop_on_unmount();
		if let Some(window) = web_sys::window() {
			if let Some(ref cb) = *key_cb_cleanup.borrow() {
				let _ =
					window.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
			}
		}
	});
	on_cleanup(move || cleanup.take()());

	let slides = testimonials
		.into_iter()
		.map(|t| {
			view! {
				<figure class="testimonial">
					<blockquote>{t.quote}</blockquote>
					<figcaption>{t.author}</figcaption>
				</figure>
			}
		})
		.collect_view();

	let dots = (0..total)
		.map(|i| {
			view! {
				<button
					class="dot"
					class:active=move || current.get() == i
					on:click=move |_| set_current.set(i)
					aria-label=format!("Go to slide {}", i + 1)
				></button>
			}
		})
		.collect_view();

	view! {
		<section
			class="testimonials"
			id="testimonials"
			on:mouseenter=move |_| stop_autoplay()
			on:mouseleave=move |_| start_autoplay()
		>
			<div class="track" style:transform=move || format!("translateX(-{}%)", current.get() * 100)>
				{slides}
			</div>
			<button class="carousel-btn prev" on:click=move |_| prev()>"‹"</button>
			<button class="carousel-btn next" on:click=move |_| next()>"›"</button>
			<div class="dots">{dots}</div>
		</section>
	}
}
