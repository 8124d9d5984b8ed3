//! Leptos component wrapping the particle field canvas.
//!
//! The component creates the canvas element, sizes it to its parent (the hero
//! section), wires mouse and resize listeners, and drives the field through a
//! cancellable frame loop that is stopped on cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::components::frame_loop::FrameLoop;

use super::field::ParticleField;
use super::render;
use super::style::FieldStyle;

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((0.0, 0.0))
}

/// Renders the animated particle background on a canvas element.
///
/// The canvas sizes itself to its parent container and rebuilds the particle
/// set whenever the window resizes. Pointer movement over the canvas repels
/// and brightens nearby particles; leaving the canvas clears the effect.
#[component]
pub fn ParticleFieldCanvas(#[prop(default = None)] count: Option<usize>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (field_init, resize_cb_init) = (field.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = parent_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut style = FieldStyle::default();
		if let Some(count) = count {
			style.count = count;
		}
		*field_init.borrow_mut() = Some(ParticleField::new(style, w, h));

		// Window resize rebuilds the whole particle set at the new size.
		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = parent_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let field_anim = field_init.clone();
		let frames = FrameLoop::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick();
				render::render(f, &ctx);
			}
			true
		});
		frames.start();

		let (frames_cleanup, resize_cleanup) = (frames.clone(), resize_cb_init.clone());
		// `on_cleanup` demands `Send + Sync`; the `Rc` handles never leave the
		// browser's single thread, so a `SendWrapper` satisfies the bound safely.
		let cleanup = SendWrapper::new(move || {
			frames_cleanup.stop();
			if let Some(window) = web_sys::window() {
				if let Some(ref cb) = *resize_cleanup.borrow() {
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
			}
		});
		on_cleanup(move || cleanup.take()());
	});

	let field_mm = field.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let position = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut f) = *field_mm.borrow_mut() {
			f.set_pointer(Some(position));
		}
	};

	let field_ml = field.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut f) = *field_ml.borrow_mut() {
			f.set_pointer(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		/>
	}
}
