//! Explicit `requestAnimationFrame` run loop.
//!
//! The browser idiom is a closure that reschedules itself forever. This wraps
//! that pattern in a handle with first-class `start`/`stop`, so owners can
//! cancel the pending frame instead of abandoning the loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

struct LoopInner {
	running: Cell<bool>,
	frame_id: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// A cancellable per-frame callback loop.
///
/// The callback returns `true` to stay scheduled; returning `false` ends the
/// loop, equivalent to calling [`FrameLoop::stop`].
#[derive(Clone)]
pub struct FrameLoop {
	inner: Rc<LoopInner>,
}

impl FrameLoop {
	/// Wrap `frame` in a loop handle. The loop is created stopped; call
	/// [`FrameLoop::start`] to begin scheduling.
	pub fn new(mut frame: impl FnMut() -> bool + 'static) -> Self {
		let inner = Rc::new(LoopInner {
			running: Cell::new(false),
			frame_id: Cell::new(None),
			callback: RefCell::new(None),
		});

		// The stored closure keeps `inner` alive for as long as the browser
		// may still invoke it.
		let tick_inner = inner.clone();
		*inner.callback.borrow_mut() = Some(Closure::new(move || {
			tick_inner.frame_id.set(None);
			if !tick_inner.running.get() {
				return;
			}
			if frame() {
				Self::schedule(&tick_inner);
			} else {
				tick_inner.running.set(false);
			}
		}));

		Self { inner }
	}

	fn schedule(inner: &Rc<LoopInner>) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(ref cb) = *inner.callback.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				inner.frame_id.set(Some(id));
			}
		}
	}

	/// Begin scheduling frames. No-op if already running.
	pub fn start(&self) {
		if self.inner.running.get() {
			return;
		}
		self.inner.running.set(true);
		Self::schedule(&self.inner);
	}

	/// Stop the loop and cancel any pending frame.
	pub fn stop(&self) {
		self.inner.running.set(false);
		if let Some(id) = self.inner.frame_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}

	/// Whether the loop currently has frames scheduled.
	pub fn is_running(&self) -> bool {
		self.inner.running.get()
	}
}
