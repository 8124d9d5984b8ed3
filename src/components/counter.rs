//! Animated statistics counters.
//!
//! Each counter waits until it scrolls into view, then counts from zero to
//! its target with an ease-out curve and snaps to the exact value.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlDivElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit};

use super::frame_loop::FrameLoop;

/// Count-up duration in milliseconds.
const DURATION_MS: f64 = 2000.0;
/// Fraction of the element that must be visible before the count-up starts.
const VISIBILITY_THRESHOLD: f64 = 0.5;

fn ease_out_quart(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(4)
}

/// Displayed value for an elapsed time, plus whether the animation still has
/// frames left. Past the duration the value snaps to the exact target.
fn counter_frame(elapsed: f64, target: u32) -> (u32, bool) {
	let progress = (elapsed / DURATION_MS).min(1.0);
	if progress < 1.0 {
		((ease_out_quart(progress) * target as f64).floor() as u32, true)
	} else {
		(target, false)
	}
}

/// Counts from zero to `target` once the stat scrolls into view.
///
/// The element is watched by an IntersectionObserver; when half of it is
/// visible the frame loop starts and the observer disconnects. Browsers
/// without observer support count immediately.
#[component]
pub fn AnimatedCounter(target: u32, label: String) -> impl IntoView {
	let (value, set_value) = signal(0_u32);
	let stat_ref = NodeRef::<leptos::html::Div>::new();

	let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
	let observer: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
	let observer_cb: Rc<
		RefCell<Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>>,
	> = Rc::new(RefCell::new(None));

	let frames_start = frames.clone();
	let start_count = move || {
		if frames_start.borrow().is_some() {
			return;
		}
		let Some(performance) = web_sys::window().and_then(|w| w.performance()) else {
			set_value.set(target);
			return;
		};
		let start = performance.now();
		let loop_handle = FrameLoop::new(move || {
			let (current, running) = counter_frame(performance.now() - start, target);
			set_value.set(current);
			running
		});
		loop_handle.start();
		*frames_start.borrow_mut() = Some(loop_handle);
	};

	let (observer_init, observer_cb_init) = (observer.clone(), observer_cb.clone());
	Effect::new(move |_| {
		let Some(stat) = stat_ref.get() else {
			return;
		};
		let stat: HtmlDivElement = stat.into();
		if observer_cb_init.borrow().is_some() {
			return;
		}

		let start_on_visible = start_count.clone();
		let observer_for_cb = observer_init.clone();
		*observer_cb_init.borrow_mut() = Some(Closure::new(
			move |entries: js_sys::Array, _: IntersectionObserver| {
				let visible = entries.iter().any(|entry| {
					entry
						.dyn_into::<IntersectionObserverEntry>()
						.map(|e| e.is_intersecting())
						.unwrap_or(false)
				});
				if visible {
					start_on_visible();
					// One-shot: stop watching once the count-up begins.
					if let Some(ref obs) = *observer_for_cb.borrow() {
						obs.disconnect();
					}
				}
			},
		));

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
		let built = observer_cb_init.borrow().as_ref().and_then(|cb| {
			IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).ok()
		});
		match built {
			Some(obs) => {
				obs.observe(&stat);
				*observer_init.borrow_mut() = Some(obs);
			}
			None => start_count(),
		}
	});

	let (frames_cleanup, observer_cleanup) = (frames.clone(), observer.clone());
	// `on_cleanup` demands `Send + Sync`; the `Rc` handles never leave the
	// browser's single thread, so a `SendWrapper` satisfies the bound safely.
	let cleanup = SendWrapper::new(move || {
		if let Some(ref f) = *frames_cleanup.borrow() {
			f.stop();
		}
		if let Some(ref obs) = *observer_cleanup.borrow() {
			obs.disconnect();
		}
	});
	on_cleanup(move || cleanup.take()());

	view! {
		<div class="stat" node_ref=stat_ref>
			<span class="stat-number">{move || value.get()}</span>
			<span class="stat-label">{label}</span>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn easing_starts_at_zero_and_ends_at_one() {
		assert_eq!(ease_out_quart(0.0), 0.0);
		assert_eq!(ease_out_quart(1.0), 1.0);
	}

	#[test]
	fn easing_is_monotonic_and_front_loaded() {
		let mut last = 0.0;
		for i in 1..=100 {
			let t = i as f64 / 100.0;
			let eased = ease_out_quart(t);
			assert!(eased >= last);
			last = eased;
		}
		// Ease-out covers most of the distance early.
		assert!(ease_out_quart(0.5) > 0.9);
	}

	#[test]
	fn frame_values_climb_monotonically_and_never_overshoot() {
		let mut last = 0;
		for elapsed in (0..=2200).step_by(16) {
			let (value, _) = counter_frame(elapsed as f64, 1250);
			assert!(value >= last);
			assert!(value <= 1250);
			last = value;
		}
	}

	#[test]
	fn animation_reports_done_at_the_duration() {
		// The loop must stop requesting frames once the duration elapses,
		// with the value snapped to the exact target.
		let (_, running) = counter_frame(DURATION_MS - 1.0, 40);
		assert!(running);
		assert_eq!(counter_frame(DURATION_MS, 40), (40, false));
		assert_eq!(counter_frame(DURATION_MS + 500.0, 40), (40, false));
	}
}
