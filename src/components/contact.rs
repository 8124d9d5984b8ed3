//! Contact form with async submission.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, HtmlFormElement, Request, RequestInit, Response, SubmitEvent};

/// Submission lifecycle for the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormState {
	Idle,
	Sending,
	Sent,
	Failed,
}

async fn submit(action: String, form_data: FormData) -> Result<(), String> {
	let window = web_sys::window().ok_or("no window")?;

	let headers = Headers::new().map_err(|_| "failed to build headers")?;
	headers
		.append("Accept", "application/json")
		.map_err(|_| "failed to set Accept header")?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_body(&form_data);
	init.set_headers(&headers);

	let request =
		Request::new_with_str_and_init(&action, &init).map_err(|_| "failed to build request")?;
	let response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|_| "network error")?;
	let response: Response = response.dyn_into().map_err(|_| "unexpected fetch result")?;

	if response.ok() {
		Ok(())
	} else {
		Err(format!("server responded with status {}", response.status()))
	}
}

/// Contact form that posts its fields to `action` and swaps itself for a
/// success message. Failures restore the form so the visitor can retry.
#[component]
pub fn ContactForm(#[prop(into)] action: String) -> impl IntoView {
	let (state, set_state) = signal(FormState::Idle);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if state.get_untracked() == FormState::Sending {
			return;
		}
		let Some(form) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
		else {
			return;
		};
		let Ok(form_data) = FormData::new_with_form(&form) else {
			warn!("contact: failed to read form data");
			return;
		};

		let action = form.action();
		set_state.set(FormState::Sending);
		spawn_local(async move {
			match submit(action, form_data).await {
				Ok(()) => {
					form.reset();
					set_state.set(FormState::Sent);
				}
				Err(e) => {
					warn!("contact: submission failed: {}", e);
					set_state.set(FormState::Failed);
				}
			}
		});
	};

	view! {
		<section class="contact" id="contact">
			<Show when=move || state.get() == FormState::Sent>
				<p class="form-success">"Thanks! Your message is on its way."</p>
			</Show>
			<form
				class="contact-form"
				action=action
				method="post"
				on:submit=on_submit
				class:hidden=move || state.get() == FormState::Sent
			>
				<input type="text" name="name" placeholder="Your name" required />
				<input type="email" name="email" placeholder="Your email" required />
				<textarea name="message" placeholder="Your message" required></textarea>
				<button type="submit" disabled=move || state.get() == FormState::Sending>
					{move || {
						if state.get() == FormState::Sending { "Sending..." } else { "Send message" }
					}}
				</button>
				<Show when=move || state.get() == FormState::Failed>
					<p class="form-error">"Something went wrong sending your message. Please try again."</p>
				</Show>
			</form>
		</section>
	}
}
