//! inkwell-site: client-side interactivity for the Inkwell marketing site.
//!
//! Compiled to WASM and mounted as a Leptos CSR application. The centerpiece
//! is the particle field hero background; around it sit small components for
//! theme switching, scroll chrome, animated counters, the filterable book
//! grid, the testimonial carousel, and the contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod types;

use components::carousel::Carousel;
use components::contact::ContactForm;
use components::counter::AnimatedCounter;
use components::filter::FilterableGrid;
use components::scroll::{NavSection, Navbar};
use components::theme_toggle::{self, ThemeToggle};

pub use components::particle_field::{FieldStyle, ParticleField, ParticleFieldCanvas};
pub use types::SiteData;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("inkwell-site: logging initialized");
}

/// Load site content from a script element with id="site-data".
/// Expected format: JSON with { testimonials: [...], books: [...], stats: [...] }
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteData>(&json_text) {
		Ok(data) => {
			info!(
				"inkwell-site: loaded {} testimonials, {} books, {} stats",
				data.testimonials.len(),
				data.books.len(),
				data.stats.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("inkwell-site: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Applies the persisted theme, loads site content from the DOM, and lays out
/// the interactive sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	theme_toggle::apply_saved_theme();

	let data = load_site_data().unwrap_or_default();
	let sections = vec![
		NavSection { id: "books", label: "Books" },
		NavSection { id: "testimonials", label: "Testimonials" },
		NavSection { id: "contact", label: "Contact" },
	];

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Inkwell" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Navbar sections=sections>
			<a class="brand" href="#top">"Inkwell"</a>
			<ThemeToggle />
		</Navbar>

		<main id="top">
			<section class="hero">
				<ParticleFieldCanvas />
				<div class="hero-overlay">
					<h1>"Stories worth staying up for"</h1>
					<p class="subtitle">"Books, essays, and letters from the Inkwell press."</p>
				</div>
			</section>

			<section class="stats">
				{data
					.stats
					.into_iter()
					.map(|s| view! { <AnimatedCounter target=s.count label=s.label /> })
					.collect_view()}
			</section>

			<FilterableGrid books=data.books />
			<Carousel testimonials=data.testimonials />
			<ContactForm action="/api/contact" />
		</main>
	}
}
