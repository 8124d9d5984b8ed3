//! Site content structures deserialized from the embedded data block.

use serde::Deserialize;

/// A quote shown in the testimonial carousel.
#[derive(Clone, Debug, Deserialize)]
pub struct Testimonial {
	pub quote: String,
	pub author: String,
}

/// A card in the filterable book grid.
#[derive(Clone, Debug, Deserialize)]
pub struct BookCard {
	pub title: String,
	/// Category matched against the filter buttons (e.g., "fiction").
	pub category: String,
	/// Optional cover image URL.
	pub cover: Option<String>,
}

/// A headline figure animated by the counter component.
#[derive(Clone, Debug, Deserialize)]
pub struct Stat {
	pub label: String,
	pub count: u32,
}

/// Complete site content: everything the interactive components render.
/// Sections may be omitted from the embedded JSON; they default to empty.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SiteData {
	#[serde(default)]
	pub testimonials: Vec<Testimonial>,
	#[serde(default)]
	pub books: Vec<BookCard>,
	#[serde(default)]
	pub stats: Vec<Stat>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn site_data_parses_the_embedded_format() {
		let json = r#"{
			"testimonials": [{ "quote": "Wonderful.", "author": "A. Reader" }],
			"books": [{ "title": "Night Tide", "category": "fiction", "cover": null }],
			"stats": [{ "label": "Books published", "count": 24 }]
		}"#;

		let data: SiteData = serde_json::from_str(json).unwrap();
		assert_eq!(data.testimonials.len(), 1);
		assert_eq!(data.books[0].category, "fiction");
		assert_eq!(data.stats[0].count, 24);
	}

	#[test]
	fn missing_sections_default_to_empty() {
		let data: SiteData = serde_json::from_str("{}").unwrap();
		assert!(data.testimonials.is_empty());
		assert!(data.books.is_empty());
		assert!(data.stats.is_empty());
	}
}
