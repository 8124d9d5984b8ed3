//! Visual configuration for the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Tunable parameters for the particle field.
///
/// The defaults reproduce the hero background: sixty softly glowing dots in
/// warm pastels, joined by faint lines when they come close, shying away from
/// the pointer.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles created on every (re)build.
	pub count: usize,
	/// Pointer influence radius in pixels.
	pub pointer_radius: f64,
	/// Pairwise distance below which a connecting line is drawn.
	pub connect_distance: f64,
	/// Connection line opacity at distance zero; falls off linearly to zero
	/// at [`FieldStyle::connect_distance`].
	pub connect_opacity: f64,
	/// Connection line color.
	pub line_color: Color,
	/// How far past the surface edge a drift origin may travel before it
	/// wraps to the opposite side.
	pub wrap_margin: f64,
	/// Colors sampled per particle at creation.
	pub palette: Vec<Color>,
	/// Base radius range (min, max) in pixels.
	pub size_range: (f64, f64),
	/// Base opacity range (min, max).
	pub opacity_range: (f64, f64),
	/// Per-axis drift speed magnitude bound (pixels per frame).
	pub drift_speed: f64,
	/// Oscillation radius range (min, max) in pixels.
	pub float_radius: (f64, f64),
	/// Oscillation angular speed magnitude bound (radians per frame).
	pub angle_speed: f64,
	/// Opacity ceiling while glowing under the pointer.
	pub max_glow_opacity: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			count: 60,
			pointer_radius: 150.0,
			connect_distance: 120.0,
			connect_opacity: 0.15,
			line_color: Color::rgb(255, 255, 255),
			wrap_margin: 50.0,
			palette: vec![
				Color::rgb(232, 160, 160), // Pink
				Color::rgb(212, 208, 140), // Yellow
				Color::rgb(255, 255, 255), // White
				Color::rgb(200, 230, 230), // Light cyan
			],
			size_range: (1.0, 4.0),
			opacity_range: (0.2, 0.7),
			drift_speed: 0.25,
			float_radius: (10.0, 40.0),
			angle_speed: 0.01,
			max_glow_opacity: 0.8,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_style_matches_site_constants() {
		let style = FieldStyle::default();
		assert_eq!(style.count, 60);
		assert_eq!(style.pointer_radius, 150.0);
		assert_eq!(style.connect_distance, 120.0);
		assert_eq!(style.connect_opacity, 0.15);
		assert_eq!(style.wrap_margin, 50.0);
		assert_eq!(style.palette.len(), 4);
	}

	#[test]
	fn opaque_color_formats_as_hex() {
		assert_eq!(Color::rgb(232, 160, 160).to_css(), "#e8a0a0");
	}

	#[test]
	fn translucent_color_formats_as_rgba() {
		let css = Color::rgb(255, 255, 255).with_alpha(0.15).to_css();
		assert_eq!(css, "rgba(255, 255, 255, 0.15)");
	}
}
