//! The particle field controller.
//!
//! Owns the particle collection, the shared pointer state, and the surface
//! dimensions. The canvas component feeds it pointer and resize events and
//! calls [`ParticleField::tick`] once per animation frame; everything here is
//! pure Rust and unit tested natively.

use super::particle::{Particle, PointerState};
use super::style::FieldStyle;

/// A line between two nearby particles, produced by the connection pass.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	/// Line alpha: `(1 - distance / threshold) * connect_opacity`.
	pub alpha: f64,
}

/// Controller for the full particle set.
pub struct ParticleField {
	particles: Vec<Particle>,
	pointer: PointerState,
	style: FieldStyle,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Build a field for a surface of the given dimensions.
	///
	/// A zero-area surface yields an empty field rather than an error; the
	/// site silently tolerates a collapsed hero section.
	pub fn new(style: FieldStyle, width: f64, height: f64) -> Self {
		let pointer = PointerState {
			position: None,
			radius: style.pointer_radius,
		};
		let mut field = Self {
			particles: Vec::new(),
			pointer,
			style,
			width: 0.0,
			height: 0.0,
		};
		field.resize(width, height);
		field
	}

	/// Adopt new surface dimensions and regenerate every particle.
	///
	/// The old set is discarded wholesale; nothing is resized in place.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.particles.clear();
		if self.width == 0.0 || self.height == 0.0 {
			return;
		}
		for i in 0..self.style.count {
			self.particles
				.push(Particle::new(i, &self.style, self.width, self.height));
		}
	}

	/// Update the shared pointer state with a surface-local position, or
	/// `None` when the pointer leaves the interactive region.
	pub fn set_pointer(&mut self, position: Option<(f64, f64)>) {
		self.pointer.position = position;
	}

	/// Advance every particle one frame, in collection order. No particle
	/// reads another's state, so the order is irrelevant to the result.
	pub fn tick(&mut self) {
		let (width, height) = (self.width, self.height);
		let pointer = self.pointer;
		let style = &self.style;
		for particle in &mut self.particles {
			particle.update(&pointer, style, width, height);
		}
	}

	/// The O(n²) connection pass: one entry per unordered pair of particles
	/// closer than the threshold, with alpha falling off linearly to zero at
	/// the threshold. Sixty particles means 1770 distance checks per frame,
	/// fine at this scale; a spatial grid would be the upgrade path for much
	/// larger counts.
	pub fn connections(&self) -> Vec<Connection> {
		let threshold = self.style.connect_distance;
		let mut lines = Vec::new();
		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let (a, b) = (&self.particles[i], &self.particles[j]);
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if distance < threshold {
					lines.push(Connection {
						from: (a.x, a.y),
						to: (b.x, b.y),
						alpha: (1.0 - distance / threshold) * self.style.connect_opacity,
					});
				}
			}
		}
		lines
	}

	/// The current particle set.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// The style the field was built with.
	pub fn style(&self) -> &FieldStyle {
		&self.style
	}

	/// Current surface dimensions.
	pub fn dimensions(&self) -> (f64, f64) {
		(self.width, self.height)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn construction_populates_the_configured_count() {
		let field = ParticleField::new(FieldStyle::default(), 800.0, 600.0);
		assert_eq!(field.particles().len(), 60);
		for p in field.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
		}
	}

	#[test]
	fn zero_area_surface_is_a_no_op() {
		let mut field = ParticleField::new(FieldStyle::default(), 0.0, 600.0);
		assert!(field.particles().is_empty());
		field.tick();
		assert!(field.connections().is_empty());
	}

	#[test]
	fn resize_regenerates_the_whole_set_at_new_bounds() {
		let mut field = ParticleField::new(FieldStyle::default(), 800.0, 600.0);
		field.tick();
		field.resize(400.0, 300.0);

		assert_eq!(field.particles().len(), 60);
		assert_eq!(field.dimensions(), (400.0, 300.0));
		for p in field.particles() {
			assert!((0.0..400.0).contains(&p.x), "leftover particle at {}", p.x);
			assert!((0.0..300.0).contains(&p.y), "leftover particle at {}", p.y);
		}
	}

	#[test]
	fn tick_without_pointer_keeps_base_radius_and_opacity() {
		let mut field = ParticleField::new(FieldStyle::default(), 800.0, 600.0);
		field.tick();

		assert_eq!(field.particles().len(), 60);
		for p in field.particles() {
			assert_eq!(p.size, p.base_size());
			assert_eq!(p.opacity, p.base_opacity());
		}
	}

	#[test]
	fn connection_alphas_match_the_linear_falloff() {
		let mut field = ParticleField::new(FieldStyle::default(), 800.0, 600.0);
		field.tick();

		let threshold = field.style().connect_distance;
		let cap = field.style().connect_opacity;
		for line in field.connections() {
			let (dx, dy) = (line.from.0 - line.to.0, line.from.1 - line.to.1);
			let distance = (dx * dx + dy * dy).sqrt();
			assert!(distance < threshold);
			let expected = (1.0 - distance / threshold) * cap;
			assert!((line.alpha - expected).abs() < 1e-12);
			assert!(line.alpha > 0.0 && line.alpha <= cap);
		}
	}

	#[test]
	fn connection_pass_respects_the_threshold_boundary() {
		let mut field = ParticleField::new(FieldStyle::default(), 500.0, 500.0);
		field.particles.truncate(2);
		field.particles[0].x = 100.0;
		field.particles[0].y = 100.0;
		field.particles[1].y = 100.0;

		// d = 60: alpha halfway down the falloff.
		field.particles[1].x = 160.0;
		let lines = field.connections();
		assert_eq!(lines.len(), 1);
		assert!((lines[0].alpha - 0.075).abs() < 1e-12);

		// d = 119.9: barely connected.
		field.particles[1].x = 219.9;
		let lines = field.connections();
		assert_eq!(lines.len(), 1);
		assert!(lines[0].alpha > 0.0 && lines[0].alpha < 0.001);

		// d = 120: exactly at the threshold, no line.
		field.particles[1].x = 220.0;
		assert!(field.connections().is_empty());
	}

	#[test]
	fn coincident_particles_connect_at_the_opacity_cap() {
		let mut field = ParticleField::new(FieldStyle::default(), 500.0, 500.0);
		field.particles.truncate(2);
		field.particles[0].x = 250.0;
		field.particles[0].y = 250.0;
		field.particles[1].x = 250.0;
		field.particles[1].y = 250.0;

		let lines = field.connections();
		assert_eq!(lines.len(), 1);
		assert!(lines[0].alpha.is_finite());
		assert_eq!(lines[0].alpha, 0.15);
	}

	#[test]
	fn pointer_roundtrip_through_the_field() {
		let mut field = ParticleField::new(FieldStyle::default(), 800.0, 600.0);
		field.set_pointer(Some((400.0, 300.0)));
		field.tick();
		let inflated = field
			.particles()
			.iter()
			.filter(|p| p.size > p.base_size())
			.count();
		assert!(inflated > 0, "no particle reacted to a centered pointer");

		field.set_pointer(None);
		field.tick();
		for p in field.particles() {
			assert_eq!(p.size, p.base_size());
			assert_eq!(p.opacity, p.base_opacity());
		}
	}
}
