//! Motion model for a single field particle.
//!
//! Each particle traces a slow ellipse around a drifting anchor point and
//! reacts to the pointer with repulsion and glow. Particles know nothing
//! about each other; the pairwise connection pass lives in the field.

use std::f64::consts::TAU;

use super::style::{Color, FieldStyle};

/// Pointer interaction state shared by every particle in a field.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
	/// Surface-local pointer position; `None` while the pointer is outside
	/// the interactive region.
	pub position: Option<(f64, f64)>,
	/// Influence radius in pixels.
	pub radius: f64,
}

/// A single animated particle.
///
/// Two positions are deliberately distinct: `x`/`y` is the rendered position
/// (drift origin plus elliptical offset plus pointer push) while the drift
/// origin is the slowly wandering anchor. Edge wrapping applies to the drift
/// origin only, so the rendered position may briefly leave the surface before
/// the anchor wraps.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	base_x: f64,
	base_y: f64,
	pub size: f64,
	base_size: f64,
	pub opacity: f64,
	base_opacity: f64,
	drift_x: f64,
	drift_y: f64,
	angle: f64,
	angle_speed: f64,
	float_radius: f64,
	/// Palette color, fixed at creation.
	pub color: Color,
}

/// Index-seeded pseudo-random in [0, 1). Deterministic, so a rebuilt field at
/// the same dimensions looks the same and tests are reproducible.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

impl Particle {
	/// Create the particle at slot `index`, uniformly placed on the surface.
	pub fn new(index: usize, style: &FieldStyle, width: f64, height: f64) -> Self {
		let seed = index as f64 + 1.0;
		let x = pseudo_random(seed * 1.1) * width;
		let y = pseudo_random(seed * 2.3) * height;

		let (size_min, size_max) = style.size_range;
		let size = size_min + pseudo_random(seed * 3.7) * (size_max - size_min);
		let (opacity_min, opacity_max) = style.opacity_range;
		let opacity = opacity_min + pseudo_random(seed * 4.1) * (opacity_max - opacity_min);

		let drift_x = (pseudo_random(seed * 5.3) - 0.5) * style.drift_speed * 2.0;
		let drift_y = (pseudo_random(seed * 6.7) - 0.5) * style.drift_speed * 2.0;

		let (float_min, float_max) = style.float_radius;
		let color = if style.palette.is_empty() {
			Color::rgb(255, 255, 255)
		} else {
			let pick = (pseudo_random(seed * 10.7) * style.palette.len() as f64) as usize;
			style.palette[pick % style.palette.len()]
		};

		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			size,
			base_size: size,
			opacity,
			base_opacity: opacity,
			drift_x,
			drift_y,
			angle: pseudo_random(seed * 7.9) * TAU,
			angle_speed: (pseudo_random(seed * 8.3) - 0.5) * style.angle_speed * 2.0,
			float_radius: float_min + pseudo_random(seed * 9.1) * (float_max - float_min),
			color,
		}
	}

	/// Advance one frame: oscillate, drift, wrap, then react to the pointer.
	pub fn update(&mut self, pointer: &PointerState, style: &FieldStyle, width: f64, height: f64) {
		self.advance_motion(style, width, height);
		self.apply_pointer(pointer, style);
	}

	fn advance_motion(&mut self, style: &FieldStyle, width: f64, height: f64) {
		// Elliptical wobble around the drift origin, half width on x.
		self.angle += self.angle_speed;
		self.x = self.base_x + self.angle.cos() * self.float_radius * 0.5;
		self.y = self.base_y + self.angle.sin() * self.float_radius;

		self.base_x += self.drift_x;
		self.base_y += self.drift_y;

		// Toroidal wrap of the drift origin, per axis.
		let margin = style.wrap_margin;
		if self.base_x < -margin {
			self.base_x = width + margin;
		} else if self.base_x > width + margin {
			self.base_x = -margin;
		}
		if self.base_y < -margin {
			self.base_y = height + margin;
		} else if self.base_y > height + margin {
			self.base_y = -margin;
		}
	}

	fn apply_pointer(&mut self, pointer: &PointerState, style: &FieldStyle) {
		let Some((px, py)) = pointer.position else {
			self.size = self.base_size;
			self.opacity = self.base_opacity;
			return;
		};

		let (dx, dy) = (self.x - px, self.y - py);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance < pointer.radius {
			// Linear falloff: 1 at the pointer, 0 at the radius boundary.
			// The divisor is the constant radius, so coincident positions
			// are safe.
			let force = (pointer.radius - distance) / pointer.radius;
			let away = dy.atan2(dx);
			self.x += away.cos() * force * 2.0;
			self.y += away.sin() * force * 2.0;
			self.size = self.base_size + force * 2.0;
			self.opacity = (self.base_opacity + force * 0.3).min(style.max_glow_opacity);
		} else {
			self.size = self.base_size;
			self.opacity = self.base_opacity;
		}
	}

	/// The drift origin (anchor) position.
	pub fn drift_origin(&self) -> (f64, f64) {
		(self.base_x, self.base_y)
	}

	/// Radius before any pointer inflation.
	pub fn base_size(&self) -> f64 {
		self.base_size
	}

	/// Opacity before any pointer glow.
	pub fn base_opacity(&self) -> f64 {
		self.base_opacity
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn absent() -> PointerState {
		PointerState {
			position: None,
			radius: 150.0,
		}
	}

	#[test]
	fn creation_places_particle_on_surface() {
		let style = FieldStyle::default();
		for i in 0..60 {
			let p = Particle::new(i, &style, 800.0, 600.0);
			assert!((0.0..800.0).contains(&p.x), "x out of range: {}", p.x);
			assert!((0.0..600.0).contains(&p.y), "y out of range: {}", p.y);
			assert!(p.size >= style.size_range.0 && p.size < style.size_range.1);
			assert!(p.opacity >= style.opacity_range.0 && p.opacity < style.opacity_range.1);
			assert!(style.palette.contains(&p.color));
		}
	}

	#[test]
	fn pointer_at_zero_distance_applies_full_force() {
		let style = FieldStyle::default();
		let mut p = Particle::new(7, &style, 800.0, 600.0);
		let pointer = PointerState {
			position: Some((p.x, p.y)),
			radius: style.pointer_radius,
		};

		p.apply_pointer(&pointer, &style);

		assert!((p.size - (p.base_size + 2.0)).abs() < 1e-12);
		let expected = (p.base_opacity + 0.3).min(style.max_glow_opacity);
		assert!((p.opacity - expected).abs() < 1e-12);
	}

	#[test]
	fn pointer_out_of_range_keeps_base_values() {
		let style = FieldStyle::default();
		let mut p = Particle::new(3, &style, 800.0, 600.0);
		let pointer = PointerState {
			position: Some((p.x + 500.0, p.y)),
			radius: style.pointer_radius,
		};

		p.apply_pointer(&pointer, &style);

		assert_eq!(p.size, p.base_size);
		assert_eq!(p.opacity, p.base_opacity);
	}

	#[test]
	fn absent_pointer_resets_glow() {
		let style = FieldStyle::default();
		let mut p = Particle::new(11, &style, 800.0, 600.0);
		let at_particle = PointerState {
			position: Some((p.x, p.y)),
			radius: style.pointer_radius,
		};
		p.apply_pointer(&at_particle, &style);
		assert!(p.size > p.base_size);

		p.apply_pointer(&absent(), &style);
		assert_eq!(p.size, p.base_size);
		assert_eq!(p.opacity, p.base_opacity);
	}

	#[test]
	fn glow_never_shrinks_below_base_and_opacity_stays_capped() {
		let style = FieldStyle::default();
		let mut p = Particle::new(19, &style, 800.0, 600.0);
		for offset in [0.0, 10.0, 75.0, 149.0, 151.0, 400.0] {
			let pointer = PointerState {
				position: Some((p.x + offset, p.y)),
				radius: style.pointer_radius,
			};
			p.apply_pointer(&pointer, &style);
			assert!(p.size >= p.base_size);
			assert!(p.opacity >= p.base_opacity);
			assert!(p.opacity <= style.max_glow_opacity.max(p.base_opacity));
		}
	}

	#[test]
	fn drift_origin_never_escapes_wrap_margin() {
		let style = FieldStyle::default();
		let (w, h) = (800.0, 600.0);
		let mut p = Particle::new(42, &style, w, h);
		for _ in 0..5000 {
			p.update(&absent(), &style, w, h);
			let (bx, by) = p.drift_origin();
			assert!(
				(-style.wrap_margin..=w + style.wrap_margin).contains(&bx),
				"drift x escaped: {}",
				bx
			);
			assert!(
				(-style.wrap_margin..=h + style.wrap_margin).contains(&by),
				"drift y escaped: {}",
				by
			);
		}
	}

	#[test]
	fn wrap_resets_to_opposite_margin() {
		let style = FieldStyle::default();
		let mut p = Particle::new(0, &style, 800.0, 600.0);
		p.base_x = -style.wrap_margin - 10.0;
		p.base_y = 600.0 + style.wrap_margin + 10.0;

		p.advance_motion(&style, 800.0, 600.0);

		let (bx, by) = p.drift_origin();
		assert!((bx - (800.0 + style.wrap_margin)).abs() < 1.0);
		assert!((by - (-style.wrap_margin)).abs() < 1.0);
	}
}
