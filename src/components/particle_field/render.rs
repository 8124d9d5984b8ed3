//! Canvas rendering for the particle field.
//!
//! Draw order per frame: clear, every particle (soft gradient glow under a
//! solid core), then the connection lines on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::particle::Particle;

/// Render one frame of the field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	let (width, height) = field.dimensions();
	ctx.clear_rect(0.0, 0.0, width, height);

	for particle in field.particles() {
		draw_particle(ctx, particle);
	}

	let line_color = field.style().line_color;
	ctx.set_line_width(1.0);
	for line in field.connections() {
		ctx.set_stroke_style_str(&line_color.with_alpha(line.alpha).to_css());
		ctx.begin_path();
		ctx.move_to(line.from.0, line.from.1);
		ctx.line_to(line.to.0, line.to.1);
		ctx.stroke();
	}
}

fn draw_particle(ctx: &CanvasRenderingContext2d, particle: &Particle) {
	let (r, g, b) = (particle.color.r, particle.color.g, particle.color.b);
	ctx.save();
	// Current opacity multiplies everything the particle draws.
	ctx.set_global_alpha(particle.opacity);

	// Soft glow: a gradient disc twice the current radius.
	if let Ok(gradient) = ctx.create_radial_gradient(
		particle.x,
		particle.y,
		0.0,
		particle.x,
		particle.y,
		particle.size * 2.0,
	) {
		let _ = gradient.add_color_stop(0.0, &format!("rgba({}, {}, {}, 1)", r, g, b));
		let _ = gradient.add_color_stop(0.5, &format!("rgba({}, {}, {}, 0.3)", r, g, b));
		let _ = gradient.add_color_stop(1.0, &format!("rgba({}, {}, {}, 0)", r, g, b));

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		let _ = ctx.arc(particle.x, particle.y, particle.size * 2.0, 0.0, PI * 2.0);
		ctx.fill();
	}

	// Solid core.
	ctx.set_fill_style_str(&format!("rgba({}, {}, {}, 1)", r, g, b));
	ctx.begin_path();
	let _ = ctx.arc(particle.x, particle.y, particle.size * 0.5, 0.0, PI * 2.0);
	ctx.fill();

	ctx.restore();
}
