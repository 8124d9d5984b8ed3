//! Animated particle background for the hero section.
//!
//! A fixed set of softly glowing particles drifts across the canvas, each
//! tracing a slow ellipse around a wandering anchor point. Particles close to
//! each other are joined by faint lines, and the pointer repels and brightens
//! anything within reach.
//!
//! The motion model (`particle`, `field`) is pure Rust with no DOM types and
//! is unit tested natively; `render` and `component` adapt it to the canvas.
//!
//! # Example
//!
//! ```ignore
//! use inkwell_site::ParticleFieldCanvas;
//!
//! view! {
//!     <section class="hero">
//!         <ParticleFieldCanvas />
//!     </section>
//! }
//! ```

mod component;
mod field;
mod particle;
mod render;
mod style;

pub use component::ParticleFieldCanvas;
pub use field::{Connection, ParticleField};
pub use particle::{Particle, PointerState};
pub use style::{Color, FieldStyle};
