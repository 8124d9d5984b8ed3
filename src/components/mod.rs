//! Interactive site components.

pub mod carousel;
pub mod contact;
pub mod counter;
pub mod filter;
pub mod frame_loop;
pub mod particle_field;
pub mod scroll;
pub mod theme_toggle;
