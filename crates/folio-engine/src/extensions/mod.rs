// extensions/mod.rs
//
// Pure helper modules, decoupled from components.

pub mod easing;

pub use easing::{ease, lerp, lerp_vec2, smooth_toward, Easing};
