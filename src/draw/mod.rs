// src/draw/mod.rs
// Draw primitives issued through nannou's Draw API

pub mod three_lines;

pub use three_lines::{draw_node, Geometry};
