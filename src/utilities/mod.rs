pub mod scale;

pub use scale::{clamp_progress, ease, subdivide};
