pub mod config_load;
pub mod config_types;
pub mod palette;

pub use config_load::Config;
pub use config_types::{AnimationConfig, ShapeConfig, StyleConfig, WindowConfig};
pub use palette::{parse_hex_color, Palette};
