// src/config/config_load.rs
//
// loading config.toml

use log::info;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config_types::{AnimationConfig, ShapeConfig, StyleConfig, WindowConfig};
use super::palette::parse_hex_color;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub animation: AnimationConfig,
    pub shape: ShapeConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        // First try to load from the executable's directory
        let config = match Self::exe_dir_path() {
            Some(path) if path.exists() => Self::load_from_path(&path)?,
            // Fallback to loading from the current working directory
            _ => Self::load_from_path(Path::new("config.toml"))?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(content)?)
    }

    fn exe_dir_path() -> Option<std::path::PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join("config.toml"))
    }

    /// Rejects values the animation cannot run with.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.style.colors.is_empty() {
            return Err("style.colors must name at least one color".into());
        }
        if self.animation.tick_interval_ms == 0 {
            return Err("animation.tick_interval_ms must be positive".into());
        }
        if self.animation.scale_gap <= 0.0 || self.animation.scale_gap > 1.0 {
            return Err(format!(
                "animation.scale_gap must be in (0, 1], got {}",
                self.animation.scale_gap
            )
            .into());
        }
        if self.shape.parts == 0 {
            return Err("shape.parts must be positive".into());
        }
        if self.shape.radius_factor <= 0.0 || self.shape.stroke_factor <= 0.0 {
            return Err("shape factors must be positive".into());
        }
        if self.shape.disk_resolution < 3 {
            return Err("shape.disk_resolution must be at least 3".into());
        }

        parse_hex_color(&self.style.background)?;
        for color in &self.style.colors {
            parse_hex_color(color)?;
        }
        Ok(())
    }

    /// Progress added to a moving node on every tick.
    pub fn step(&self) -> f32 {
        self.animation.scale_gap / self.shape.parts as f32
    }

    /// Number of nodes in the chain, one per palette color.
    pub fn chain_length(&self) -> usize {
        self.style.colors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chain_length(), 5);
        assert_eq!(config.animation.tick_interval_ms, 20);
        assert!((config.step() - 0.02 / 3.0).abs() < 1e-7);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r##"
            [style]
            colors = ["#000000", "#FFFFFF"]

            [animation]
            tick_interval_ms = 40
            "##,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.chain_length(), 2);
        assert_eq!(config.animation.tick_interval_ms, 40);
        assert_eq!(config.style.background, "#BDBDBD");
        assert_eq!(config.shape.parts, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.style.colors.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.colors[2] = "blue".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shape.parts = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.animation.scale_gap = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(Config::from_toml("[window\nwidth = 3").is_err());
        assert!(Config::from_toml("[window]\nwidth = \"wide\"").is_err());
    }
}
