// src/config/config_types.rs
//
// Config sections for the app.
// Every section falls back to the built-in constants when a key is missing.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "threelines".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_interval_ms: u64, // Time between update ticks while a node moves
    pub scale_gap: f32,        // Progress per tick, before division by shape.parts
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 20,
            scale_gap: 0.02,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShapeConfig {
    pub parts: usize,           // Lines per side
    pub radius_factor: f32,     // Disk radius = min(w, h) / radius_factor
    pub stroke_factor: f32,     // Stroke weight = min(w, h) / stroke_factor
    pub disk_resolution: usize, // Outline points for the clipped disk
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            parts: 3,
            radius_factor: 6.4,
            stroke_factor: 90.0,
            disk_resolution: 96,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub colors: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#BDBDBD".to_string(),
            colors: ["#F44336", "#4CAF50", "#3F51B5", "#FFC107", "#2196F3"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
