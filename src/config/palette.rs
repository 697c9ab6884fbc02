// src/config/palette.rs
//
// Colors parsed once from the style config.
// Node i is drawn with colors[i].

use nannou::prelude::*;
use regex::Regex;
use std::error::Error;

use super::config_types::StyleConfig;

#[derive(Debug, Clone)]
pub struct Palette {
    background: Rgb,
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn from_config(style: &StyleConfig) -> Result<Self, Box<dyn Error>> {
        let colors = style
            .colors
            .iter()
            .map(|hex| parse_hex_color(hex))
            .collect::<Result<Vec<_>, _>>()?;
        if colors.is_empty() {
            return Err("palette needs at least one color".into());
        }

        Ok(Self {
            background: parse_hex_color(&style.background)?,
            colors,
        })
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Parses `#RRGGBB` into a linear 0..1 rgb triple.
pub fn parse_hex_color(hex: &str) -> Result<Rgb, Box<dyn Error>> {
    let pattern = Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$")?;
    let caps = pattern
        .captures(hex.trim())
        .ok_or_else(|| format!("invalid color '{}', expected #RRGGBB", hex))?;

    let channel = |i: usize| -> Result<f32, Box<dyn Error>> {
        Ok(u8::from_str_radix(&caps[i], 16)? as f32 / 255.0)
    };
    Ok(rgb(channel(1)?, channel(2)?, channel(3)?))
}
