//! Viewer configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::projection::Projection;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Window, projection and drawing parameters.
///
/// Every field has a default, so a config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Side of the square window, in pixels
    pub window_size: u32,
    /// Pixels per model unit
    pub scale: f64,
    pub background: Color,
    pub edge_color: Color,
    pub edge_width: f64,
    pub vertex_color: Color,
    pub vertex_radius: f64,
    /// Rotation applied by a drag across the full window width or height
    pub degrees_per_window: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: 600,
            scale: 100.0,
            background: Color::WHITE,
            edge_color: Color::BLACK,
            edge_width: 3.0,
            vertex_color: Color::RED,
            vertex_radius: 5.0,
            degrees_per_window: 360.0,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn projection(&self) -> Projection {
        Projection::new(self.scale, f64::from(self.window_size))
    }
}
