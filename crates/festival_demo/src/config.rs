//! Demo configuration file handling
//!
//! The demo reads an optional `festival-demo.toml` describing the
//! simulated device and motion parameters. Every section and field falls
//! back to the defaults of the original screens, so an empty file (or no
//! file at all) reproduces them exactly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use festival_motion::{HeaderGeometry, SheetConfig};

/// Demo configuration loaded from TOML
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub viewport: ViewportSection,
    #[serde(default)]
    pub header: HeaderSection,
    #[serde(default)]
    pub sheet: SheetSection,
}

/// Simulated device viewport
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewportSection {
    #[serde(default = "default_viewport_width")]
    pub width: f32,
    #[serde(default = "default_viewport_height")]
    pub height: f32,
}

impl Default for ViewportSection {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

/// Parallax header geometry
#[derive(Debug, Deserialize, Serialize)]
pub struct HeaderSection {
    #[serde(default = "default_full_height")]
    pub full_height: f32,
    #[serde(default = "default_collapsed_height")]
    pub collapsed_height: f32,
    #[serde(default = "default_max_blur")]
    pub max_blur: f32,
}

impl Default for HeaderSection {
    fn default() -> Self {
        Self {
            full_height: default_full_height(),
            collapsed_height: default_collapsed_height(),
            max_blur: default_max_blur(),
        }
    }
}

/// Swipe-to-dismiss sheet parameters
#[derive(Debug, Deserialize, Serialize)]
pub struct SheetSection {
    #[serde(default = "default_sheet_height")]
    pub height: f32,
    #[serde(default = "default_dismiss_fraction")]
    pub dismiss_fraction: f32,
}

impl Default for SheetSection {
    fn default() -> Self {
        Self {
            height: default_sheet_height(),
            dismiss_fraction: default_dismiss_fraction(),
        }
    }
}

fn default_viewport_width() -> f32 {
    375.0
}

fn default_viewport_height() -> f32 {
    812.0
}

fn default_full_height() -> f32 {
    300.0
}

fn default_collapsed_height() -> f32 {
    75.0
}

fn default_max_blur() -> f32 {
    6.0
}

fn default_sheet_height() -> f32 {
    400.0
}

fn default_dismiss_fraction() -> f32 {
    2.0 / 3.0
}

impl DemoConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Header geometry for the motion core
    pub fn header_geometry(&self) -> HeaderGeometry {
        HeaderGeometry {
            full_height: self.header.full_height,
            collapsed_height: self.header.collapsed_height,
            max_blur: self.header.max_blur,
        }
    }

    /// Sheet configuration for the motion core
    pub fn sheet_config(&self) -> festival_motion::Result<SheetConfig> {
        SheetConfig::with_dismiss_fraction(self.sheet.height, self.sheet.dismiss_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_screen_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.header.full_height, 300.0);
        assert_eq!(config.header.collapsed_height, 75.0);
        assert_eq!(config.sheet.height, 400.0);
        assert!((config.sheet.dismiss_fraction - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(config.viewport.height, 812.0);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            [sheet]
            height = 520.0
            "#,
        )
        .unwrap();
        assert_eq!(config.sheet.height, 520.0);
        assert!((config.sheet.dismiss_fraction - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(config.header.full_height, 300.0);
    }

    #[test]
    fn test_sections_map_to_motion_types() {
        let config = DemoConfig::default();
        let geometry = config.header_geometry();
        assert_eq!(geometry.size_off_screen(), 225.0);
        assert!(config.sheet_config().is_ok());
    }
}
