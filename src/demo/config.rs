//! Demo configuration stored as RON

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::picker::{ArrowLocation, LabelLocation, Rgba8};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("config serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid style flags {0:?}, expected a decimal or 0x-prefixed hex number")]
    StyleFlags(String),
}

/// Values edited by the example options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub default_color: Rgba8,
    pub slider_color: Rgba8,
    pub radio_color: Rgba8,
    pub toggle_color: Rgba8,
    /// Index into the swatch palette
    pub swatch: u32,
    pub swatch_arrows: ArrowLocation,
    pub swatch_label: LabelLocation,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            default_color: Rgba8::rgb(34, 139, 34),
            slider_color: Rgba8::rgb(138, 43, 226),
            radio_color: Rgba8::rgb(102, 205, 170),
            toggle_color: Rgba8::rgb(244, 164, 96),
            swatch: 0,
            swatch_arrows: ArrowLocation::Sides,
            swatch_label: LabelLocation::Bottom,
        }
    }
}

impl DemoConfig {
    /// `<config dir>/picker-kit/demo.ron`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("picker-kit").join("demo.ron"))
    }

    /// Load from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), DemoError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());
        let ron_string = ron::ser::to_string_pretty(self, config)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, ron_string)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }
}

/// Parse packed color picker style flags, e.g. `0x1ff` or `263`
pub fn parse_style_flags(s: &str) -> Result<u32, DemoError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| DemoError::StyleFlags(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DemoConfig::load(&dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("demo.ron");
        let config = DemoConfig {
            radio_color: Rgba8::new(1, 2, 3, 4),
            swatch: 5,
            swatch_arrows: ArrowLocation::Bottom,
            ..DemoConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(DemoConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demo.ron");
        fs::write(&path, "(swatch: 3)").unwrap();
        let config = DemoConfig::load(&path).unwrap();
        assert_eq!(config.swatch, 3);
        assert_eq!(config.default_color, DemoConfig::default().default_color);
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demo.ron");
        fs::write(&path, "(swatch: \"three\")").unwrap();
        assert!(matches!(DemoConfig::load(&path), Err(DemoError::Parse(_))));
    }

    #[test]
    fn test_parse_style_flags() {
        assert_eq!(parse_style_flags("0x1ff").unwrap(), 0x1ff);
        assert_eq!(parse_style_flags(" 263 ").unwrap(), 263);
        assert!(matches!(parse_style_flags("radio"), Err(DemoError::StyleFlags(_))));
    }
}
