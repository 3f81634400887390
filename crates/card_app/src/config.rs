//! Profile card configuration file handling

use anyhow::{Context, Result};
use card_core::Color;
use card_export::RasterOptions;
use card_theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "card.toml";

/// Top-level configuration (card.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CardConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// PNG export settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory downloads are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Device pixels per logical pixel
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Backdrop as `#rrggbb` / `#rrggbbaa`; transparent when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_scale() -> f32 {
    2.0
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            scale: default_scale(),
            background: None,
        }
    }
}

impl ExportConfig {
    pub fn raster_options(&self) -> Result<RasterOptions> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            anyhow::bail!("export.scale must be a positive number, got {}", self.scale);
        }
        let background = self
            .background
            .as_deref()
            .map(Color::from_hex_str)
            .transpose()
            .context("Invalid export.background")?;
        Ok(RasterOptions::default()
            .with_scale(self.scale)
            .with_background(background))
    }
}

/// Starting profile
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub theme: ThemeName,
    /// Replaces the seed name when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Headless scenario timing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeadlessConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_probe_every_frames")]
    pub probe_every_frames: u32,
}

fn default_tick_ms() -> u64 {
    16
}

fn default_probe_every_frames() -> u32 {
    4
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            probe_every_frames: default_probe_every_frames(),
        }
    }
}

impl CardConfig {
    /// Load configuration from a directory (looks for card.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `profile-card init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Like [`load_from_dir`](Self::load_from_dir), but a directory without
    /// a config file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_dir() && !path.join(CONFIG_FILE).exists() {
            tracing::debug!(dir = %path.display(), "no {CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_dir(path)
    }

    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CardConfig::from_toml("").unwrap();
        assert_eq!(config, CardConfig::default());
        assert_eq!(config.export.scale, 2.0);
        assert_eq!(config.headless.tick_ms, 16);
        assert_eq!(config.profile.theme, ThemeName::Minimal);
    }

    #[test]
    fn test_partial_sections() {
        let config = CardConfig::from_toml(
            r##"
            [export]
            background = "#ffffff"

            [profile]
            theme = "dark mode"
            name = "Alex Rivera"
            "##,
        )
        .unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("exports"));
        assert_eq!(config.profile.theme, ThemeName::DarkMode);
        assert_eq!(config.profile.name.as_deref(), Some("Alex Rivera"));

        let options = config.export.raster_options().unwrap();
        assert_eq!(options.background, Some(Color::WHITE));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        assert!(CardConfig::from_toml("[profile]\ntheme = \"neon\"").is_err());

        let mut config = CardConfig::default();
        config.export.scale = 0.0;
        assert!(config.export.raster_options().is_err());
        config.export.scale = 1.0;
        config.export.background = Some("blue".to_string());
        assert!(config.export.raster_options().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CardConfig::default();
        config.profile.name = Some("Jordan Chen".to_string());
        let text = config.to_toml().unwrap();
        assert_eq!(CardConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_dir() {
        let temp = tempfile::tempdir().unwrap();
        assert!(CardConfig::load_from_dir(temp.path()).is_err());
        assert_eq!(CardConfig::load_or_default(temp.path()).unwrap(), CardConfig::default());

        std::fs::write(temp.path().join(CONFIG_FILE), "[export]\nscale = 1.0\n").unwrap();
        let config = CardConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.export.scale, 1.0);

        let by_file = CardConfig::load_from_dir(&temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(by_file, config);
    }
}
