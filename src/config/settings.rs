//! Configuration settings for the dead-zone Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delay between two generations of the interactive session
    pub tick_interval_ms: u64,
    pub neighbor_bounds: NeighborBounds,
    /// Fixed seed for random patterns; fresh entropy when absent
    pub seed: Option<u64>,
}

/// Which neighbor indices take part in the neighbor count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborBounds {
    /// Neighbors at row 0 or column 0 are never counted, like indices outside the board.
    #[default]
    SkipLeadingEdge,
    /// Every neighbor inside the board is counted.
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub border_glyph: char,
    pub alive_glyph: char,
    pub dead_glyph: char,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reasons a settings value is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("display glyphs must be distinct, '{0}' is used twice")]
    DuplicateGlyph(char),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            neighbor_bounds: NeighborBounds::default(),
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            border_glyph: '█',
            alive_glyph: 'o',
            dead_glyph: '.',
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(settings)
    }

    /// Load settings from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.simulation.tick_interval_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }

        let DisplayConfig {
            border_glyph,
            alive_glyph,
            dead_glyph,
        } = self.display;
        if border_glyph == alive_glyph || border_glyph == dead_glyph {
            return Err(SettingsError::DuplicateGlyph(border_glyph));
        }
        if alive_glyph == dead_glyph {
            return Err(SettingsError::DuplicateGlyph(alive_glyph));
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(bounds) = cli_overrides.neighbor_bounds {
            self.simulation.neighbor_bounds = bounds;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }

    /// Default location of the configuration file
    pub fn default_path() -> PathBuf {
        PathBuf::from("config/default.yaml")
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub tick_interval_ms: Option<u64>,
    pub seed: Option<u64>,
    pub neighbor_bounds: Option<NeighborBounds>,
    pub format: Option<OutputFormat>,
}
