//! Configuration management for the dead-zone Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, NeighborBounds, OutputConfig, OutputFormat, Settings,
    SettingsError, SimulationConfig,
};
