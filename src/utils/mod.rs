//! Output helpers shared by the binary and the terminal driver

pub mod display;

pub use display::{BoardFormatter, Color, ColorOutput, Glyphs};
