//! Dead-Zone Life
//!
//! Conway's Game of Life on a fixed square board whose outer ring is a dead
//! zone. The [`GridEngine`] owns the board; the [`driver`] module runs it
//! interactively in a terminal and [`headless`] runs it without one.

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod headless;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Board, Command, GridEngine};
pub use headless::{simulate, SimulationReport};
