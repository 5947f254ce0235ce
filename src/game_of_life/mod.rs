//! Game of Life core functionality

pub mod board;
pub mod command;
pub mod engine;
pub mod patterns;
pub mod rules;

pub use board::{Board, BoardError, BOARD_SIZE, MIN_BOARD_SIZE};
pub use command::Command;
pub use engine::GridEngine;
pub use patterns::{RandomSource, RngSource};
pub use rules::LifeRules;
