//! Non-interactive runs: apply commands, advance, report

use crate::config::{NeighborBounds, Settings};
use crate::game_of_life::{Board, Command, GridEngine, BOARD_SIZE};
use serde::Serialize;

/// Final state of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub generation: u64,
    pub living_cells: usize,
    pub neighbor_bounds: NeighborBounds,
    pub seed: Option<u64>,
    /// Command keys that were recognized, in order
    pub commands: String,
    pub board: Board,
}

impl SimulationReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Apply `keys` as engine commands, then advance `generations` times.
///
/// `on_generation` sees the board before the first advance and after each
/// one. Keys without a command are skipped.
pub fn simulate(
    settings: &Settings,
    keys: &str,
    generations: usize,
    mut on_generation: impl FnMut(u64, &Board),
) -> SimulationReport {
    let simulation = &settings.simulation;
    let mut engine = GridEngine::seeded(BOARD_SIZE, simulation.neighbor_bounds, simulation.seed);

    let mut commands = String::new();
    for key in keys.chars() {
        match engine.dispatch_key(key) {
            Some(command) => commands.push(command.key()),
            None => log::warn!(
                "ignoring key {key:?}, expected one of {}",
                Command::ALL.iter().map(|c| c.key()).collect::<String>()
            ),
        }
    }

    on_generation(engine.generation(), engine.board());
    for _ in 0..generations {
        engine.advance_generation();
        on_generation(engine.generation(), engine.board());
    }

    SimulationReport {
        generation: engine.generation(),
        living_cells: engine.board().living_count(),
        neighbor_bounds: simulation.neighbor_bounds,
        seed: simulation.seed,
        commands,
        board: engine.snapshot(),
    }
}
