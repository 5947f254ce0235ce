//! The grid engine: sole owner of the board

use super::patterns::{self, RandomSource, RngSource};
use super::{Board, Command, LifeRules};
use crate::config::NeighborBounds;
use rand::rngs::StdRng;

/// Owns the board and applies every state change to it.
///
/// Readers get `&Board` or an owned snapshot; the board is never exposed
/// mutably. Each generation builds a complete successor before replacing
/// the current board.
#[derive(Debug)]
pub struct GridEngine<S = RngSource<StdRng>> {
    board: Board,
    rules: LifeRules,
    rng: S,
    generation: u64,
}

impl GridEngine {
    /// Engine backed by `StdRng`, seeded when `seed` is given
    pub fn seeded(size: usize, bounds: NeighborBounds, seed: Option<u64>) -> Self {
        Self::new(size, bounds, RngSource::seeded(seed))
    }
}

impl<S: RandomSource> GridEngine<S> {
    /// Allocate an all-dead `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is below [`MIN_BOARD_SIZE`](super::MIN_BOARD_SIZE).
    pub fn new(size: usize, bounds: NeighborBounds, rng: S) -> Self {
        Self {
            board: Board::new(size),
            rules: LifeRules::new(bounds),
            rng,
            generation: 0,
        }
    }

    /// Start from an existing board instead of an empty one
    pub fn with_board(board: Board, bounds: NeighborBounds, rng: S) -> Self {
        Self {
            board,
            rules: LifeRules::new(bounds),
            rng,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the current board
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn rules(&self) -> LifeRules {
        self.rules
    }

    /// Generations advanced since the last clear, line or random fill
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = 0;
        log::debug!("board cleared");
    }

    pub fn init_ten_in_a_row(&mut self) {
        patterns::ten_in_a_row(&mut self.board);
        self.generation = 0;
        log::debug!("ten-in-a-row placed");
    }

    pub fn init_random(&mut self) {
        patterns::randomize_interior(&mut self.board, &mut self.rng);
        self.generation = 0;
        log::debug!(
            "interior randomized, {} cells alive",
            self.board.living_count()
        );
    }

    pub fn add_glider(&mut self) {
        let (row, col) = patterns::add_glider(&mut self.board, &mut self.rng);
        log::debug!("glider added at ({row}, {col})");
    }

    /// Replace the board with its successor
    pub fn advance_generation(&mut self) {
        let next = self.rules.evolve(&self.board);
        self.board = next;
        self.generation += 1;
        log::trace!(
            "generation {} has {} live cells",
            self.generation,
            self.board.living_count()
        );
    }

    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Clear => self.clear(),
            Command::TenInARow => self.init_ten_in_a_row(),
            Command::Randomize => self.init_random(),
            Command::AddGlider => self.add_glider(),
        }
    }

    /// Dispatch the command bound to `key`; unknown keys do nothing.
    ///
    /// Returns the command that ran, if any.
    pub fn dispatch_key(&mut self, key: char) -> Option<Command> {
        let command = Command::from_key(key)?;
        self.dispatch(command);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns::tests::ScriptedSource;
    use crate::game_of_life::BOARD_SIZE;

    fn engine(draws: &[usize]) -> GridEngine<ScriptedSource> {
        GridEngine::new(
            BOARD_SIZE,
            NeighborBounds::SkipLeadingEdge,
            ScriptedSource::new(draws),
        )
    }

    #[test]
    fn test_construction_is_all_dead() {
        let engine = engine(&[0]);
        assert_eq!(engine.board().size(), BOARD_SIZE);
        assert!(engine.board().is_empty());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    #[should_panic]
    fn test_construction_rejects_tiny_boards() {
        GridEngine::seeded(2, NeighborBounds::Full, Some(1));
    }

    #[test]
    fn test_clear_after_random() {
        let mut engine = engine(&[0]);
        engine.init_random();
        assert!(!engine.board().is_empty());

        engine.clear();
        assert!(engine.board().is_empty());
        engine.clear();
        assert!(engine.board().is_empty());
    }

    #[test]
    fn test_ten_in_a_row() {
        let mut engine = engine(&[0]);
        engine.init_random();
        engine.init_ten_in_a_row();

        let expected: Vec<_> = (20..=29).map(|col| (25, col)).collect();
        assert_eq!(engine.board().living_cells(), expected);
    }

    #[test]
    fn test_add_glider_adds_five_cells() {
        let mut engine = engine(&[10, 20, 30, 5]);
        engine.add_glider();
        assert_eq!(engine.board().living_count(), 5);
        engine.add_glider();
        assert_eq!(engine.board().living_count(), 10);
        assert!(engine.board().get(6, 32));
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut engine = engine(&[10, 20]);
        engine.add_glider();
        let start = engine.board().living_cells();

        for _ in 0..4 {
            engine.advance_generation();
        }

        let shifted: Vec<_> = start.iter().map(|&(row, col)| (row - 1, col + 1)).collect();
        assert_eq!(engine.board().living_cells(), shifted);
        assert_eq!(engine.generation(), 4);
    }

    #[test]
    fn test_advance_is_pure() {
        let mut first = engine(&[0, 1, 2, 3, 1, 0, 3]);
        first.init_random();
        let mut second = GridEngine::with_board(
            first.snapshot(),
            NeighborBounds::SkipLeadingEdge,
            ScriptedSource::new(&[3]),
        );

        first.advance_generation();
        second.advance_generation();
        assert_eq!(first.board(), second.board());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut engine = engine(&[10, 20]);
        engine.add_glider();
        let before = engine.snapshot();
        engine.advance_generation();
        assert_ne!(&before, engine.board());
        assert_eq!(before.living_count(), 5);
    }

    #[test]
    fn test_dispatch_known_keys() {
        let mut engine = engine(&[10, 20]);
        assert_eq!(engine.dispatch_key('g'), Some(Command::AddGlider));
        assert_eq!(engine.board().living_count(), 5);
        assert_eq!(engine.dispatch_key('t'), Some(Command::TenInARow));
        assert_eq!(engine.board().living_count(), 10);
        assert_eq!(engine.dispatch_key('c'), Some(Command::Clear));
        assert!(engine.board().is_empty());
    }

    #[test]
    fn test_dispatch_unknown_key_is_noop() {
        let mut engine = engine(&[0, 3, 3]);
        engine.init_random();
        engine.advance_generation();
        let before = engine.snapshot();

        for key in ['x', 'p', ' ', 'G', '1'] {
            assert_eq!(engine.dispatch_key(key), None);
        }
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_generation_counter_resets() {
        let mut engine = engine(&[10, 20]);
        engine.advance_generation();
        engine.advance_generation();
        engine.add_glider();
        assert_eq!(engine.generation(), 2);
        engine.init_ten_in_a_row();
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_bounds_reach_the_rules() {
        let engine = GridEngine::seeded(5, NeighborBounds::Full, Some(3));
        assert_eq!(engine.rules().bounds(), NeighborBounds::Full);
    }
}
