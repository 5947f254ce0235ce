//! Generation rule: neighbor counting and the birth/survival/death policy

use super::Board;
use crate::config::NeighborBounds;
use itertools::iproduct;
use rayon::prelude::*;

/// Conway rule evaluated over a bounded board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeRules {
    bounds: NeighborBounds,
}

impl LifeRules {
    pub fn new(bounds: NeighborBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> NeighborBounds {
        self.bounds
    }

    /// Compute the successor of `current`.
    ///
    /// Every next state is read from `current` only, so the result never
    /// mixes old and new cells.
    pub fn evolve(&self, current: &Board) -> Board {
        let size = current.size();

        let next_cells: Vec<bool> = (0..size)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..size).map(move |col| {
                    let neighbors = self.count_neighbors(current, row, col);
                    Self::next_state(current.get(row, col), neighbors)
                })
            })
            .collect();

        Board::from_flat(size, next_cells)
    }

    /// Evolve the board for multiple generations
    pub fn evolve_generations(&self, mut board: Board, generations: usize) -> Board {
        for _ in 0..generations {
            board = self.evolve(&board);
        }
        board
    }

    /// Count living Moore neighbors, without wraparound
    pub fn count_neighbors(&self, board: &Board, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;
                self.is_counted(board.size(), r)
                    && self.is_counted(board.size(), c)
                    && board.get(r as usize, c as usize)
            })
            .count() as u8
    }

    /// Whether a neighbor index along one axis takes part in the count
    fn is_counted(&self, size: usize, index: isize) -> bool {
        let lowest = match self.bounds {
            NeighborBounds::SkipLeadingEdge => 1,
            NeighborBounds::Full => 0,
        };
        index >= lowest && index < size as isize
    }

    /// Next state of a cell given its current state and neighbor count
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            // isolation
            (_, 0 | 1) => false,
            // stability
            (true, 2 | 3) => true,
            // birth
            (false, 3) => true,
            // overcrowding, or too few to be born
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> LifeRules {
        LifeRules::new(NeighborBounds::Full)
    }

    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn test_rule_logic() {
        assert!(!LifeRules::next_state(true, 0));
        assert!(!LifeRules::next_state(true, 1));
        assert!(LifeRules::next_state(true, 2));
        assert!(LifeRules::next_state(true, 3));
        assert!(!LifeRules::next_state(true, 4));
        assert!(!LifeRules::next_state(true, 8));
        assert!(!LifeRules::next_state(false, 2));
        assert!(LifeRules::next_state(false, 3));
        assert!(!LifeRules::next_state(false, 4));
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = board(
            "00000
             01110
             01010
             01110
             00000",
        );
        let rules = LifeRules::default();
        assert_eq!(rules.count_neighbors(&grid, 2, 2), 8);
        assert_eq!(rules.count_neighbors(&grid, 1, 1), 2);
        assert_eq!(rules.count_neighbors(&grid, 0, 0), 1);
        assert_eq!(rules.count_neighbors(&grid, 4, 4), 1);
    }

    #[test]
    fn test_leading_edge_neighbors_are_skipped_by_default() {
        let grid = board(
            "111
             111
             111",
        );
        // (1, 1) only sees (1, 2), (2, 1) and (2, 2)
        assert_eq!(LifeRules::default().count_neighbors(&grid, 1, 1), 3);
        assert_eq!(full().count_neighbors(&grid, 1, 1), 8);
        // the trailing edge is always counted
        assert_eq!(LifeRules::default().count_neighbors(&grid, 2, 2), 3);
        assert_eq!(full().count_neighbors(&grid, 2, 2), 3);
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let rules = LifeRules::default();
        let evolved = rules.evolve_generations(Board::new(10), 5);
        assert!(evolved.is_empty());
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = board(
            "00000
             00000
             00100
             00000
             00000",
        );
        assert!(LifeRules::default().evolve(&grid).is_empty());
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let grid = board(
            "00000
             01010
             00000
             00100
             00000",
        );
        let next = LifeRules::default().evolve(&grid);
        assert!(next.get(2, 2));
        assert_eq!(next.living_cells(), vec![(2, 2)]);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let grid = board(
            "00000
             01010
             00100
             01010
             00000",
        );
        let next = LifeRules::default().evolve(&grid);
        assert!(!next.get(2, 2));
    }

    #[test]
    fn test_still_life_block() {
        let grid = board(
            "000000
             000000
             001100
             001100
             000000
             000000",
        );
        assert_eq!(LifeRules::default().evolve(&grid), grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = board(
            "00000
             00000
             01110
             00000
             00000",
        );
        let vertical = board(
            "00000
             00100
             00100
             00100
             00000",
        );
        let rules = LifeRules::default();
        assert_eq!(rules.evolve(&horizontal), vertical);
        assert_eq!(rules.evolve(&vertical), horizontal);
    }

    #[test]
    fn test_evolution_is_deterministic() {
        let grid = board(
            "0000000
             0110100
             0011010
             0100110
             0011000
             0101010
             0000000",
        );
        let rules = LifeRules::default();
        assert_eq!(rules.evolve(&grid), rules.evolve(&grid));
        assert_eq!(rules.evolve(&grid), full().evolve(&grid));
    }

    #[test]
    fn test_blinker_on_top_row_depends_on_bounds() {
        let grid = board(
            "01110
             00000
             00000
             00000
             00000",
        );
        assert!(LifeRules::default().evolve(&grid).is_empty());
        assert_eq!(full().evolve(&grid).living_cells(), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_blinker_on_left_column_depends_on_bounds() {
        let grid = board(
            "00000
             10000
             10000
             10000
             00000",
        );
        assert!(LifeRules::default().evolve(&grid).is_empty());
        assert_eq!(full().evolve(&grid).living_cells(), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_blinker_on_bottom_row_ignores_bounds() {
        let grid = board(
            "00000
             00000
             00000
             00000
             01110",
        );
        let expected = vec![(3, 2), (4, 2)];
        assert_eq!(LifeRules::default().evolve(&grid).living_cells(), expected);
        assert_eq!(full().evolve(&grid).living_cells(), expected);
    }
}
