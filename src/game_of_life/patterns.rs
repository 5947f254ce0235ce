//! Board initialization patterns

use super::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of the ten-in-a-row line
pub const LINE_LENGTH: usize = 10;

/// Live cells of a glider, as (row, col) offsets from its anchor:
///
/// ```text
///  .oo
///  o.o
///  ..o
/// ```
pub const GLIDER_OFFSETS: [(isize, isize); 5] = [(0, -1), (-1, 0), (-1, 1), (0, 1), (1, 1)];

/// Source of uniform random draws used by the random patterns.
pub trait RandomSource {
    /// Uniform integer in `0..bound`; `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Seeded when `seed` is given, from OS entropy otherwise
    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Clear the board and draw a horizontal line of ten cells through its center
pub fn ten_in_a_row(board: &mut Board) {
    board.clear();
    let middle = board.size() / 2;
    // on very small boards the line is clipped to the board
    let start = middle.saturating_sub(LINE_LENGTH / 2);
    let end = (middle + LINE_LENGTH / 2).min(board.size());
    for col in start..end {
        board.set(middle, col, true);
    }
}

/// Give every interior cell a one-in-four chance of being alive.
///
/// The dead zone keeps whatever it held.
pub fn randomize_interior(board: &mut Board, rng: &mut impl RandomSource) {
    let last = board.size() - 1;
    for row in 1..last {
        for col in 1..last {
            board.set(row, col, rng.next_below(4) == 0);
        }
    }
}

/// Add a glider at a random anchor, keeping its 3×3 footprint off the border.
///
/// Returns the anchor as (row, col). Existing live cells are left alone.
pub fn add_glider(board: &mut Board, rng: &mut impl RandomSource) -> (usize, usize) {
    // anchors span [2, N-3]; boards under 5 cells pin it to (2, 2)
    let span = board.size().saturating_sub(4).max(1);
    let col = rng.next_below(span) + 2;
    let row = rng.next_below(span) + 2;
    stamp_glider(board, row, col);
    (row, col)
}

/// Set the glider cells around an anchor
pub fn stamp_glider(board: &mut Board, row: usize, col: usize) {
    for (dr, dc) in GLIDER_OFFSETS {
        let r = row.checked_add_signed(dr);
        let c = col.checked_add_signed(dc);
        if let (Some(r), Some(c)) = (r, c) {
            if r < board.size() && c < board.size() {
                board.set(r, c, true);
            }
        }
    }
}
