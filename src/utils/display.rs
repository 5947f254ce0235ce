//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Board;

/// Characters used for the three kinds of cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub border: char,
    pub alive: char,
    pub dead: char,
}

impl From<&DisplayConfig> for Glyphs {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            border: config.border_glyph,
            alive: config.alive_glyph,
            dead: config.dead_glyph,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

/// Renders boards as text
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardFormatter {
    glyphs: Glyphs,
}

impl BoardFormatter {
    pub fn new(glyphs: Glyphs) -> Self {
        Self { glyphs }
    }

    /// Glyph for one cell; the dead zone always shows as border
    pub fn glyph(&self, board: &Board, row: usize, col: usize) -> char {
        if board.is_border(row, col) {
            self.glyphs.border
        } else if board.get(row, col) {
            self.glyphs.alive
        } else {
            self.glyphs.dead
        }
    }

    /// One string per board row
    pub fn lines(&self, board: &Board) -> Vec<String> {
        (0..board.size())
            .map(|row| {
                (0..board.size())
                    .map(|col| self.glyph(board, row, col))
                    .collect()
            })
            .collect()
    }

    /// Whole board, newline terminated rows
    pub fn format(&self, board: &Board) -> String {
        let mut output = String::with_capacity(board.size() * (board.size() + 1) * 3);
        for line in self.lines(board) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Format a board with row and column numbers
    pub fn format_with_coords(&self, board: &Board) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..board.size() {
            output.push_str(&format!("{}", col % 10));
        }
        output.push('\n');

        for (row, line) in self.lines(board).into_iter().enumerate() {
            output.push_str(&format!("{:2} ", row));
            output.push_str(&line);
            output.push('\n');
        }

        output
    }

    /// One-line population summary
    pub fn format_summary(generation: u64, board: &Board) -> String {
        let interior = board.size().saturating_sub(2).pow(2).max(1);
        let living = board.living_count();
        format!(
            "Generation {}: {} alive ({:.1}% of interior)",
            generation,
            living,
            living as f64 / interior as f64 * 100.0
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
