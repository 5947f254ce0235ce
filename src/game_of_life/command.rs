//! Keyboard commands understood by the grid engine

use std::fmt;

/// A board-initialization command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clear,
    TenInARow,
    Randomize,
    AddGlider,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Clear,
        Command::TenInARow,
        Command::Randomize,
        Command::AddGlider,
    ];

    /// Map a key to its command; unknown keys yield `None`
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'c' => Some(Command::Clear),
            't' => Some(Command::TenInARow),
            'r' => Some(Command::Randomize),
            'g' => Some(Command::AddGlider),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Command::Clear => 'c',
            Command::TenInARow => 't',
            Command::Randomize => 'r',
            Command::AddGlider => 'g',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Clear => "clear board",
            Command::TenInARow => "ten in a row",
            Command::Randomize => "randomize interior",
            Command::AddGlider => "add glider",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key('c'), Some(Command::Clear));
        assert_eq!(Command::from_key('t'), Some(Command::TenInARow));
        assert_eq!(Command::from_key('r'), Some(Command::Randomize));
        assert_eq!(Command::from_key('g'), Some(Command::AddGlider));
    }

    #[test]
    fn test_unknown_keys() {
        for key in ['p', ' ', 'C', 'x', '\0', 'é'] {
            assert_eq!(Command::from_key(key), None, "{key:?}");
        }
    }

    #[test]
    fn test_key_is_inverse_of_from_key() {
        for command in Command::ALL {
            assert_eq!(Command::from_key(command.key()), Some(command));
        }
    }
}
