//! Two-state cells.

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Character used for dead cells in the text format.
    pub const DEAD_CHAR: char = '.';
    /// Character used for live cells in the text format.
    pub const ALIVE_CHAR: char = 'O';

    /// Parse a cell from its text-format character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            Self::DEAD_CHAR => Some(Self::Dead),
            Self::ALIVE_CHAR => Some(Self::Alive),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dead => Self::DEAD_CHAR,
            Self::Alive => Self::ALIVE_CHAR,
        }
    }

    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}
