//! Common types for the tank game: directions, roles, outcomes and errors.

use crate::bitboard::BitBoardError;

/// One of the four cardinal facings. `y` grows downward, so `Up` is `dy = -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the opponent lists them before shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction of a unit cardinal step. Anything else (diagonals, zero,
    /// larger magnitudes) yields `None`.
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Counter-clockwise sprite rotation in degrees for a sprite drawn facing up.
    pub const fn rotation(self) -> u16 {
        match self {
            Direction::Up => 0,
            Direction::Right => 270,
            Direction::Down => 180,
            Direction::Left => 90,
        }
    }
}

/// Which side a tank or projectile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Player,
    Opponent,
}

impl Role {
    /// The other side.
    pub const fn opposite(self) -> Role {
        match self {
            Role::Player => Role::Opponent,
            Role::Opponent => Role::Player,
        }
    }
}

/// Terminal result of a game, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Overlay text shown when the game ends.
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors returned while setting up a game. Gameplay itself never fails:
/// illegal actions are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (e.g., grid too large for storage).
    BitBoardError(BitBoardError),
    /// Grid has zero rows or columns.
    EmptyGrid,
    /// A start cell lies outside the grid.
    StartOutOfBounds { x: usize, y: usize },
    /// Player and opponent were configured on the same start cell.
    StartsCoincide,
    /// A supplied maze does not match the configured dimensions.
    GridMismatch { cols: usize, rows: usize },
    /// A supplied maze blocks a start cell.
    StartBlocked { x: usize, y: usize },
    /// Tick rate must be between 1 and 1000 frames per second.
    InvalidTickRate,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoardError(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GameError::EmptyGrid => write!(f, "Grid must have at least one row and column"),
            GameError::StartOutOfBounds { x, y } => {
                write!(f, "Start cell ({}, {}) is outside the grid", x, y)
            }
            GameError::StartsCoincide => write!(f, "Player and opponent share a start cell"),
            GameError::GridMismatch { cols, rows } => {
                write!(f, "Maze is {}x{}, which does not match the configuration", cols, rows)
            }
            GameError::StartBlocked { x, y } => write!(f, "Start cell ({}, {}) is blocked", x, y),
            GameError::InvalidTickRate => {
                write!(f, "Tick rate must be between 1 and 1000 frames per second")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
