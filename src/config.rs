use crate::{bitboard::BitBoard, common::GameError};

/// Default number of grid columns.
pub const GRID_COLS: usize = 15;
/// Default number of grid rows.
pub const GRID_ROWS: usize = 15;
/// Number of obstacle draws made by the maze generator.
pub const OBSTACLE_COUNT: usize = 20;
/// Simulation ticks (rendered frames) per second.
pub const TICK_RATE: u32 = 30;
/// Highest accepted tick rate; one tick must last at least a millisecond.
pub const MAX_TICK_RATE: u32 = 1000;
/// Pause after each turn transition, in milliseconds.
pub const TURN_DELAY_MS: u64 = 100;
/// Player start cell `(x, y)`.
pub const PLAYER_START: (usize, usize) = (1, 1);

/// Storage words backing the obstacle grid; `16 * 64` cells, i.e. up to 32×32.
pub const GRID_WORDS: usize = 16;

/// Bitboard type used for the obstacle layout.
pub type GridBits = BitBoard<u64, GRID_WORDS>;

/// Runtime game parameters. Defaults mirror the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub obstacles: usize,
    pub tick_rate: u32,
    pub turn_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            obstacles: OBSTACLE_COUNT,
            tick_rate: TICK_RATE,
            turn_delay_ms: TURN_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Player start cell `(x, y)`.
    pub fn player_start(&self) -> (usize, usize) {
        PLAYER_START
    }

    /// Opponent start cell: one in from the bottom-right corner.
    pub fn opponent_start(&self) -> (usize, usize) {
        (self.cols.saturating_sub(2), self.rows.saturating_sub(2))
    }

    /// Check that the configuration describes a playable session.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(GameError::EmptyGrid);
        }
        GridBits::new(self.rows, self.cols)?;
        for (x, y) in [self.player_start(), self.opponent_start()] {
            if x >= self.cols || y >= self.rows {
                return Err(GameError::StartOutOfBounds { x, y });
            }
        }
        if self.player_start() == self.opponent_start() {
            return Err(GameError::StartsCoincide);
        }
        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return Err(GameError::InvalidTickRate);
        }
        Ok(())
    }

    /// Duration of one tick in milliseconds.
    pub fn tick_millis(&self) -> u64 {
        1000 / u64::from(self.tick_rate.clamp(1, MAX_TICK_RATE))
    }
}
