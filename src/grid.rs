//! Obstacle grid and the random maze generator.

use crate::{
    common::{Direction, GameError},
    config::{GameConfig, GridBits},
};
use core::fmt;
use rand::Rng;

/// Signed cell coordinate. Projectiles may step one cell outside the grid
/// before they are discarded, so coordinates are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x as i32, y as i32)
    }
}

/// Fixed-size grid of open and blocked cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    blocked: GridBits,
}

impl Grid {
    /// All-open grid of `cols × rows`.
    pub fn open(cols: usize, rows: usize) -> Result<Self, GameError> {
        if cols == 0 || rows == 0 {
            return Err(GameError::EmptyGrid);
        }
        Ok(Self {
            blocked: GridBits::new(rows, cols)?,
        })
    }

    /// Grid with the given `(x, y)` cells blocked.
    pub fn from_blocked<I>(cols: usize, rows: usize, cells: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::open(cols, rows)?;
        for (x, y) in cells {
            grid.blocked.set(y, x)?;
        }
        Ok(grid)
    }

    /// Random maze: `config.obstacles` uniformly drawn cells are blocked.
    /// Repeated draws land on the same cell, so fewer cells may end up
    /// blocked. Both start cells are cleared afterwards; nothing else about
    /// reachability is guaranteed.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut grid = Self::open(config.cols, config.rows)?;
        for _ in 0..config.obstacles {
            let x = rng.random_range(0..config.cols);
            let y = rng.random_range(0..config.rows);
            grid.blocked.set(y, x)?;
        }
        for (x, y) in [config.player_start(), config.opponent_start()] {
            grid.blocked.clear(y, x)?;
        }
        log::trace!("generated maze:\n{}", grid.blocked);
        Ok(grid)
    }

    pub fn cols(&self) -> usize {
        self.blocked.cols()
    }

    pub fn rows(&self) -> usize {
        self.blocked.rows()
    }

    /// Returns `true` if `pos` lies on the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols() && (pos.y as usize) < self.rows()
    }

    /// Returns `true` for an in-bounds blocked cell.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.in_bounds(pos)
            && self
                .blocked
                .get(pos.y as usize, pos.x as usize)
                .unwrap_or(false)
    }

    /// Returns `true` for an in-bounds open cell.
    pub fn is_open(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.is_blocked(pos)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.count_ones()
    }

    /// Blocked cells as `(x, y)`, row by row.
    pub fn blocked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.blocked.iter_set_bits().map(|(row, col)| (col, row))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid {{ {:?} }}", self.blocked)
    }
}
