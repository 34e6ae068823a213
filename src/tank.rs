//! Tank state and movement.

use crate::{
    common::{Direction, Role},
    grid::{Grid, Position},
};

/// A tank on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Tank {
    pos: Position,
    facing: Direction,
    role: Role,
}

impl Tank {
    /// New tank at `pos`, facing up.
    pub fn new(pos: Position, role: Role) -> Self {
        Self {
            pos,
            facing: Direction::Up,
            role,
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Turn to `dir` without moving.
    pub fn face(&mut self, dir: Direction) {
        self.facing = dir;
    }

    /// Try to move one cell along `(dx, dy)`. The tank always turns to face
    /// the attempted direction; its position changes only if the target cell
    /// is in bounds and open. Returns whether the tank actually moved.
    ///
    /// Deltas that are not a single cardinal step are ignored.
    pub fn move_by(&mut self, dx: i32, dy: i32, grid: &Grid) -> bool {
        match Direction::from_delta(dx, dy) {
            Some(dir) => self.step(dir, grid),
            None => false,
        }
    }

    /// Same as [`Tank::move_by`] with the step given as a direction.
    pub fn step(&mut self, dir: Direction, grid: &Grid) -> bool {
        self.facing = dir;
        let target = self.pos.step(dir);
        if grid.is_open(target) {
            self.pos = target;
            true
        } else {
            false
        }
    }
}
