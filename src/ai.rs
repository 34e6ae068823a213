// Opponent heuristic: shoot along a clear row or column, otherwise wander.
// Uses no_std and avoids heap allocations.

use crate::{
    common::Direction,
    grid::{Grid, Position},
    tank::Tank,
};
use rand::{seq::SliceRandom, Rng};

/// What the opponent did with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum OpponentAction {
    /// Turned toward the target and fired.
    Fire(Direction),
    /// Stepped one cell.
    Move(Direction),
    /// Boxed in on all four sides.
    Idle,
}

/// Direction from `from` to `to` if both cells share a row or column with no
/// blocked cell strictly between them.
///
/// When both cells coincide the row check matches first and yields `Right`.
pub fn line_of_sight(grid: &Grid, from: Position, to: Position) -> Option<Direction> {
    if from.y == to.y {
        let (lo, hi) = (from.x.min(to.x), from.x.max(to.x));
        if (lo + 1..hi).any(|x| grid.is_blocked(Position::new(x, from.y))) {
            return None;
        }
        return Some(if from.x > to.x {
            Direction::Left
        } else {
            Direction::Right
        });
    }
    if from.x == to.x {
        let (lo, hi) = (from.y.min(to.y), from.y.max(to.y));
        if (lo + 1..hi).any(|y| grid.is_blocked(Position::new(from.x, y))) {
            return None;
        }
        return Some(if from.y > to.y {
            Direction::Up
        } else {
            Direction::Down
        });
    }
    None
}

/// Check whether `shooter` can see `target`, turning `shooter` toward it if so.
pub fn can_see(grid: &Grid, shooter: &mut Tank, target: &Tank) -> bool {
    match line_of_sight(grid, shooter.pos(), target.pos()) {
        Some(dir) => {
            shooter.face(dir);
            true
        }
        None => false,
    }
}

/// Pick one open neighbouring cell in random order, or `None` if boxed in.
pub fn random_step<R: Rng + ?Sized>(grid: &Grid, tank: &Tank, rng: &mut R) -> Option<Direction> {
    let mut dirs = Direction::ALL;
    dirs.shuffle(rng);
    dirs.into_iter()
        .find(|&dir| grid.is_open(tank.pos().step(dir)))
}

/// Decide one turn for `shooter`. The caller applies the action: spawning a
/// shell for `Fire` and stepping for `Move`. Facing is already updated for
/// `Fire`.
pub fn plan_turn<R: Rng + ?Sized>(
    grid: &Grid,
    shooter: &mut Tank,
    target: &Tank,
    rng: &mut R,
) -> OpponentAction {
    if can_see(grid, shooter, target) {
        return OpponentAction::Fire(shooter.facing());
    }
    match random_step(grid, shooter, rng) {
        Some(dir) => OpponentAction::Move(dir),
        None => OpponentAction::Idle,
    }
}
