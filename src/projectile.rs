//! Projectiles and their per-tick resolution.

use crate::{
    common::{Direction, Outcome, Role},
    grid::{Grid, Position},
    tank::Tank,
};

/// A shell in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub pos: Position,
    pub dir: Direction,
    pub owner: Role,
}

impl Projectile {
    /// Shell launched from `tank`'s cell along its facing.
    pub fn fired_by(tank: &Tank) -> Self {
        Self {
            pos: tank.pos(),
            dir: tank.facing(),
            owner: tank.role(),
        }
    }

    /// Move one cell along the stored direction.
    pub fn advance(&mut self) {
        self.pos = self.pos.step(self.dir);
    }
}

/// Why a projectile left play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Impact {
    OutOfBounds,
    Wall,
    /// Reached the cell of the tank with this role.
    Tank(Role),
}

/// Result of resolving a single projectile for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub impact: Option<Impact>,
    pub outcome: Option<Outcome>,
}

/// Advance `shot` by one cell and check it against the grid and both tanks.
///
/// A shell on the enemy's cell decides the game; a shell that runs into its
/// own tank is simply removed.
pub fn resolve(shot: &mut Projectile, grid: &Grid, player: &Tank, opponent: &Tank) -> Resolution {
    shot.advance();
    if !grid.in_bounds(shot.pos) {
        return Resolution {
            impact: Some(Impact::OutOfBounds),
            outcome: None,
        };
    }
    if grid.is_blocked(shot.pos) {
        return Resolution {
            impact: Some(Impact::Wall),
            outcome: None,
        };
    }
    let tank_of = |role: Role| match role {
        Role::Player => player,
        Role::Opponent => opponent,
    };
    let target = tank_of(shot.owner.opposite());
    if shot.pos == target.pos() {
        let outcome = match shot.owner {
            Role::Player => Outcome::Win,
            Role::Opponent => Outcome::Lose,
        };
        return Resolution {
            impact: Some(Impact::Tank(target.role())),
            outcome: Some(outcome),
        };
    }
    if shot.pos == tank_of(shot.owner).pos() {
        return Resolution {
            impact: Some(Impact::Tank(shot.owner)),
            outcome: None,
        };
    }
    Resolution {
        impact: None,
        outcome: None,
    }
}
