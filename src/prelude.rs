//! Commonly used types and utilities for ease of import.

pub use crate::{
    Direction, FrameInput, GameConfig, GameError, Grid, Outcome, Position, Projectile, Role,
    Session, Tank, TurnState,
};

#[cfg(feature = "std")]
pub use crate::{AutoPilot, CliPlayer, Command, InputSource, PlayerNode, RunSummary, ScriptedInput};
