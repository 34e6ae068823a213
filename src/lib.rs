#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod common;
mod config;
mod game;
mod grid;
mod projectile;
mod tank;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player;
#[cfg(feature = "std")]
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
mod player_node;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use projectile::*;
pub use tank::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use player_node::*;
