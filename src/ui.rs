#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    common::Direction,
    game::{Snapshot, TankView, TurnState},
    grid::Position,
};

/// Glyph for the player tank, pointing along its facing.
pub fn player_glyph(facing: Direction) -> char {
    match facing {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// Glyph for the opponent tank, pointing along its facing.
pub fn opponent_glyph(facing: Direction) -> char {
    match facing {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

fn at(view: &TankView, pos: Position) -> bool {
    view.pos == pos
}

/// Draw the board as text: `#` walls, `.` open cells, `*` shells, tanks by
/// facing. A game-over banner and the restart prompt follow the board.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let status = match snapshot.turn {
        TurnState::PlayerTurn => "Your turn",
        TurnState::OpponentTurn => "Opponent's turn",
        TurnState::GameOver(_) => "Game over",
    };
    let _ = writeln!(out, "Tick {:>4}  {}", snapshot.tick, status);
    for y in 0..snapshot.rows {
        for x in 0..snapshot.cols {
            let pos = Position::from((x, y));
            let ch = if at(&snapshot.player, pos) {
                player_glyph(snapshot.player.facing)
            } else if at(&snapshot.opponent, pos) {
                opponent_glyph(snapshot.opponent.facing)
            } else if snapshot.projectiles.iter().any(|p| p.pos == pos) {
                '*'
            } else if snapshot.blocked.contains(&(x, y)) {
                '#'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    if let TurnState::GameOver(outcome) = snapshot.turn {
        let _ = writeln!(out, "\n            {}", outcome.label());
        let _ = writeln!(out, "   [r] Restart    [q] Quit");
    }
    out
}
