#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::{
    game::{FrameInput, Session, TickReport, TurnState},
    player::{Command, InputSource},
    ui,
};

/// Help line shown with each prompt.
pub const KEY_HELP: &str = "keys: a/d/w/s or h/l/k/j move, f or space fire, r restart, q quit, enter waits";

/// Translate one line of input into the keys held for a frame. Several keys
/// may be combined, e.g. `df` moves right then fires.
pub fn parse_keys(input: &str) -> Result<Command, String> {
    let mut frame = FrameInput::IDLE;
    for ch in input.trim_end_matches(['\r', '\n']).chars() {
        match ch.to_ascii_lowercase() {
            'a' | 'h' => frame.left = true,
            'd' | 'l' => frame.right = true,
            'w' | 'k' => frame.up = true,
            's' | 'j' => frame.down = true,
            'f' | ' ' => frame.fire = true,
            'r' => frame.restart = true,
            'q' => return Ok(Command::Quit),
            other => return Err(format!("Unknown key '{}'", other)),
        }
    }
    Ok(Command::Frame(frame))
}

/// Interactive player reading one frame of keys per line from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputSource for CliPlayer {
    async fn next_input(&mut self, session: &Session) -> anyhow::Result<Command> {
        // The opponent and flying shells need no keys; let them play out.
        if session.turn() == TurnState::OpponentTurn
            || (!session.is_over() && !session.projectiles().is_empty())
        {
            return Ok(Command::Frame(FrameInput::IDLE));
        }
        std::println!("{}", ui::render(&session.snapshot()));
        loop {
            std::print!("{}\n> ", KEY_HELP);
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }
            match parse_keys(&line) {
                Ok(cmd) => return Ok(cmd),
                Err(e) => std::println!("Invalid input: {}", e),
            }
        }
    }

    fn handle_tick(&mut self, session: &Session, report: &TickReport) {
        if !session.projectiles().is_empty() {
            std::println!("{}", ui::render(&session.snapshot()));
        }
        if let Some(outcome) = report.finished {
            std::println!("Game over: {}", outcome);
        }
        if report.restarted {
            std::println!("New maze generated.");
        }
    }
}
