#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    ai,
    common::Role,
    game::{FrameInput, Session, TickReport},
    player::{Command, InputSource},
    ui,
};

/// Drives the player tank with the same line-of-sight rule as the opponent:
/// turn toward a visible enemy and shoot, otherwise wander. Waits while its
/// own shell is in flight.
pub struct AutoPilot {
    rng: SmallRng,
    verbose: bool,
}

impl AutoPilot {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            verbose: false,
        }
    }

    /// Print the board after every frame.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Keys the autopilot holds for the current session state.
    pub fn choose(&mut self, session: &Session) -> FrameInput {
        if session.is_over() {
            return FrameInput::IDLE;
        }
        let own_shell_in_flight = session
            .projectiles()
            .iter()
            .any(|p| p.owner == Role::Player);
        if own_shell_in_flight {
            return FrameInput::IDLE;
        }
        let grid = session.grid();
        let me = session.player();
        if let Some(dir) = ai::line_of_sight(grid, me.pos(), session.opponent().pos()) {
            if me.facing() == dir {
                return FrameInput::firing();
            }
            return FrameInput::moving(dir);
        }
        match ai::random_step(grid, me, &mut self.rng) {
            Some(dir) => FrameInput::moving(dir),
            None => FrameInput::IDLE,
        }
    }
}

#[async_trait::async_trait]
impl InputSource for AutoPilot {
    async fn next_input(&mut self, session: &Session) -> anyhow::Result<Command> {
        Ok(Command::Frame(self.choose(session)))
    }

    fn handle_tick(&mut self, session: &Session, report: &TickReport) {
        if self.verbose && (report.turn_passed.is_some() || !report.removed.is_empty()) {
            println!("{}", ui::render(&session.snapshot()));
        }
    }
}
