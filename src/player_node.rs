#![cfg(feature = "std")]

use rand::rngs::SmallRng;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{
    common::Outcome,
    game::Session,
    player::{Command, InputSource},
};

/// Totals for one run of the frame loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    /// Result of the last game, if it finished.
    pub outcome: Option<Outcome>,
    /// Frames simulated in the last game.
    pub ticks: u64,
    /// Frames simulated across all games.
    pub total_ticks: u64,
    /// Turns completed in the last game.
    pub turns: u64,
    /// Shells fired in the last game.
    pub shots: u64,
    /// Games started, restarts included.
    pub games: u64,
}

/// Frame loop tying an input source to a session.
pub struct PlayerNode {
    input: Box<dyn InputSource>,
    session: Session,
    rng: SmallRng,
    paced: bool,
    stop_on_game_over: bool,
}

impl PlayerNode {
    pub fn new(input: Box<dyn InputSource>, session: Session, rng: SmallRng) -> Self {
        Self {
            input,
            session,
            rng,
            paced: true,
            stop_on_game_over: false,
        }
    }

    /// Run frames as fast as possible, skipping the frame rate and turn delay.
    pub fn unpaced(mut self) -> Self {
        self.paced = false;
        self
    }

    /// Return as soon as a game ends instead of waiting for a restart.
    pub fn stop_on_game_over(mut self) -> Self {
        self.stop_on_game_over = true;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Drive the session until the input source quits, the game ends (if
    /// `stop_on_game_over`), or `max_ticks` frames have run.
    pub async fn run(&mut self, max_ticks: Option<u64>) -> anyhow::Result<RunSummary> {
        let config = *self.session.config();
        let mut frame = self.paced.then(|| {
            let mut frame = time::interval(Duration::from_millis(config.tick_millis()));
            frame.set_missed_tick_behavior(MissedTickBehavior::Delay);
            frame
        });
        let turn_delay = Duration::from_millis(config.turn_delay_ms);

        let mut summary = RunSummary {
            games: 1,
            ..RunSummary::default()
        };
        log::info!(
            "game started on a {}x{} grid with {} walls",
            config.cols,
            config.rows,
            self.session.grid().blocked_count()
        );
        loop {
            if max_ticks.is_some_and(|max| summary.total_ticks >= max) {
                log::info!("stopping after {} frames", summary.total_ticks);
                break;
            }
            if let Some(frame) = frame.as_mut() {
                frame.tick().await;
            }
            let input = match self.input.next_input(&self.session).await? {
                Command::Frame(input) => input,
                Command::Quit => break,
            };
            let report = self.session.tick(&input, &mut self.rng);
            summary.total_ticks += 1;
            if report.restarted {
                summary.games += 1;
            }
            self.input.handle_tick(&self.session, &report);

            if report.finished.is_some() && self.stop_on_game_over {
                break;
            }
            if report.turn_passed.is_some() && self.paced && !turn_delay.is_zero() {
                time::sleep(turn_delay).await;
            }
        }
        summary.outcome = self.session.outcome();
        summary.ticks = self.session.ticks();
        summary.turns = self.session.turns();
        summary.shots = self.session.shots();
        Ok(summary)
    }
}
