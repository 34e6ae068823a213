#![cfg(feature = "std")]

use std::collections::VecDeque;

use crate::game::{FrameInput, Session, TickReport};

/// What an input source wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run one frame with these keys held.
    Frame(FrameInput),
    /// Leave the game.
    Quit,
}

/// Interface implemented by the different ways of driving the player tank.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Keys for the next frame, given the current session.
    async fn next_input(&mut self, session: &Session) -> anyhow::Result<Command>;

    /// Inform the source of what the last frame did.
    fn handle_tick(&mut self, _session: &Session, _report: &TickReport) {}
}

/// Replays a fixed list of frames, then quits.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = FrameInput>>(frames: I) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_input(&mut self, _session: &Session) -> anyhow::Result<Command> {
        Ok(match self.frames.pop_front() {
            Some(frame) => Command::Frame(frame),
            None => Command::Quit,
        })
    }
}
