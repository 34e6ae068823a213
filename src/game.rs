use alloc::vec::Vec;

use crate::{
    ai::{self, OpponentAction},
    common::{Direction, GameError, Outcome, Role},
    config::GameConfig,
    grid::{Grid, Position},
    projectile::{self, Impact, Projectile},
    tank::Tank,
};
use rand::Rng;

/// Whose move it is, or whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    PlayerTurn,
    OpponentTurn,
    GameOver(Outcome),
}

/// Keys held during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub restart: bool,
}

impl FrameInput {
    /// No keys held.
    pub const IDLE: FrameInput = FrameInput {
        left: false,
        right: false,
        up: false,
        down: false,
        fire: false,
        restart: false,
    };

    /// A single movement key.
    pub fn moving(dir: Direction) -> Self {
        let mut input = Self::IDLE;
        match dir {
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
        }
        input
    }

    /// Only the fire key.
    pub fn firing() -> Self {
        Self {
            fire: true,
            ..Self::IDLE
        }
    }

    /// Only the restart action.
    pub fn restarting() -> Self {
        Self {
            restart: true,
            ..Self::IDLE
        }
    }

    /// Held movement keys in the order they are applied.
    pub fn moves(&self) -> impl Iterator<Item = Direction> {
        [
            (self.left, Direction::Left),
            (self.right, Direction::Right),
            (self.up, Direction::Up),
            (self.down, Direction::Down),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }
}

/// A projectile that left play during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Removal {
    pub projectile: Projectile,
    pub impact: Impact,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Control passed to the other side; the front-end pauses after this.
    pub turn_passed: Option<Role>,
    /// The opponent's decision, when it acted this tick.
    pub opponent_action: Option<OpponentAction>,
    pub fired: Vec<Projectile>,
    pub removed: Vec<Removal>,
    /// Set on the tick the game ended.
    pub finished: Option<Outcome>,
    /// The session was reinitialized.
    pub restarted: bool,
}

/// Read-only view of a session for rendering and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub cols: usize,
    pub rows: usize,
    pub blocked: Vec<(usize, usize)>,
    pub player: TankView,
    pub opponent: TankView,
    pub projectiles: Vec<Projectile>,
    pub turn: TurnState,
    pub tick: u64,
}

/// Tank as shown to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TankView {
    pub pos: Position,
    pub facing: Direction,
    pub rotation: u16,
}

impl From<&Tank> for TankView {
    fn from(tank: &Tank) -> Self {
        Self {
            pos: tank.pos(),
            facing: tank.facing(),
            rotation: tank.facing().rotation(),
        }
    }
}

/// One game: the maze, both tanks, shells in flight and the turn state.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    player: Tank,
    opponent: Tank,
    projectiles: Vec<Projectile>,
    turn: TurnState,
    tick: u64,
    turns: u64,
    shots: u64,
}

impl Session {
    /// Start a game on a freshly generated maze.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::generate(&config, rng)?;
        Self::with_grid(config, grid)
    }

    /// Start a game on a fixed maze. The maze must match the configured size
    /// and leave both start cells open.
    pub fn with_grid(config: GameConfig, grid: Grid) -> Result<Self, GameError> {
        config.validate()?;
        if grid.cols() != config.cols || grid.rows() != config.rows {
            return Err(GameError::GridMismatch {
                cols: grid.cols(),
                rows: grid.rows(),
            });
        }
        for start in [config.player_start(), config.opponent_start()] {
            if grid.is_blocked(Position::from(start)) {
                return Err(GameError::StartBlocked {
                    x: start.0,
                    y: start.1,
                });
            }
        }
        Ok(Self {
            config,
            grid,
            player: Tank::new(Position::from(config.player_start()), Role::Player),
            opponent: Tank::new(Position::from(config.opponent_start()), Role::Opponent),
            projectiles: Vec::new(),
            turn: TurnState::PlayerTurn,
            tick: 0,
            turns: 0,
            shots: 0,
        })
    }

    /// Reinitialize with a new maze, tanks on their start cells, no shells,
    /// player to move.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let grid = Grid::generate(&self.config, rng)?;
        *self = Self::with_grid(self.config, grid)?;
        log::info!("new game started");
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Tank {
        &self.player
    }

    pub fn opponent(&self) -> &Tank {
        &self.opponent
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Ticks simulated since the game started.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Completed turns, player and opponent counted separately.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Shells fired by either side.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Place a tank directly, e.g. to set up a scenario. Positions outside
    /// the grid or on a blocked cell are ignored.
    pub fn place_tank(&mut self, role: Role, pos: Position, facing: Direction) -> bool {
        if !self.grid.is_open(pos) {
            return false;
        }
        let mut tank = Tank::new(pos, role);
        tank.face(facing);
        match role {
            Role::Player => self.player = tank,
            Role::Opponent => self.opponent = tank,
        }
        true
    }

    /// Launch a shell from `role`'s tank along its facing.
    pub fn fire(&mut self, role: Role) -> Projectile {
        let shot = match role {
            Role::Player => Projectile::fired_by(&self.player),
            Role::Opponent => Projectile::fired_by(&self.opponent),
        };
        self.projectiles.push(shot);
        self.shots += 1;
        log::trace!("{:?} fired {:?} from ({}, {})", role, shot.dir, shot.pos.x, shot.pos.y);
        shot
    }

    /// Run one frame: the active side's turn step, then projectile
    /// resolution. Once the game is over only `input.restart` is honoured.
    pub fn tick<R: Rng + ?Sized>(&mut self, input: &FrameInput, rng: &mut R) -> TickReport {
        let mut report = TickReport::default();
        match self.turn {
            TurnState::GameOver(_) => {
                if input.restart {
                    match self.restart(rng) {
                        Ok(()) => report.restarted = true,
                        Err(e) => log::error!("restart failed: {}", e),
                    }
                }
                return report;
            }
            TurnState::PlayerTurn => self.player_step(input, &mut report),
            TurnState::OpponentTurn => self.opponent_step(rng, &mut report),
        }
        self.tick += 1;
        self.resolve_projectiles(&mut report);
        report
    }

    fn player_step(&mut self, input: &FrameInput, report: &mut TickReport) {
        let mut moved = false;
        for dir in input.moves() {
            self.player.step(dir, &self.grid);
            moved = true;
        }
        if input.fire {
            let shot = self.fire(Role::Player);
            report.fired.push(shot);
        }
        if moved {
            self.pass_turn(Role::Opponent, report);
        }
    }

    fn opponent_step<R: Rng + ?Sized>(&mut self, rng: &mut R, report: &mut TickReport) {
        let action = ai::plan_turn(&self.grid, &mut self.opponent, &self.player, rng);
        match action {
            OpponentAction::Fire(_) => {
                let shot = self.fire(Role::Opponent);
                report.fired.push(shot);
            }
            OpponentAction::Move(dir) => {
                self.opponent.step(dir, &self.grid);
            }
            OpponentAction::Idle => log::debug!("opponent is boxed in"),
        }
        report.opponent_action = Some(action);
        self.pass_turn(Role::Player, report);
    }

    fn pass_turn(&mut self, to: Role, report: &mut TickReport) {
        self.turn = match to {
            Role::Player => TurnState::PlayerTurn,
            Role::Opponent => TurnState::OpponentTurn,
        };
        self.turns += 1;
        report.turn_passed = Some(to);
        log::debug!("turn {} passes to {:?}", self.turns, to);
    }

    /// Advance every shell one cell in creation order. Every hit in the tick
    /// is applied, so the last one decides the outcome.
    fn resolve_projectiles(&mut self, report: &mut TickReport) {
        let mut finished = None;
        let (grid, player, opponent) = (&self.grid, &self.player, &self.opponent);
        self.projectiles.retain_mut(|shot| {
            let res = projectile::resolve(shot, grid, player, opponent);
            if let Some(outcome) = res.outcome {
                finished = Some(outcome);
            }
            match res.impact {
                Some(impact) => {
                    log::trace!("{:?} shell removed: {:?}", shot.owner, impact);
                    report.removed.push(Removal {
                        projectile: *shot,
                        impact,
                    });
                    false
                }
                None => true,
            }
        });
        if let Some(outcome) = finished {
            self.turn = TurnState::GameOver(outcome);
            report.finished = Some(outcome);
            log::info!("game over after {} ticks: {}", self.tick, outcome);
        }
    }

    /// Render-ready view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cols: self.grid.cols(),
            rows: self.grid.rows(),
            blocked: self.grid.blocked_cells().collect(),
            player: TankView::from(&self.player),
            opponent: TankView::from(&self.opponent),
            projectiles: self.projectiles.clone(),
            turn: self.turn,
            tick: self.tick,
        }
    }
}
