#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tank_duel::{init_logging, AutoPilot, CliPlayer, GameConfig, InputSource, PlayerNode, Session};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Turn-based tank duel in a random maze", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Watch an autopilot play against the computer.
    Watch {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Stop after this many frames")]
        max_ticks: Option<u64>,
    },
}

#[derive(Args)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = tank_duel::GRID_COLS)]
    cols: usize,
    #[arg(long, default_value_t = tank_duel::GRID_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = tank_duel::OBSTACLE_COUNT, help = "Number of wall draws")]
    obstacles: usize,
    #[arg(long, default_value_t = tank_duel::TICK_RATE, help = "Frames per second")]
    tick_rate: u32,
    #[arg(long, default_value_t = tank_duel::TURN_DELAY_MS, help = "Pause after each turn")]
    turn_delay_ms: u64,
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            cols: self.cols,
            rows: self.rows,
            obstacles: self.obstacles,
            tick_rate: self.tick_rate,
            turn_delay_ms: self.turn_delay_ms,
        }
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game } => {
            let mut rng = game.rng();
            let session = new_session(&game, &mut rng)?;
            let mut node = PlayerNode::new(Box::new(CliPlayer::new()), session, rng);
            let summary = node.run(None).await?;
            println!("Thanks for playing ({} games).", summary.games);
        }
        Commands::Watch { game, max_ticks } => {
            let mut rng = game.rng();
            let session = new_session(&game, &mut rng)?;
            let pilot_rng = SmallRng::from_rng(&mut rng);
            let pilot: Box<dyn InputSource> = Box::new(AutoPilot::new(pilot_rng).verbose(true));
            let mut node = PlayerNode::new(pilot, session, rng).stop_on_game_over();
            let summary = node.run(max_ticks).await?;
            match summary.outcome {
                Some(outcome) => println!(
                    "{} after {} frames, {} turns, {} shots",
                    outcome, summary.ticks, summary.turns, summary.shots
                ),
                None => println!("No winner after {} frames", summary.total_ticks),
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn new_session(game: &GameArgs, rng: &mut SmallRng) -> anyhow::Result<Session> {
    Session::new(game.config(), rng).map_err(|e| anyhow::anyhow!("invalid game setup: {}", e))
}
