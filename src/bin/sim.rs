use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tank_duel::{AutoPilot, GameConfig, PlayerNode, Session};

/// Frames after which an undecided game is called a draw.
const DEFAULT_MAX_TICKS: u64 = 5_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tank_duel::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [max_ticks]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let max_ticks: u64 = match args.get(2) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_MAX_TICKS,
    };

    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let pilot_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let session = Session::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let walls = session.grid().blocked_count();

    let mut node = PlayerNode::new(Box::new(AutoPilot::new(pilot_rng)), session, rng)
        .unpaced()
        .stop_on_game_over();
    let summary = node.run(Some(max_ticks)).await?;

    let result = json!({
        "seed": seed,
        "config": config,
        "walls": walls,
        "outcome": summary.outcome.map(|o| o.label()),
        "ticks": summary.ticks,
        "turns": summary.turns,
        "shots": summary.shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
