//! Play a batch of simulated pyramid rummy games and report the results.
//!
//! ```text
//! simulate --games 100 --p1 sampling --p2 reflex --parallel
//! ```

use std::error::Error;
use std::time::Instant;

use clap::Parser;
use pyramid_rummy::arena::{AgentKind, MatchConfig, MatchRunner};
use pyramid_rummy::core::{PlayerId, SamplingConfig};

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play pyramid rummy agents against each other")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// Batch seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Agent for the first seat
    #[arg(long, value_enum, default_value_t = AgentKind::Sampling)]
    p1: AgentKind,

    /// Agent for the second seat
    #[arg(long, value_enum, default_value_t = AgentKind::Sampling)]
    p2: AgentKind,

    /// Sampled completions per decision
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,

    /// Simulated draws per completion
    #[arg(long, default_value_t = 20)]
    draw_iterations: usize,

    /// Fixed opening orientation (0-5) for sampling agents
    #[arg(long)]
    orientation: Option<u8>,

    /// Moves after which a game counts as stalled
    #[arg(long, default_value_t = 200)]
    max_moves: usize,

    /// Run games on all cores
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Print the tally as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Args {
    fn match_config(&self) -> MatchConfig {
        let mut sampling = SamplingConfig::default()
            .with_iterations(self.iterations)
            .with_draw_iterations(self.draw_iterations);
        if let Some(orientation) = self.orientation {
            sampling = sampling.with_orientation(orientation);
        }

        MatchConfig::new()
            .with_games(self.games)
            .with_seed(self.seed)
            .with_max_moves(self.max_moves)
            .with_parallel(self.parallel)
            .with_agent(PlayerId::ONE, self.p1)
            .with_agent(PlayerId::TWO, self.p2)
            .with_sampling(sampling)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.match_config();

    log::info!(
        "{} games, {} vs {}, seed {}",
        config.games,
        config.agents[PlayerId::ONE],
        config.agents[PlayerId::TWO],
        config.seed
    );

    let start = Instant::now();
    let stats = MatchRunner::from_config(&config).run_batch(&config)?;
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
        println!("{:.2}s", elapsed.as_secs_f64());
    }
    Ok(())
}
