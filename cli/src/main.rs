use clap::Parser;
use janken_core::RoundEngine;
use std::io;

mod terminal;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the score of every finished session as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut engine = RoundEngine::from_seed(seed);
    let sessions = terminal::play(&mut engine, io::stdin().lock(), io::stdout().lock())?;
    log::info!("played {} session(s)", sessions.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
    }

    Ok(())
}
