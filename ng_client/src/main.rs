//! A terminal guess-the-number game.
//!
//! Resolves the range and attempt ceiling from the command line, then runs
//! one interactive session on stdin/stdout.

use anyhow::Result;
use ctrlc::set_handler;
use log::{debug, info};
use number_guess::{ConfigResult, Difficulty, GameConfig, GuessGame, resolve_preset};
use pico_args::Arguments;
use std::io;

use ng_client::shell::{self, Ending};

const HELP: &str = "\
Play a small guess-the-number game in your terminal

USAGE:
  ng_client [OPTIONS]

OPTIONS:
  -d, --difficulty LEVEL   easy (1-10), medium (1-100), hard (1-1000)  [default: env NG_DIFFICULTY or medium]
  --low N                  Override lower bound for the secret number (must be < high)
  --high N                 Override upper bound for the secret number (must be > low)
  --max-attempts N         Override maximum number of attempts (must be positive)
  --seed N                 Set RNG seed (useful for testing)  [default: env NG_SEED]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  NG_DIFFICULTY            Default difficulty when --difficulty is absent
  NG_SEED                  Default seed when --seed is absent
  RUST_LOG                 Log filter (e.g. debug)
";

struct Args {
    difficulty: Difficulty,
    low: Option<i64>,
    high: Option<i64>,
    max_attempts: Option<i64>,
    seed: Option<u64>,
}

/// Parse flags, falling back to `env` for values the command line leaves out.
fn parse_args(
    mut pargs: Arguments,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Args, pico_args::Error> {
    let args = Args {
        difficulty: match pargs.opt_value_from_str(["-d", "--difficulty"])? {
            Some(difficulty) => difficulty,
            None => env("NG_DIFFICULTY")
                .map(|label| Difficulty::from_label(label.trim()))
                .unwrap_or_default(),
        },
        low: pargs.opt_value_from_str("--low")?,
        high: pargs.opt_value_from_str("--high")?,
        max_attempts: pargs.opt_value_from_str("--max-attempts")?,
        seed: match pargs.opt_value_from_str("--seed")? {
            Some(seed) => Some(seed),
            None => env("NG_SEED")
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .map_err(|e| pico_args::Error::ArgumentParsingFailed {
                            cause: format!("invalid NG_SEED '{v}': {e}"),
                        })
                })
                .transpose()?,
        },
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(args)
}

fn resolve_args(args: &Args) -> ConfigResult<GameConfig> {
    resolve_preset(args.difficulty, args.low, args.high, args.max_attempts)
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    env_logger::builder().format_target(false).init();

    let args = match parse_args(pargs, |key| std::env::var(key).ok()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    // Catching signals for exit.
    set_handler(|| {
        println!("\nInterrupted, exiting game.");
        std::process::exit(0);
    })?;

    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = match resolve_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {e}");
            return Ok(());
        }
    };

    let mut game = match args.seed {
        Some(seed) => {
            debug!("using seed {seed}");
            GuessGame::with_seed(config, seed)
        }
        None => GuessGame::new(config),
    };

    let stdout = io::stdout();
    shell::write_banner(&game, args.difficulty, &mut stdout.lock())?;

    let ending = shell::play(&mut game, io::stdin().lock(), stdout.lock())?;
    match ending {
        Ending::Won { attempts } => info!("player won in {attempts} attempts"),
        Ending::Lost { secret } => info!("player lost, secret was {secret}"),
        Ending::Quit => info!("player quit after {} attempts", game.attempts()),
    }

    Ok(())
}
