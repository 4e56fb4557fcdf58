//! SmartSpin — command-line host.
//!
//! Loads configuration, initialises structured logging, and prints the
//! optimal wager for the luck level, bet colour and score given on the
//! command line.

use anyhow::{Context, Result};
use tracing::info;

use smartspin::config::AppConfig;
use smartspin::strategy::WagerCalculator;
use smartspin::types::{BetSide, SmartSpinError, WagerRequest};

const USAGE: &str = "usage: smartspin <luck> <green|orange> <score> [--config PATH] [--json]";

/// What the command line asked for.
#[derive(Debug)]
enum Command {
    Run(Args),
    Help,
}

/// Parsed command-line arguments.
#[derive(Debug)]
struct Args {
    request: WagerRequest,
    config_path: String,
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let args = match parse_args(std::env::args().skip(1))? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };
    let cfg = AppConfig::load_or_default(&args.config_path)?;

    init_logging(&cfg);

    info!(
        config = %args.config_path,
        score_ceiling = cfg.wager.score_ceiling,
        "SmartSpin starting up"
    );

    let calculator = WagerCalculator::new(cfg.wager_config());
    let rec = calculator.recommend(&args.request);

    if args.json {
        let json = serde_json::to_string_pretty(&rec)
            .context("Failed to serialise recommendation")?;
        println!("{json}");
    } else {
        println!("{rec}");
    }

    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut positional = Vec::new();
    let mut config_path = "config.toml".to_string();
    let mut json = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                config_path = iter.next().context("--config needs a path")?;
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => positional.push(arg),
        }
    }

    let [luck, side, score] = positional.as_slice() else {
        return Err(SmartSpinError::InvalidInput(format!(
            "expected 3 arguments, got {}\n{USAGE}",
            positional.len()
        ))
        .into());
    };

    let luck_level: i32 = luck
        .parse()
        .with_context(|| format!("Invalid luck level: {luck}"))?;
    let side: BetSide = side.parse()?;
    let score: i32 = score
        .parse()
        .with_context(|| format!("Invalid score: {score}"))?;

    Ok(Command::Run(Args {
        request: WagerRequest::new(luck_level, side, score),
        config_path,
        json,
    }))
}

/// Initialise the `tracing` subscriber.
fn init_logging(cfg: &AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.default_filter));

    let json_logging = std::env::var("SMARTSPIN_LOG_JSON").is_ok();

    // Logs go to stderr so --json output stays parseable.
    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
