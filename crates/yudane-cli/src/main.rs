//! CLI frontend for the YUDANE oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::ShrineArgs;

#[derive(Parser)]
#[command(
    name = "yudane",
    about = "YUDANE — hand today over to the oracle",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory for persisted records (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <config dir>/yudane/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    today: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform today's ritual and reveal the oracle
    Draw,

    /// Show today's oracle, if already revealed
    Today,

    /// Show the believer record
    Status,

    /// Time until the next ritual
    Countdown,
}

/// Initialize tracing on stderr so stdout only carries shrine output.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "yudane_core=debug,yudane=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let args = ShrineArgs {
        data_dir: cli.data_dir,
        config: cli.config,
        seed: cli.seed,
        today: cli.today,
    };

    let result = match cli.command {
        Commands::Draw => commands::draw::run(&args),
        Commands::Today => commands::today::run(&args),
        Commands::Status => commands::status::run(&args),
        Commands::Countdown => commands::countdown::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
