pub mod countdown;
pub mod draw;
pub mod status;
pub mod today;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use colored::{ColoredString, Colorize};

use yudane_core::clock::{format_countdown, parse_date};
use yudane_core::{
    Clock, FileStore, FixedClock, Rarity, RitualRecord, Shrine, SystemClock, YudaneConfig,
};

/// Options shared by every subcommand.
pub struct ShrineArgs {
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub today: Option<String>,
}

/// The wall clock, or a pinned day from `--today`.
pub enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            Self::System(clock) => clock.now(),
            Self::Fixed(clock) => clock.now(),
        }
    }
}

pub type CliShrine = Shrine<FileStore, CliClock>;

/// Resolve config and flags, then open the shrine.
fn open_shrine(args: &ShrineArgs) -> Result<CliShrine, String> {
    let config_path = args.config.clone().or_else(YudaneConfig::default_path);
    let mut config = match config_path {
        Some(path) => YudaneConfig::load(&path).map_err(|e| e.to_string())?,
        None => YudaneConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir.clone());
    }

    let clock = match &args.today {
        Some(day) => CliClock::Fixed(FixedClock::on(parse_date(day).map_err(|e| e.to_string())?)),
        None => CliClock::System(SystemClock),
    };

    let data_dir = config.resolve_data_dir().map_err(|e| e.to_string())?;
    tracing::debug!(data_dir = %data_dir.display(), "opening shrine");

    Shrine::open(FileStore::new(data_dir), clock, &config)
        .map_err(|e| format!("failed to open shrine: {e}"))
}

/// Color text by tier.
fn paint(rarity: Rarity, text: &str) -> ColoredString {
    match rarity {
        Rarity::Normal => text.normal(),
        Rarity::Rare => text.cyan(),
        Rarity::SuperRare => text.magenta().bold(),
        Rarity::SuperSuperRare => text.yellow().bold(),
    }
}

/// Print an oracle with its tier badge.
fn print_oracle(record: &RitualRecord) {
    let badge = format!("{} {}", record.rarity.label(), record.rarity.code());
    println!("  {}  {}", paint(record.rarity, &badge), record.date.to_string().dimmed());
    println!();
    for line in record.message.lines() {
        println!("  {}", paint(record.rarity, line));
    }
    println!();
}

/// Print the time until the seal breaks.
fn print_countdown(shrine: &CliShrine) {
    println!(
        "  Next oracle in {}",
        format_countdown(shrine.countdown()).bold()
    );
}
