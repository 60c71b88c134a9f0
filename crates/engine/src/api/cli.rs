//! Command-line interface.
//!
//! ```text
//! sorzi [generate] [--lottery KEY] [--games N] [--picks K] [--format text|json]
//! sorzi list
//! ```
//!
//! Flags left unset fall back to the environment `Settings`.

use clap::{Args, Parser, Subcommand};
use sorzi_domain::{parse_games_count, LotteryKey};

use crate::infrastructure::settings::{OutputFormat, Settings};
use crate::use_cases::GenerationRequest;

#[derive(Parser, Debug)]
#[command(
    name = "sorzi",
    version,
    about = "Unbiased lottery game generator",
    after_help = "Environment: SORZI_LOTTERY, SORZI_GAMES, SORZI_PICKS, SORZI_FORMAT, RUST_LOG",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // bare flags, no subcommand
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a batch of games (the default)
    Generate(GenerateArgs),
    /// List the supported lotteries
    List,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Lottery to generate for (see `sorzi list`)
    #[arg(short, long, value_name = "KEY")]
    pub lottery: Option<LotteryKey>,

    /// Number of games to generate
    #[arg(short, long, value_name = "N", value_parser = parse_games_count)]
    pub games: Option<usize>,

    /// Numbers per game
    #[arg(short, long, value_name = "K", visible_alias = "dozens")]
    pub picks: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// The requested subcommand; bare flags mean `generate`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Generate(self.generate))
    }
}

impl GenerateArgs {
    /// Overlay the flags on `defaults`.
    pub fn resolve(&self, defaults: &Settings) -> (GenerationRequest, OutputFormat) {
        let request = GenerationRequest {
            lottery: self.lottery.unwrap_or(defaults.lottery),
            games_count: self.games.unwrap_or(defaults.games_count),
            pick_count: self.picks.or(defaults.pick_count),
        };
        (request, self.format.unwrap_or(defaults.format))
    }
}
