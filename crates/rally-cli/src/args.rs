use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FinalizeArgs, JoinArgs, SuggestArgs};

/// Main command-line interface for the Rally trip coordination tool
///
/// Rally collects one response per participant — availability dates,
/// excluded dates, trip length, head count, budget, and destination
/// picks — and computes the dates everyone can make, the destination
/// popularity ranking, and a day-by-day itinerary for the group.
#[derive(Parser)]
#[command(version, about, name = "rally")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/rally/rally.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Rally CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Record one participant's trip response
    #[command(alias = "j")]
    Join(JoinArgs),
    /// List all recorded responses
    #[command(alias = "ls")]
    List,
    /// Show the dates everyone can make
    #[command(alias = "w")]
    Window,
    /// Show the destination popularity ranking
    #[command(alias = "t")]
    Tally,
    /// Generate destination suggestions for one participant
    Suggest(SuggestArgs),
    /// Compute the group plan and write the shareable itinerary
    #[command(alias = "f")]
    Finalize(FinalizeArgs),
}
