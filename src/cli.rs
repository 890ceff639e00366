//! Defines the command-line interface for the application.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const FILE_FORMATS: &str = "\
The CSV files do not have headers.
NAMES_CSV has only a single column: the names of the players.
ROUND_CSV has three columns: player1,player2,winner.";

#[derive(Parser, Debug)]
#[command(
    name = "wfsports",
    version,
    about = "Generate and advance single-elimination tournament brackets.",
    after_help = FILE_FORMATS
)]
pub struct Cli {
    /// Directory to write round files and the HTML table to. [default: current directory]
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Shuffle players reproducibly from this seed.
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Pair players in the order they are listed instead of shuffling them.
    #[arg(long, global = true, conflicts_with = "seed")]
    pub keep_order: bool,

    /// Print the generated file to stdout instead of writing it.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the first pairings as round1.csv.
    Start {
        /// Roster of players, one name per line.
        #[arg(value_name = "NAMES_CSV")]
        file: PathBuf,
    },
    /// Generate the next pairings as round{N+1}.csv, or declare the winner.
    Next {
        /// Completed round file named round<N>.csv.
        #[arg(value_name = "ROUND_CSV")]
        file: PathBuf,
    },
    /// Write an HTML page displaying the pairings of a round as table.html.
    Show {
        /// Round file to display.
        #[arg(value_name = "ROUND_CSV")]
        file: PathBuf,
    },
}
