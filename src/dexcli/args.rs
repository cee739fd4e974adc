use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dexcli")]
#[command(about = "Console Pokedex: look Pokemon up by name or number", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset CSV to load (overrides the configured path)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Cap on records imported from the dataset
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// Abort the load on the first malformed row
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look a Pokemon up by name (case-insensitive)
    #[command(alias = "n")]
    Name {
        /// Name to search for
        query: String,

        /// Emit the record as JSON instead of the info block
        #[arg(long)]
        json: bool,
    },

    /// Look a Pokemon up by Pokedex ID
    #[command(alias = "i")]
    Id {
        /// ID to search for
        query: String,

        /// Emit the record as JSON instead of the info block
        #[arg(long)]
        json: bool,
    },

    /// List every loaded Pokemon
    #[command(alias = "ls")]
    List {
        /// Emit the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (dataset, capacity, strict)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
