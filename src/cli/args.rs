//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "soundseek")]
#[command(about = "Find the words in a text file that sound most like a given word")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log clustering decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the words in a .txt file phonetically closest to a word
    Find {
        /// Path to the text file
        file: PathBuf,

        /// The word to match
        word: String,

        /// Number of results
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Starting number of partitions
        #[arg(long)]
        initial_groups: Option<usize>,

        /// Minimum entries per partition
        #[arg(long)]
        min_group_size: Option<usize>,

        /// Lowest number of partitions to try
        #[arg(long)]
        min_groups: Option<usize>,

        /// Clustering seed
        #[arg(long)]
        seed: Option<u64>,

        /// Show codes and distances
        #[arg(short = 's', long)]
        show_codes: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the phonetic code of each word
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show or update saved settings
    Settings {
        /// Set default number of results
        #[arg(long)]
        set_top_k: Option<usize>,

        /// Set default starting number of partitions
        #[arg(long)]
        set_initial_groups: Option<usize>,

        /// Set default minimum entries per partition
        #[arg(long)]
        set_min_group_size: Option<usize>,

        /// Set default lowest number of partitions
        #[arg(long)]
        set_min_groups: Option<usize>,

        /// Set default index batch size
        #[arg(long)]
        set_batch_size: Option<usize>,

        /// Set default clustering seed
        #[arg(long)]
        set_seed: Option<u64>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable list
    Text,
    /// JSON array of matches
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
