use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::types::Stage;

/// bedtime-stories - Personalised bedtime stories
#[derive(Parser)]
#[command(name = "bedtime-stories")]
#[command(about = "Compose a short personalised bedtime story from a child's name and interests")]
#[command(version)]
pub struct Cli {
    /// Seed the random source so the same input gives the same story
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print stories as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tell a story (asks interactively when no name or profile is given)
    Tell {
        /// Child's name
        #[arg(short, long)]
        name: Option<String>,
        /// Interests (comma-separated)
        #[arg(short, long)]
        interests: Option<String>,
        /// Language code (nl or en, default nl)
        #[arg(short, long)]
        language: Option<String>,
        /// Read name, interests and language from a profile file
        #[arg(short, long, conflicts_with_all = ["name", "interests", "language"])]
        profile: Option<PathBuf>,
        /// Number of stories to tell
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
    /// Manage child profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Show the sentence templates for a language
    Templates {
        /// Language code (nl or en, default nl)
        #[arg(short, long)]
        language: Option<String>,
        /// Only show one stage (introduction, adventure, theme, ending)
        #[arg(short, long)]
        stage: Option<Stage>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Save a child profile to a JSON file
    Save {
        /// Child's name
        #[arg(short, long)]
        name: String,
        /// Interests (comma-separated)
        #[arg(short, long)]
        interests: Option<String>,
        /// Language code (nl or en, default nl)
        #[arg(short, long)]
        language: Option<String>,
        /// Where to write the profile
        path: PathBuf,
    },
    /// Print a saved profile
    Show {
        /// Profile file
        path: PathBuf,
    },
    /// Validate a saved profile
    Validate {
        /// Profile file
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
