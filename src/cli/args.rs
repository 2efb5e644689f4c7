//! Command line argument parsing for the FriendNet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::closure::config::SeedPolicy;

/// FriendNet - explore the single-edit friend network of a word
#[derive(Parser, Debug, Clone)]
#[command(name = "friendnet")]
#[command(about = "Find every dictionary word reachable from a seed by single-character edits")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FriendNetArgs {
    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FriendNetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the friend closure of a seed word
    Closure(ClosureArgs),

    /// List the single-edit candidates of a word
    Edits(EditsArgs),

    /// Check whether two words are friends
    Check(CheckArgs),
}

/// Arguments for computing a closure
#[derive(Parser, Debug, Clone)]
pub struct ClosureArgs {
    /// Seed word
    #[arg(value_name = "SEED")]
    pub seed: String,

    /// Word list with one word per line
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Closure configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Letters used for substitutions and insertions
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Expansions between progress lines (0 disables them)
    #[arg(long)]
    pub progress_interval: Option<usize>,

    /// Whether the seed is reported as a friend
    #[arg(long)]
    pub seed_policy: Option<SeedPolicyArg>,

    /// Drop dictionary words spelled outside the alphabet
    #[arg(long)]
    pub restrict: bool,

    /// Expand several words at once on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel
    #[arg(short, long, requires = "parallel")]
    pub threads: Option<usize>,

    /// Generate candidates on a separate thread per word
    #[arg(long, conflicts_with = "trie")]
    pub streamed: bool,

    /// Find neighbors by walking a prefix tree of the dictionary
    #[arg(long)]
    pub trie: bool,

    /// Include the full list of friends in the report
    #[arg(short, long)]
    pub list: bool,
}

/// Arguments for listing candidates
#[derive(Parser, Debug, Clone)]
pub struct EditsArgs {
    /// Word to edit
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Letters used for substitutions and insertions
    #[arg(short, long)]
    pub alphabet: Option<String>,

    /// Only show distinct candidates found in this word list
    #[arg(short, long, value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,
}

/// Arguments for checking two words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// First word
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second word
    #[arg(value_name = "SECOND")]
    pub second: String,
}

/// Seed policies available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPolicyArg {
    /// Never report the seed
    Exclude,
    /// Report the seed if an expansion reproduces it
    Rediscovered,
    /// Always report the seed
    Always,
}

impl From<SeedPolicyArg> for SeedPolicy {
    fn from(arg: SeedPolicyArg) -> Self {
        match arg {
            SeedPolicyArg::Exclude => SeedPolicy::Exclude,
            SeedPolicyArg::Rediscovered => SeedPolicy::IncludeIfRediscovered,
            SeedPolicyArg::Always => SeedPolicy::AlwaysInclude,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// One value per line, for piping
    Plain,
}
