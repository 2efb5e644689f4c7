//! Configuration for closure runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::edits::stream::DEFAULT_STREAM_BUFFER;
use crate::error::{FriendNetError, Result};

/// Default number of expansions between progress observations.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Whether the seed word belongs in the reported friend set.
///
/// Every word's self-substitutions reproduce the word, so a seed that is in
/// the dictionary always rediscovers itself on its first expansion. The seed
/// is expanded exactly once under every policy; the policy only decides
/// whether it is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPolicy {
    /// Never report the seed.
    #[default]
    Exclude,
    /// Report the seed only if some expansion reproduces it and it is a
    /// dictionary word.
    IncludeIfRediscovered,
    /// Always report the seed, even if it is not a dictionary word.
    AlwaysInclude,
}

/// Where candidate strings are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum GenerationMode {
    /// Build candidates lazily on the consuming thread.
    #[default]
    Inline,
    /// Build candidates on a worker thread per expanded word and stream them
    /// back over a bounded channel of the given capacity.
    Streamed { buffer: usize },
    /// Ask the lexicon for a word's neighbors directly, as a
    /// [`TrieLexicon`](crate::dictionary::TrieLexicon) can. Lexicons that
    /// cannot enumerate neighbors fall back to inline generation.
    TrieWalk,
}

impl GenerationMode {
    /// Streamed generation with the default channel capacity.
    pub fn streamed() -> Self {
        GenerationMode::Streamed {
            buffer: DEFAULT_STREAM_BUFFER,
        }
    }
}

/// Configuration for the closure engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureConfig {
    /// Letters used for substitutions and insertions.
    pub alphabet: Alphabet,

    /// Emit a progress observation every this many expansions.
    /// Zero disables progress observations.
    pub progress_interval: usize,

    /// Whether the seed is reported as a friend.
    pub seed_policy: SeedPolicy,

    /// Where candidates are generated.
    pub generation: GenerationMode,

    /// Worker count for the parallel engine.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,
}

impl Default for ClosureConfig {
    fn default() -> Self {
        ClosureConfig {
            alphabet: Alphabet::lowercase_ascii(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            seed_policy: SeedPolicy::default(),
            generation: GenerationMode::default(),
            threads: None,
        }
    }
}

impl ClosureConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: ClosureConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no engine can run with.
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(FriendNetError::config("threads must be at least 1"));
        }
        Ok(())
    }

    /// Set the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the progress interval.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Set the seed policy.
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    /// Set the generation mode.
    pub fn with_generation(mut self, generation: GenerationMode) -> Self {
        self.generation = generation;
        self
    }

    /// Set the parallel worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Whether an expansion count lands on a progress boundary.
    pub(crate) fn is_progress_tick(&self, expansions: usize) -> bool {
        self.progress_interval > 0 && expansions % self.progress_interval == 0
    }
}
