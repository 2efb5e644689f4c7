//! Breadth-first closure over the single-edit friend graph.
//!
//! The graph is implicit: nodes are dictionary words and edges join words one
//! edit apart. [`ClosureEngine`] explores it from a seed with a single
//! consumer draining an unbounded FIFO queue. Every newly discovered word is
//! inserted into the friend set before it is enqueued, so each word is
//! expanded at most once and the run terminates once the queue drains.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::closure::config::{ClosureConfig, GenerationMode, SeedPolicy};
use crate::closure::progress::{LogProgress, Progress, ProgressObserver};
use crate::dictionary::Lexicon;
use crate::edits::generator::{Edit, SingleEdits, single_edits};
use crate::edits::stream::CandidateStream;

/// Counters collected during one closure run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureStats {
    /// Words taken off the queue and expanded, seed included.
    pub expansions: usize,
    /// Candidates produced by the edit generator. Under
    /// [`GenerationMode::TrieWalk`] this is the number of neighbors the
    /// lexicon returned.
    pub candidates: usize,
    /// Candidates found in the dictionary.
    pub dictionary_hits: usize,
    /// Dictionary hits that had already been discovered.
    pub rediscovered: usize,
    /// Deepest the work queue got.
    pub max_queue_depth: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

/// The result of a closure run.
#[derive(Debug, Clone)]
pub struct ClosureOutcome {
    /// Every friend discovered, subject to the seed policy.
    pub friends: AHashSet<String>,
    /// Run counters.
    pub stats: ClosureStats,
}

impl ClosureOutcome {
    /// Number of friends.
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// Whether no friends were found.
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Whether `word` was discovered.
    pub fn contains(&self, word: &str) -> bool {
        self.friends.contains(word)
    }

    /// Friends in lexicographic order.
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.friends.iter().cloned().collect();
        words.sort_unstable();
        words
    }
}

/// Candidate source for one expansion.
enum Candidates {
    Inline(SingleEdits),
    Streamed(CandidateStream),
}

impl Candidates {
    fn for_word(word: &str, config: &ClosureConfig) -> Self {
        match config.generation {
            GenerationMode::Inline | GenerationMode::TrieWalk => {
                Candidates::Inline(single_edits(word, &config.alphabet))
            }
            GenerationMode::Streamed { buffer } => {
                match CandidateStream::spawn(word, &config.alphabet, buffer) {
                    Ok(stream) => Candidates::Streamed(stream),
                    Err(e) => {
                        log::warn!("{e}; generating candidates for '{word}' inline");
                        Candidates::Inline(single_edits(word, &config.alphabet))
                    }
                }
            }
        }
    }
}

impl Iterator for Candidates {
    type Item = Edit;

    fn next(&mut self) -> Option<Edit> {
        match self {
            Candidates::Inline(edits) => edits.next(),
            Candidates::Streamed(stream) => stream.next(),
        }
    }
}

/// The dictionary words found while expanding one word.
pub(crate) struct Expansion {
    pub(crate) candidates: usize,
    pub(crate) hits: Vec<String>,
}

/// Expand `word`: its candidates that are `lexicon` members, duplicates
/// included when the generator produces them more than once.
pub(crate) fn expand<L: Lexicon + ?Sized>(lexicon: &L, word: &str, config: &ClosureConfig) -> Expansion {
    if config.generation == GenerationMode::TrieWalk
        && let Some(hits) = lexicon.neighbors(word, &config.alphabet)
    {
        return Expansion {
            candidates: hits.len(),
            hits,
        };
    }

    let mut expansion = Expansion {
        candidates: 0,
        hits: Vec::new(),
    };
    for edit in Candidates::for_word(word, config) {
        expansion.candidates += 1;
        if lexicon.contains(&edit.word) {
            expansion.hits.push(edit.word);
        }
    }
    expansion
}

/// Warn once per run when trie walks were asked for but `lexicon` cannot
/// enumerate neighbors.
pub(crate) fn check_generation<L: Lexicon + ?Sized>(lexicon: &L, config: &ClosureConfig) {
    if config.generation == GenerationMode::TrieWalk && lexicon.neighbors("", &config.alphabet).is_none() {
        log::warn!("lexicon cannot list neighbors; generating candidates inline");
    }
}

/// What to do with a candidate that is a dictionary word.
pub(crate) enum Discovery {
    /// New friend: report it and queue it for expansion.
    Enqueue,
    /// Reported without expansion (the seed under `IncludeIfRediscovered`).
    Report,
    /// Already known.
    Known,
}

/// Decide how a dictionary hit affects the friend set.
///
/// The seed has already been expanded when the run starts, so it is never
/// queued again.
pub(crate) fn classify(
    candidate: &str,
    seed: &str,
    policy: SeedPolicy,
    friends: &AHashSet<String>,
) -> Discovery {
    if candidate == seed && policy != SeedPolicy::AlwaysInclude {
        return match policy {
            SeedPolicy::IncludeIfRediscovered if !friends.contains(seed) => Discovery::Report,
            _ => Discovery::Known,
        };
    }
    if friends.contains(candidate) {
        Discovery::Known
    } else {
        Discovery::Enqueue
    }
}

/// Sequential closure engine over a borrowed dictionary.
pub struct ClosureEngine<'a, L: Lexicon + ?Sized> {
    lexicon: &'a L,
    config: ClosureConfig,
}

impl<'a, L: Lexicon + ?Sized> ClosureEngine<'a, L> {
    /// Create an engine with the default configuration.
    pub fn new(lexicon: &'a L) -> Self {
        Self::with_config(lexicon, ClosureConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(lexicon: &'a L, config: ClosureConfig) -> Self {
        ClosureEngine { lexicon, config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &ClosureConfig {
        &self.config
    }

    /// Compute the closure of `seed`, logging progress.
    pub fn run(&self, seed: &str) -> ClosureOutcome {
        self.run_with_observer(seed, &mut LogProgress)
    }

    /// Compute the closure of `seed`, reporting progress to `observer`.
    ///
    /// The seed is expanded even if it is not a dictionary word; only its
    /// candidates are filtered.
    pub fn run_with_observer(&self, seed: &str, observer: &mut dyn ProgressObserver) -> ClosureOutcome {
        let started = Instant::now();
        let policy = self.config.seed_policy;

        let mut stats = ClosureStats::default();
        let mut friends: AHashSet<String> = AHashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();

        if policy == SeedPolicy::AlwaysInclude {
            friends.insert(seed.to_string());
        }
        queue.push_back(seed.to_string());
        stats.max_queue_depth = 1;

        check_generation(self.lexicon, &self.config);
        log::debug!("closure of '{seed}' started with policy {policy:?}");

        while let Some(curr) = queue.pop_front() {
            let expansion = expand(self.lexicon, &curr, &self.config);
            stats.candidates += expansion.candidates;
            stats.dictionary_hits += expansion.hits.len();

            for word in expansion.hits {
                match classify(&word, seed, policy, &friends) {
                    Discovery::Enqueue => {
                        friends.insert(word.clone());
                        queue.push_back(word);
                    }
                    Discovery::Report => {
                        friends.insert(word);
                    }
                    Discovery::Known => stats.rediscovered += 1,
                }
            }

            stats.expansions += 1;
            stats.max_queue_depth = stats.max_queue_depth.max(queue.len());

            if self.config.is_progress_tick(stats.expansions) {
                observer.observe(&Progress {
                    expansions: stats.expansions,
                    queue_depth: queue.len(),
                    friends: friends.len(),
                });
            }
        }

        stats.elapsed = started.elapsed();
        log::debug!(
            "closure of '{seed}' finished: {} friends, {} expansions in {:?}",
            friends.len(),
            stats.expansions,
            stats.elapsed
        );

        ClosureOutcome { friends, stats }
    }
}

/// Compute the closure of `seed` over `lexicon` with the default
/// configuration: lowercase ASCII alphabet, seed excluded.
pub fn closure<L: Lexicon + ?Sized>(seed: &str, lexicon: &L) -> AHashSet<String> {
    ClosureEngine::new(lexicon).run(seed).friends
}
