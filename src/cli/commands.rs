//! Command implementations for the FriendNet CLI.

use ahash::AHashSet;

use crate::alphabet::Alphabet;
use crate::cli::args::{CheckArgs, ClosureArgs, Command, EditsArgs, FriendNetArgs};
use crate::cli::output::{CandidateEntry, CheckReport, ClosureReport, EditsReport, output_result};
use crate::closure::config::{ClosureConfig, GenerationMode};
use crate::closure::engine::{ClosureEngine, ClosureOutcome};
use crate::closure::parallel::ParallelClosureEngine;
use crate::closure::progress::LogProgress;
use crate::dictionary::{Dictionary, Lexicon, LoadOptions, TrieLexicon};
use crate::edits::distance::{is_single_edit, levenshtein_distance_threshold};
use crate::edits::generator::single_edits;
use crate::error::{FriendNetError, Result};

/// Execute a CLI command.
pub fn execute_command(args: FriendNetArgs) -> Result<()> {
    match &args.command {
        Command::Closure(closure_args) => run_closure(closure_args, &args),
        Command::Edits(edits_args) => list_edits(edits_args, &args),
        Command::Check(check_args) => check_friends(check_args, &args),
    }
}

/// Build the closure configuration from an optional file plus flag overrides.
pub fn resolve_config(args: &ClosureArgs) -> Result<ClosureConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            ClosureConfig::load_from_file(path)?
        }
        None => ClosureConfig::default(),
    };

    if let Some(alphabet) = &args.alphabet {
        config.alphabet = alphabet.parse()?;
    }
    if let Some(interval) = args.progress_interval {
        config.progress_interval = interval;
    }
    if let Some(policy) = args.seed_policy {
        config.seed_policy = policy.into();
    }
    if let Some(threads) = args.threads {
        config.threads = Some(threads);
    }
    if args.streamed {
        config.generation = GenerationMode::streamed();
    }
    if args.trie {
        config.generation = GenerationMode::TrieWalk;
    }

    config.validate()?;
    Ok(config)
}

/// Reject seeds no dictionary line can produce.
///
/// The default loader drops blank lines, so an empty seed would only ever
/// report the words one letter long.
pub fn check_seed(seed: &str) -> Result<()> {
    if seed.trim().is_empty() {
        return Err(FriendNetError::invalid_argument("seed word must not be empty"));
    }
    Ok(())
}

/// Compute and report the closure of a seed word.
fn run_closure(args: &ClosureArgs, cli_args: &FriendNetArgs) -> Result<()> {
    check_seed(&args.seed)?;
    let config = resolve_config(args)?;

    let mut options = LoadOptions::default();
    if args.restrict {
        options = options.restricted_to(config.alphabet.clone());
    }
    log::info!("Loading dictionary from: {}", args.dictionary.display());
    let (dictionary, load) = Dictionary::load_from_file_with(&args.dictionary, &options)?;
    if load.rejected > 0 {
        log::warn!("Dropped {} dictionary lines during normalization", load.rejected);
    }

    let (outcome, workers) = if config.generation == GenerationMode::TrieWalk {
        let trie = TrieLexicon::from(&dictionary);
        log::debug!("built a prefix tree of {} words", trie.len());
        run_engine(&trie, &args.seed, config, args.parallel)?
    } else {
        run_engine(&dictionary, &args.seed, config, args.parallel)?
    };

    let report = closure_report(&args.seed, dictionary.len(), &outcome, workers, args.list);
    output_result(&report, cli_args)
}

fn run_engine<L: Lexicon + Sync + ?Sized>(
    lexicon: &L,
    seed: &str,
    config: ClosureConfig,
    parallel: bool,
) -> Result<(ClosureOutcome, usize)> {
    if parallel {
        let engine = ParallelClosureEngine::new(lexicon, config)?;
        Ok((engine.run_with_observer(seed, &mut LogProgress), engine.workers()))
    } else {
        let engine = ClosureEngine::with_config(lexicon, config);
        Ok((engine.run_with_observer(seed, &mut LogProgress), 1))
    }
}

fn closure_report(
    seed: &str,
    dictionary_size: usize,
    outcome: &ClosureOutcome,
    workers: usize,
    list: bool,
) -> ClosureReport {
    ClosureReport {
        seed: seed.to_string(),
        dictionary_size,
        friend_count: outcome.len(),
        expansions: outcome.stats.expansions,
        candidates: outcome.stats.candidates,
        dictionary_hits: outcome.stats.dictionary_hits,
        max_queue_depth: outcome.stats.max_queue_depth,
        duration_ms: outcome.stats.elapsed.as_millis() as u64,
        workers,
        friends: list.then(|| outcome.sorted()),
    }
}

/// List the candidates of a word, optionally only those in a dictionary.
fn list_edits(args: &EditsArgs, cli_args: &FriendNetArgs) -> Result<()> {
    let alphabet = match &args.alphabet {
        Some(letters) => letters.parse()?,
        None => Alphabet::lowercase_ascii(),
    };
    let dictionary = match &args.dictionary {
        Some(path) => Some(Dictionary::load_from_file(path)?),
        None => None,
    };

    let report = edits_report(&args.word, &alphabet, dictionary.as_ref());
    output_result(&report, cli_args)
}

/// Candidates of `word`. With a dictionary, only distinct dictionary words
/// other than `word` itself are kept, which are exactly its direct friends.
pub fn edits_report(word: &str, alphabet: &Alphabet, dictionary: Option<&Dictionary>) -> EditsReport {
    let mut seen: AHashSet<String> = AHashSet::new();
    let candidates = single_edits(word, alphabet)
        .filter(|edit| match dictionary {
            Some(dict) => edit.word != word && dict.contains(&edit.word) && seen.insert(edit.word.clone()),
            None => true,
        })
        .map(|edit| CandidateEntry {
            kind: edit.kind,
            position: edit.position,
            word: edit.word,
        })
        .collect();

    EditsReport {
        word: word.to_string(),
        alphabet: alphabet.to_string(),
        dictionary_filtered: dictionary.is_some(),
        candidates,
    }
}

/// Report whether two words are friends.
fn check_friends(args: &CheckArgs, cli_args: &FriendNetArgs) -> Result<()> {
    output_result(&check_report(&args.first, &args.second), cli_args)
}

pub fn check_report(first: &str, second: &str) -> CheckReport {
    let bound = first.chars().count().max(second.chars().count());
    CheckReport {
        first: first.to_string(),
        second: second.to_string(),
        friends: is_single_edit(first, second),
        distance: levenshtein_distance_threshold(first, second, bound).unwrap_or(bound),
    }
}
