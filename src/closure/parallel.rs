//! Multi-worker closure engine.
//!
//! Workers share one frontier (work queue, friend set, in-flight counter)
//! behind a single lock. Candidate generation and dictionary lookups run
//! outside the lock; checking a hit against the friend set, inserting it and
//! enqueueing it happen under one acquisition, so no word is ever expanded
//! twice. The run ends when the queue is empty and no worker is expanding.
//! If a worker panics, the others stop taking work and the panic resumes on
//! the calling thread.

use std::collections::VecDeque;
use std::thread;
use std::time::Instant;

use ahash::AHashSet;
use parking_lot::{Condvar, Mutex};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::closure::config::{ClosureConfig, SeedPolicy};
use crate::closure::engine::{ClosureOutcome, ClosureStats, Discovery, check_generation, classify, expand};
use crate::closure::progress::{LogProgress, Progress, ProgressObserver};
use crate::dictionary::Lexicon;
use crate::error::{FriendNetError, Result};

struct Frontier<'o> {
    queue: VecDeque<String>,
    friends: AHashSet<String>,
    in_flight: usize,
    /// Set when a worker unwinds mid-expansion.
    aborted: bool,
    stats: ClosureStats,
    observer: &'o mut (dyn ProgressObserver + Send),
}

/// Held by a worker while it expands a word. A worker that panics never
/// finishes its expansion, so the guard marks the run aborted on unwind and
/// wakes the idle workers, which would otherwise wait for it forever.
struct Expanding<'f, 'o> {
    frontier: &'f Mutex<Frontier<'o>>,
    wake: &'f Condvar,
}

impl Drop for Expanding<'_, '_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.frontier.lock().aborted = true;
            self.wake.notify_all();
        }
    }
}

/// Closure engine that expands several words at once on a thread pool.
pub struct ParallelClosureEngine<'a, L: Lexicon + Sync + ?Sized> {
    lexicon: &'a L,
    config: ClosureConfig,
    pool: ThreadPool,
}

impl<'a, L: Lexicon + Sync + ?Sized> ParallelClosureEngine<'a, L> {
    /// Create a new parallel engine.
    pub fn new(lexicon: &'a L, config: ClosureConfig) -> Result<Self> {
        config.validate()?;
        let threads = config.threads.unwrap_or_else(num_cpus::get);

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("friendnet-closure-{i}"))
            .build()
            .map_err(|e| FriendNetError::thread_pool(format!("Failed to create thread pool: {e}")))?;

        Ok(ParallelClosureEngine {
            lexicon,
            config,
            pool,
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &ClosureConfig {
        &self.config
    }

    /// Number of workers.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Compute the closure of `seed`, logging progress.
    pub fn run(&self, seed: &str) -> ClosureOutcome {
        self.run_with_observer(seed, &mut LogProgress)
    }

    /// Compute the closure of `seed`, reporting progress to `observer`.
    ///
    /// Observations are delivered under the frontier lock, so they arrive in
    /// expansion order.
    ///
    /// # Panics
    ///
    /// Resumes a panic raised by the lexicon or the observer on a worker,
    /// once every worker has stopped.
    pub fn run_with_observer(
        &self,
        seed: &str,
        observer: &mut (dyn ProgressObserver + Send),
    ) -> ClosureOutcome {
        let started = Instant::now();

        let mut friends = AHashSet::new();
        if self.config.seed_policy == SeedPolicy::AlwaysInclude {
            friends.insert(seed.to_string());
        }
        let stats = ClosureStats {
            max_queue_depth: 1,
            ..Default::default()
        };

        let frontier = Mutex::new(Frontier {
            queue: VecDeque::from([seed.to_string()]),
            friends,
            in_flight: 0,
            aborted: false,
            stats,
            observer,
        });
        let wake = Condvar::new();

        check_generation(self.lexicon, &self.config);
        log::debug!(
            "parallel closure of '{seed}' started with {} workers",
            self.workers()
        );

        self.pool.scope(|scope| {
            for _ in 0..self.workers() {
                scope.spawn(|_| self.work(seed, &frontier, &wake));
            }
        });

        let frontier = frontier.into_inner();
        let mut stats = frontier.stats;
        stats.elapsed = started.elapsed();

        log::debug!(
            "parallel closure of '{seed}' finished: {} friends, {} expansions in {:?}",
            frontier.friends.len(),
            stats.expansions,
            stats.elapsed
        );

        ClosureOutcome {
            friends: frontier.friends,
            stats,
        }
    }

    fn work(&self, seed: &str, frontier: &Mutex<Frontier<'_>>, wake: &Condvar) {
        loop {
            let curr = {
                let mut state = frontier.lock();
                loop {
                    if state.aborted {
                        return;
                    }
                    if let Some(word) = state.queue.pop_front() {
                        state.in_flight += 1;
                        break word;
                    }
                    if state.in_flight == 0 {
                        wake.notify_all();
                        return;
                    }
                    wake.wait(&mut state);
                }
            };

            let _expanding = Expanding { frontier, wake };
            let expansion = expand(self.lexicon, &curr, &self.config);

            let mut state = frontier.lock();
            let state = &mut *state;
            state.stats.candidates += expansion.candidates;
            state.stats.dictionary_hits += expansion.hits.len();

            for word in expansion.hits {
                match classify(&word, seed, self.config.seed_policy, &state.friends) {
                    Discovery::Enqueue => {
                        state.friends.insert(word.clone());
                        state.queue.push_back(word);
                    }
                    Discovery::Report => {
                        state.friends.insert(word);
                    }
                    Discovery::Known => state.stats.rediscovered += 1,
                }
            }

            state.in_flight -= 1;
            state.stats.expansions += 1;
            state.stats.max_queue_depth = state.stats.max_queue_depth.max(state.queue.len());

            if self.config.is_progress_tick(state.stats.expansions) {
                let progress = Progress {
                    expansions: state.stats.expansions,
                    queue_depth: state.queue.len(),
                    friends: state.friends.len(),
                };
                state.observer.observe(&progress);
            }

            wake.notify_all();
        }
    }
}
