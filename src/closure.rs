//! Friend closure computation.
//!
//! The closure of a seed word is every dictionary word reachable from it by a
//! chain of single edits. [`engine`] holds the sequential breadth-first
//! engine, [`parallel`] a multi-worker variant with identical results,
//! [`config`] their shared configuration, and [`progress`] the periodic
//! status observations both emit.

pub mod config;
pub mod engine;
pub mod parallel;
pub mod progress;

pub use config::{ClosureConfig, GenerationMode, SeedPolicy};
pub use engine::{ClosureEngine, ClosureOutcome, ClosureStats, closure};
pub use parallel::ParallelClosureEngine;
pub use progress::{LogProgress, NoProgress, Progress, ProgressObserver, RecordProgress};
