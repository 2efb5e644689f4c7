//! # FriendNet
//!
//! Computes the social network of a word: every dictionary word reachable
//! from a seed by a chain of single-character substitutions, deletions, or
//! insertions.
//!
//! ## Features
//!
//! - Lazy, deterministic single-edit candidate generation over a
//!   configurable alphabet
//! - Breadth-first closure with at-most-once expansion per word
//! - Optional multi-worker engine with identical results
//! - Prefix-tree lexicon that finds a word's neighbors without generating
//!   candidates
//! - Periodic progress observations through the `log` facade
//!
//! ```
//! use friendnet::closure::closure;
//! use friendnet::dictionary::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["cat", "bat", "bad", "cot"]);
//! let friends = closure("cat", &dictionary);
//! assert_eq!(friends.len(), 3);
//! assert!(friends.contains("bad"));
//! ```

pub mod alphabet;
pub mod cli;
pub mod closure;
pub mod dictionary;
pub mod edits;
pub mod error;

pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::closure::{
        ClosureConfig, ClosureEngine, ClosureOutcome, GenerationMode, ParallelClosureEngine,
        ProgressObserver, SeedPolicy, closure,
    };
    pub use crate::dictionary::{Dictionary, Lexicon, TrieLexicon};
    pub use crate::edits::{Edit, EditKind, single_edits};
    pub use crate::error::{FriendNetError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
