//! Single-edit candidate generation.
//!
//! This module produces every string one substitution, deletion, or
//! insertion away from a word, either lazily on the calling thread
//! ([`generator`]) or streamed from a worker thread ([`stream`]), and provides
//! a bounded Levenshtein check for verifying that two words are friends
//! ([`distance`]).

pub mod distance;
pub mod generator;
pub mod stream;

pub use distance::{is_single_edit, levenshtein_distance_threshold};
pub use generator::{Edit, EditKind, SingleEdits, candidate_count, single_edits};
pub use stream::CandidateStream;
