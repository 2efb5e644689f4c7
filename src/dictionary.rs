//! Dictionary loading and membership testing.
//!
//! The closure engine only ever asks one question of a dictionary: is this
//! word in it? That question is the [`Lexicon`] trait. [`Dictionary`] is the
//! standard implementation, loaded once from a line-oriented word list and
//! normalized so that stray whitespace, blank lines, or inconsistent casing
//! never reach the engine. [`trie::TrieLexicon`] stores the same words as a
//! prefix tree and can answer the engine's other question, which dictionary
//! words are one edit away, without generating candidates.

pub mod trie;

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashSet;

use crate::alphabet::Alphabet;
use crate::error::{FriendNetError, Result};

pub use trie::TrieLexicon;

/// Read-only word membership.
pub trait Lexicon {
    /// Whether `word` is a member.
    fn contains(&self, word: &str) -> bool;

    /// Every member one edit away from `word` (and `word` itself when a
    /// self-substitution would produce it), if this lexicon can enumerate
    /// them directly. `None` means the caller has to generate candidates.
    fn neighbors(&self, _word: &str, _alphabet: &Alphabet) -> Option<Vec<String>> {
        None
    }
}

impl<S: BuildHasher> Lexicon for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for AHashSet<String> {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// Normalization policy applied to each line of a word list.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Strip leading and trailing whitespace.
    pub trim: bool,
    /// Lowercase every word.
    pub lowercase: bool,
    /// Drop lines that are empty after trimming.
    pub skip_blank: bool,
    /// Drop words containing characters outside this alphabet.
    pub restrict_to: Option<Alphabet>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            trim: true,
            lowercase: true,
            skip_blank: true,
            restrict_to: None,
        }
    }
}

impl LoadOptions {
    /// Only accept words spelled entirely with `alphabet`.
    pub fn restricted_to(mut self, alphabet: Alphabet) -> Self {
        self.restrict_to = Some(alphabet);
        self
    }

    /// Normalize one line, returning `None` if it should be dropped.
    pub fn normalize(&self, line: &str) -> Option<String> {
        let word = if self.trim { line.trim() } else { line };
        if self.skip_blank && word.is_empty() {
            return None;
        }
        let word = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        if let Some(alphabet) = &self.restrict_to
            && !alphabet.covers(&word)
        {
            return None;
        }
        Some(word)
    }
}

/// Summary of a dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read from the source.
    pub lines_read: usize,
    /// Distinct words added.
    pub accepted: usize,
    /// Lines dropped by normalization.
    pub rejected: usize,
    /// Lines that normalized to a word already present.
    pub duplicates: usize,
}

/// An immutable-after-load set of words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashSet<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            words: AHashSet::new(),
        }
    }

    /// Build a dictionary from already-normalized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a word. Returns false if it was already present.
    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        self.words.insert(word.into())
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Load dictionary from a text file with one word per line, using the
    /// default normalization.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (dictionary, _) = Self::load_from_file_with(path, &LoadOptions::default())?;
        Ok(dictionary)
    }

    /// Load dictionary from a text file with explicit normalization options.
    pub fn load_from_file_with<P: AsRef<Path>>(
        path: P,
        options: &LoadOptions,
    ) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        log::debug!("loading dictionary from {}", path.display());
        let file = File::open(path)?;
        Self::load_from_reader(file, options)
    }

    /// Load dictionary from any reader producing one word per line.
    ///
    /// A line that is not valid UTF-8 fails the load with a
    /// [`FriendNetError::Dictionary`] naming the line.
    pub fn load_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<(Self, LoadReport)> {
        let mut dictionary = Dictionary::new();
        let mut report = LoadReport::default();

        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => {
                    FriendNetError::dictionary(format!("line {}: {e}", report.lines_read + 1))
                }
                _ => FriendNetError::Io(e),
            })?;
            report.lines_read += 1;

            match options.normalize(&line) {
                Some(word) => {
                    if dictionary.insert(word) {
                        report.accepted += 1;
                    } else {
                        report.duplicates += 1;
                    }
                }
                None => report.rejected += 1,
            }
        }

        log::debug!(
            "dictionary loaded: {} lines, {} words, {} rejected, {} duplicates",
            report.lines_read,
            report.accepted,
            report.rejected,
            report.duplicates
        );

        Ok((dictionary, report))
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        Dictionary::contains(self, word)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains("cat"));

        assert!(dict.insert("cat"));
        assert!(!dict.insert("cat"));
        assert!(dict.contains("cat"));
        assert_eq!(dict.len(), 1);

        let dict = Dictionary::from_words(["cat", "bat"]);
        let mut words: Vec<&str> = dict.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["bat", "cat"]);
    }

    #[test]
    fn test_normalization() {
        let options = LoadOptions::default();
        assert_eq!(options.normalize("  Cat \r"), Some("cat".to_string()));
        assert_eq!(options.normalize("   "), None);
        assert_eq!(options.normalize(""), None);

        let raw = LoadOptions {
            trim: false,
            lowercase: false,
            skip_blank: false,
            restrict_to: None,
        };
        assert_eq!(raw.normalize(" Cat"), Some(" Cat".to_string()));
        assert_eq!(raw.normalize(""), Some(String::new()));

        let restricted = LoadOptions::default().restricted_to(Alphabet::lowercase_ascii());
        assert_eq!(restricted.normalize("naive"), Some("naive".to_string()));
        assert_eq!(restricted.normalize("naïve"), None);
        assert_eq!(restricted.normalize("don't"), None);
    }

    #[test]
    fn test_load_from_reader_report() {
        let text = "cat\nBat\n\n  cot  \ncat\nbad\n";
        let (dict, report) = Dictionary::load_from_reader(text.as_bytes(), &LoadOptions::default()).unwrap();

        assert_eq!(dict.len(), 4);
        assert!(dict.contains("bat"));
        assert!(dict.contains("cot"));
        assert!(!dict.contains(""));
        assert_eq!(
            report,
            LoadReport {
                lines_read: 6,
                accepted: 4,
                rejected: 1,
                duplicates: 1,
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "causes").unwrap();
        writeln!(temp_file, "cause").unwrap();
        writeln!(temp_file).unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("causes"));
    }

    #[test]
    fn test_invalid_utf8_line() {
        let bytes: &[u8] = b"cat\nb\xffd\ncot\n";
        let result = Dictionary::load_from_reader(bytes, &LoadOptions::default());
        match result {
            Err(FriendNetError::Dictionary(msg)) => assert!(msg.starts_with("line 2:"), "{msg}"),
            other => panic!("expected a dictionary error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let result = Dictionary::load_from_file("/definitely/not/a/word.list");
        assert!(matches!(result, Err(FriendNetError::Io(_))));
    }

    #[test]
    fn test_lexicon_impls() {
        fn member<L: Lexicon + ?Sized>(lexicon: &L, word: &str) -> bool {
            lexicon.contains(word)
        }

        let std_set: HashSet<String> = ["cat".to_string()].into_iter().collect();
        let a_set: AHashSet<String> = ["cat".to_string()].into_iter().collect();
        let b_set: BTreeSet<String> = ["cat".to_string()].into_iter().collect();
        let dict: Dictionary = ["cat"].into_iter().collect();

        assert!(member(&std_set, "cat"));
        assert!(member(&a_set, "cat"));
        assert!(member(&b_set, "cat"));
        assert!(member(&dict, "cat"));
        assert!(!member(&dict, "dog"));
    }
}
