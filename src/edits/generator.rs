//! Lazy generator for one-edit-away candidates.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// The kind of single-character edit that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Replace the character at a position (possibly with itself).
    Substitution,
    /// Remove the character at a position.
    Deletion,
    /// Insert a character before a position, or at the end.
    Insertion,
}

/// A single candidate produced from a source word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// How the candidate was derived.
    pub kind: EditKind,
    /// Character position in the source word the edit applies to.
    /// End-insertions use the source word's length.
    pub position: usize,
    /// The candidate word.
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Deletion,
    Substitution,
    Insertion,
    Append,
    Done,
}

/// Iterator over all single edits of a word.
///
/// For every position `i` it yields one deletion, then for every letter in
/// alphabet order a substitution at `i` followed by an insertion before `i`.
/// After the last position it yields one end-insertion per letter. The
/// sequence is finite and deterministic; calling [`single_edits`] again
/// produces a fresh, independent sequence.
///
/// Self-substitutions are not filtered, so the source word itself appears
/// once per position whose character belongs to the alphabet.
#[derive(Debug, Clone)]
pub struct SingleEdits {
    chars: Vec<char>,
    letters: Vec<char>,
    position: usize,
    letter: usize,
    phase: Phase,
    remaining: usize,
}

/// Generate every candidate one edit away from `word`.
pub fn single_edits(word: &str, alphabet: &Alphabet) -> SingleEdits {
    let chars: Vec<char> = word.chars().collect();
    let remaining = candidate_count(chars.len(), alphabet);
    SingleEdits {
        chars,
        letters: alphabet.letters().to_vec(),
        position: 0,
        letter: 0,
        phase: Phase::Deletion,
        remaining,
    }
}

/// Exact number of candidates [`single_edits`] yields for a word of
/// `word_len` characters: `n` deletions, `|Σ|·n` substitutions and
/// `|Σ|·(n + 1)` insertions.
pub fn candidate_count(word_len: usize, alphabet: &Alphabet) -> usize {
    let letters = alphabet.len();
    word_len + letters * word_len + letters * (word_len + 1)
}

impl SingleEdits {
    fn splice(&self, keep_until: usize, middle: Option<char>, resume_at: usize) -> String {
        let mut word = String::with_capacity(self.chars.len() + 1);
        word.extend(&self.chars[..keep_until]);
        if let Some(c) = middle {
            word.push(c);
        }
        word.extend(&self.chars[resume_at..]);
        word
    }

    fn emit(&mut self, kind: EditKind, position: usize, word: String) -> Option<Edit> {
        self.remaining -= 1;
        Some(Edit {
            kind,
            position,
            word,
        })
    }
}

impl Iterator for SingleEdits {
    type Item = Edit;

    fn next(&mut self) -> Option<Edit> {
        let n = self.chars.len();
        loop {
            match self.phase {
                Phase::Deletion => {
                    if self.position >= n {
                        self.phase = Phase::Append;
                        self.letter = 0;
                        continue;
                    }
                    let i = self.position;
                    let word = self.splice(i, None, i + 1);
                    self.phase = Phase::Substitution;
                    self.letter = 0;
                    return self.emit(EditKind::Deletion, i, word);
                }
                Phase::Substitution => {
                    if self.letter >= self.letters.len() {
                        self.position += 1;
                        self.phase = Phase::Deletion;
                        continue;
                    }
                    let i = self.position;
                    let c = self.letters[self.letter];
                    let word = self.splice(i, Some(c), i + 1);
                    self.phase = Phase::Insertion;
                    return self.emit(EditKind::Substitution, i, word);
                }
                Phase::Insertion => {
                    let i = self.position;
                    let c = self.letters[self.letter];
                    let word = self.splice(i, Some(c), i);
                    self.letter += 1;
                    self.phase = Phase::Substitution;
                    return self.emit(EditKind::Insertion, i, word);
                }
                Phase::Append => {
                    if self.letter >= self.letters.len() {
                        self.phase = Phase::Done;
                        continue;
                    }
                    let c = self.letters[self.letter];
                    let word = self.splice(n, Some(c), n);
                    self.letter += 1;
                    return self.emit(EditKind::Insertion, n, word);
                }
                Phase::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SingleEdits {}

impl FusedIterator for SingleEdits {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn count_kind(word: &str, alphabet: &Alphabet, kind: EditKind) -> usize {
        single_edits(word, alphabet)
            .filter(|edit| edit.kind == kind)
            .count()
    }

    #[test]
    fn test_counts_per_kind() {
        let alphabet = Alphabet::lowercase_ascii();
        for word in ["", "a", "cat", "causes"] {
            let n = word.chars().count();
            assert_eq!(count_kind(word, &alphabet, EditKind::Deletion), n);
            assert_eq!(count_kind(word, &alphabet, EditKind::Substitution), 26 * n);
            assert_eq!(count_kind(word, &alphabet, EditKind::Insertion), 26 * n + 26);
            assert_eq!(single_edits(word, &alphabet).count(), candidate_count(n, &alphabet));
        }
    }

    #[test]
    fn test_empty_word_yields_only_end_insertions() {
        let alphabet = Alphabet::lowercase_ascii();
        let edits: Vec<Edit> = single_edits("", &alphabet).collect();
        assert_eq!(edits.len(), 26);
        assert!(edits.iter().all(|e| e.kind == EditKind::Insertion && e.position == 0));

        let words: HashSet<String> = edits.into_iter().map(|e| e.word).collect();
        let expected: HashSet<String> = ('a'..='z').map(String::from).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_single_char_word() {
        let alphabet = Alphabet::lowercase_ascii();
        let words: HashSet<String> = single_edits("x", &alphabet).map(|e| e.word).collect();

        assert!(words.contains(""));
        assert!(words.contains("x"));
        assert!(words.contains("a"));
        assert!(words.contains("ax"));
        assert!(words.contains("xa"));
        assert!(words.contains("xx"));
        // 26 substitutions + 1 deletion + 26 prefixes + 26 suffixes, minus "xx" twice
        assert_eq!(words.len(), 26 + 1 + 26 + 26 - 1);
    }

    #[test]
    fn test_order_is_deterministic() {
        let alphabet: Alphabet = "ab".parse().unwrap();
        let words: Vec<String> = single_edits("xy", &alphabet).map(|e| e.word).collect();
        assert_eq!(
            words,
            vec![
                "y", "ay", "axy", "by", "bxy", // position 0
                "x", "xa", "xay", "xb", "xby", // position 1
                "xya", "xyb", // end
            ]
        );

        let again: Vec<String> = single_edits("xy", &alphabet).map(|e| e.word).collect();
        assert_eq!(words, again);
    }

    #[test]
    fn test_self_substitution_not_filtered() {
        let alphabet = Alphabet::lowercase_ascii();
        let selves = single_edits("cat", &alphabet)
            .filter(|e| e.kind == EditKind::Substitution && e.word == "cat")
            .count();
        assert_eq!(selves, 3);
    }

    #[test]
    fn test_multibyte_characters() {
        let alphabet: Alphabet = "äö".parse().unwrap();
        let words: Vec<String> = single_edits("ä", &alphabet).map(|e| e.word).collect();
        assert_eq!(words, vec!["", "ä", "ää", "ö", "öä", "ää", "äö"]);
    }

    #[test]
    fn test_exact_size() {
        let alphabet = Alphabet::lowercase_ascii();
        let mut edits = single_edits("ab", &alphabet);
        assert_eq!(edits.len(), 2 + 52 + 78);
        edits.next();
        assert_eq!(edits.len(), 2 + 52 + 78 - 1);
        let rest: Vec<Edit> = edits.by_ref().collect();
        assert_eq!(rest.len(), 2 + 52 + 78 - 1);
        assert_eq!(edits.next(), None);
    }
}
