//! Prefix-tree lexicon with a bounded-edit neighbor walk.
//!
//! Generating every candidate of a word and looking each one up in a hash
//! set costs `|Σ|(2n+1)+n` lookups, most of them misses. A [`TrieLexicon`] instead
//! walks the tree once with an edit budget of one and only follows branches
//! that still spell a dictionary prefix, so the work scales with how many
//! words share prefixes with the query rather than with the alphabet.

use ahash::AHashSet;

use crate::alphabet::Alphabet;
use crate::dictionary::{Dictionary, Lexicon};

#[derive(Debug, Clone, Default)]
struct Node {
    /// Child edges sorted by letter.
    children: Vec<(char, usize)>,
    terminal: bool,
}

impl Node {
    fn child(&self, letter: char) -> Option<usize> {
        self.children
            .binary_search_by_key(&letter, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Dictionary stored as a character trie.
#[derive(Debug, Clone)]
pub struct TrieLexicon {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for TrieLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieLexicon {
    /// Create an empty trie.
    pub fn new() -> Self {
        TrieLexicon {
            nodes: vec![Node::default()],
            len: 0,
        }
    }

    /// Build a trie from any collection of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = TrieLexicon::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Add a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = 0;
        for letter in word.chars() {
            node = match self.nodes[node].children.binary_search_by_key(&letter, |&(c, _)| c) {
                Ok(i) => self.nodes[node].children[i].1,
                Err(i) => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(i, (letter, next));
                    next
                }
            };
        }

        let added = !self.nodes[node].terminal;
        self.nodes[node].terminal = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Whether `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored word at most one edit away from `word`, deduplicated.
    ///
    /// Substitutions and insertions only use letters from `alphabet`, so the
    /// result is exactly the set of dictionary words among
    /// `single_edits(word, alphabet)`. In particular `word` itself is
    /// included only when it is stored and one of its letters is in the
    /// alphabet, which is when a self-substitution would reproduce it.
    pub fn friends_within_one(&self, word: &str, alphabet: &Alphabet) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = AHashSet::new();
        let mut prefix = String::with_capacity(word.len() + 4);
        self.walk(0, &chars, true, alphabet, &mut prefix, &mut found);

        if !chars.iter().any(|&c| alphabet.contains(c)) {
            found.remove(word);
        }
        let mut friends: Vec<String> = found.into_iter().collect();
        friends.sort_unstable();
        friends
    }

    fn find(&self, word: &str) -> Option<usize> {
        word.chars()
            .try_fold(0, |node, letter| self.nodes[node].child(letter))
    }

    fn walk(
        &self,
        node: usize,
        rest: &[char],
        budget: bool,
        alphabet: &Alphabet,
        prefix: &mut String,
        found: &mut AHashSet<String>,
    ) {
        let current = &self.nodes[node];
        if rest.is_empty() && current.terminal {
            found.insert(prefix.clone());
        }

        if budget && let Some((_, tail)) = rest.split_first() {
            // Deletion of the next letter.
            self.walk(node, tail, false, alphabet, prefix, found);
        }

        for &(letter, child) in &current.children {
            let matches = rest.first() == Some(&letter);
            if !matches && !(budget && alphabet.contains(letter)) {
                continue;
            }

            prefix.push(letter);
            match rest.split_first() {
                Some((_, tail)) if matches => {
                    self.walk(child, tail, budget, alphabet, prefix, found);
                }
                Some((_, tail)) => {
                    self.walk(child, tail, false, alphabet, prefix, found);
                    self.walk(child, rest, false, alphabet, prefix, found);
                }
                None => self.walk(child, rest, false, alphabet, prefix, found),
            }
            prefix.pop();
        }
    }
}

impl Lexicon for TrieLexicon {
    fn contains(&self, word: &str) -> bool {
        TrieLexicon::contains(self, word)
    }

    fn neighbors(&self, word: &str, alphabet: &Alphabet) -> Option<Vec<String>> {
        Some(self.friends_within_one(word, alphabet))
    }
}

impl From<&Dictionary> for TrieLexicon {
    fn from(dictionary: &Dictionary) -> Self {
        TrieLexicon::from_words(dictionary.iter())
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieLexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TrieLexicon::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edits::generator::single_edits;

    fn by_generation(word: &str, alphabet: &Alphabet, dict: &Dictionary) -> Vec<String> {
        let mut words: Vec<String> = single_edits(word, alphabet)
            .map(|edit| edit.word)
            .filter(|w| dict.contains(w))
            .collect::<AHashSet<_>>()
            .into_iter()
            .collect();
        words.sort_unstable();
        words
    }

    #[test]
    fn test_insert_and_contains() {
        let mut trie = TrieLexicon::new();
        assert!(trie.is_empty());
        assert!(trie.insert("cat"));
        assert!(trie.insert("ca"));
        assert!(!trie.insert("cat"));

        assert_eq!(trie.len(), 2);
        assert!(trie.contains("cat"));
        assert!(trie.contains("ca"));
        assert!(!trie.contains("c"));
        assert!(!trie.contains("cats"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_empty_word_member() {
        let trie = TrieLexicon::from_words(["", "a"]);
        assert!(trie.contains(""));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.friends_within_one("b", &Alphabet::lowercase_ascii()), vec!["", "a"]);
    }

    #[test]
    fn test_friends_of_cat() {
        let trie = TrieLexicon::from_words(["cat", "bat", "bad", "cot", "at", "cart", "cats", "dog"]);
        let friends = trie.friends_within_one("cat", &Alphabet::lowercase_ascii());
        assert_eq!(friends, vec!["at", "bat", "cart", "cat", "cats", "cot"]);
    }

    #[test]
    fn test_alphabet_limits_substitution_and_insertion() {
        let trie = TrieLexicon::from_words(["cat", "bat", "cot", "cart", "at"]);
        let alphabet: Alphabet = "b".parse().unwrap();
        // Deletion ignores the alphabet; the only 'b' edit is bat.
        assert_eq!(trie.friends_within_one("cat", &alphabet), vec!["at", "bat"]);
    }

    #[test]
    fn test_agrees_with_candidate_generation() {
        let words = [
            "causes", "cause", "clauses", "clause", "cases", "case", "cast", "vast", "vase",
            "base", "bases", "basin", "casts", "caused", "cased", "pause", "paused", "pauses",
            "a", "b", "ab", "ba", "aa", "",
        ];
        let dict = Dictionary::from_words(words);
        let trie = TrieLexicon::from(&dict);
        for alphabet in [Alphabet::lowercase_ascii(), "abcs".parse().unwrap()] {
            for word in words.iter().chain(["caus", "xyz", "zzz"].iter()) {
                assert_eq!(
                    trie.friends_within_one(word, &alphabet),
                    by_generation(word, &alphabet, &dict),
                    "word {word:?} alphabet {alphabet}"
                );
            }
        }
    }

    #[test]
    fn test_lexicon_neighbors() {
        let trie: TrieLexicon = ["cat", "bat"].into_iter().collect();
        let alphabet = Alphabet::lowercase_ascii();
        assert_eq!(
            Lexicon::neighbors(&trie, "cat", &alphabet),
            Some(vec!["bat".to_string(), "cat".to_string()])
        );
        assert_eq!(Lexicon::neighbors(&Dictionary::new(), "cat", &alphabet), None);
    }
}
