//! Ordered letter sets used to generate edit candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FriendNetError, Result};

/// An ordered set of characters that substitutions and insertions draw from.
///
/// The order is significant: it fixes the order in which candidates are
/// produced, which keeps candidate generation deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from the given letters, in order.
    ///
    /// Duplicate letters are rejected since they would emit every
    /// substitution and insertion for that letter twice.
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> Result<Self> {
        let mut collected: Vec<char> = Vec::new();
        for letter in letters {
            if collected.contains(&letter) {
                return Err(FriendNetError::config(format!(
                    "duplicate letter '{letter}' in alphabet"
                )));
            }
            collected.push(letter);
        }
        Ok(Alphabet { letters: collected })
    }

    /// The 26 lowercase ASCII letters, `a` through `z`.
    pub fn lowercase_ascii() -> Self {
        Alphabet {
            letters: ('a'..='z').collect(),
        }
    }

    /// Letters in generation order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the alphabet has no letters at all.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether `letter` belongs to the alphabet.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Whether every character of `word` belongs to the alphabet.
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase_ascii()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = FriendNetError;

    fn try_from(value: String) -> Result<Self> {
        Alphabet::new(value.chars())
    }
}

impl std::str::FromStr for Alphabet {
    type Err = FriendNetError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s.chars())
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
