//! Bounded Levenshtein distance for verifying friendships.

use std::cmp::min;

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 {
        return Some(len2);
    }
    if len2 == 0 {
        return Some(len1);
    }

    // Two rows are enough.
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Whether `a` and `b` are friends: exactly one substitution, deletion, or
/// insertion apart. Identical words are not friends of each other.
pub fn is_single_edit(a: &str, b: &str) -> bool {
    levenshtein_distance_threshold(a, b, 1) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_threshold("", "ab", 2), Some(2));
        assert_eq!(levenshtein_distance_threshold("", "abc", 2), None);
        assert_eq!(levenshtein_distance_threshold("same", "same", 0), Some(0));
    }

    #[test]
    fn test_is_single_edit() {
        assert!(is_single_edit("cat", "bat"));
        assert!(is_single_edit("cat", "at"));
        assert!(is_single_edit("cat", "cart"));
        assert!(is_single_edit("a", ""));
        assert!(is_single_edit("über", "ober"));

        assert!(!is_single_edit("cat", "cat"));
        assert!(!is_single_edit("cat", "bad"));
        assert!(!is_single_edit("cat", "act"));
        assert!(!is_single_edit("", ""));
    }
}
