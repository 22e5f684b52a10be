//! Boyer–Moore substring scan.
//!
//! ## Shift Tables
//!
//! The pattern is compared right to left. On a mismatch at pattern index
//! `j` against text byte `c` the window advances by the larger of:
//!
//! - **Bad character**: align the rightmost occurrence of `c` in the
//!   pattern (left of `j`) under the text byte, or move past it entirely
//! - **Good suffix**: align another occurrence of the already matched
//!   suffix `pattern[j + 1..]`, or the longest prefix that is also a
//!   suffix of it
//!
//! ```text
//! text:    . . . x b a b . . .
//! pattern:     a b a b            mismatch at j = 0, matched "bab"
//! ```

/// Pattern with its bad-character and good-suffix tables.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<u8>,

    /// Rightmost index of each byte value in the pattern
    last_occurrence: [Option<usize>; 256],

    /// `good_suffix[j]`: shift when `pattern[j..]` matched and
    /// `pattern[j - 1]` mismatched (`j == m` means nothing matched yet)
    good_suffix: Vec<usize>,
}

impl BoyerMoore {
    /// Build both shift tables, O(m + 256)
    pub fn new(pattern: &[u8]) -> Self {
        let mut last_occurrence = [None; 256];
        for (i, &byte) in pattern.iter().enumerate() {
            last_occurrence[usize::from(byte)] = Some(i);
        }

        Self {
            pattern: pattern.to_vec(),
            last_occurrence,
            good_suffix: good_suffix_table(pattern),
        }
    }

    /// The compiled pattern
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// First offset of the pattern in `text`
    pub fn find(&self, text: &[u8]) -> Option<usize> {
        let m = self.pattern.len();
        if m == 0 {
            return Some(0);
        }
        if m > text.len() {
            return None;
        }

        let mut shift = 0;
        while shift + m <= text.len() {
            // `j` counts bytes still unmatched; compare pattern[j - 1].
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }
            if j == 0 {
                return Some(shift);
            }

            let mismatch = j - 1;
            let bad_character = match self.last_occurrence[usize::from(text[shift + mismatch])] {
                Some(last) if last < mismatch => mismatch - last,
                Some(_) => 1,
                None => mismatch + 1,
            };
            shift += bad_character.max(self.good_suffix[j]);
        }
        None
    }

    /// True iff the pattern occurs in `text`
    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find(text).is_some()
    }
}

/// Strong good-suffix shifts, indexed by the length of the unmatched
/// prefix (`0..=m`).
pub fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    // border[i]: start of the widest border of pattern[i..]
    let mut border = vec![0usize; m + 1];

    // Matched suffix reappears elsewhere in the pattern.
    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Only a prefix of the pattern matches a suffix of the matched part.
    let mut j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }
    shift
}

/// One-shot containment check.
pub fn contains(text: &[u8], pattern: &[u8]) -> bool {
    BoyerMoore::new(pattern).is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_suffix_table() {
        assert_eq!(good_suffix_table(b"ab"), vec![2, 2, 1]);
        assert_eq!(good_suffix_table(b"aa"), vec![1, 1, 2]);
        assert!(good_suffix_table(b"abbabab").iter().all(|&s| s >= 1));
    }

    #[test]
    fn test_bad_character_table() {
        let bm = BoyerMoore::new(b"abca");
        assert_eq!(bm.last_occurrence[usize::from(b'a')], Some(3));
        assert_eq!(bm.last_occurrence[usize::from(b'b')], Some(1));
        assert_eq!(bm.last_occurrence[usize::from(b'z')], None);
    }

    #[test]
    fn test_boyer_moore_find() {
        let bm = BoyerMoore::new(b"abab");
        assert_eq!(bm.find(b"abaabababa"), Some(3));
        assert_eq!(bm.find(b"xxxxabab"), Some(4));
        assert_eq!(bm.find(b"abba"), None);
        assert_eq!(bm.pattern(), b"abab");
    }

    #[test]
    fn test_boyer_moore_repetitive_text() {
        assert_eq!(BoyerMoore::new(b"aab").find(b"aaaaaaab"), Some(5));
        assert_eq!(BoyerMoore::new(b"baa").find(b"aaaabaa"), Some(4));
        assert_eq!(BoyerMoore::new(b"aaaa").find(b"aaabaaab"), None);
    }

    #[test]
    fn test_boyer_moore_edge_cases() {
        assert!(contains(b"", b""));
        assert!(contains(b"text", b""));
        assert!(!contains(b"", b"x"));
        assert!(!contains(b"ab", b"abc"));
        assert!(contains(b"blue hat", b"blue hat"));
    }

    #[test]
    fn test_boyer_moore_non_ascii() {
        let text = "caf\u{e9} cr\u{e8}me".as_bytes();
        assert!(contains(text, "cr\u{e8}".as_bytes()));
        assert!(!contains(text, "cr\u{e9}".as_bytes()));
    }
}
