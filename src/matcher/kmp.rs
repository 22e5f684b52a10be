//! Knuth–Morris–Pratt substring scan.
//!
//! ## Failure Table
//!
//! `failure[i]` is the length of the longest proper prefix of
//! `pattern[..=i]` that is also its suffix. On a mismatch after `q`
//! matched bytes the scan falls back to `failure[q - 1]` instead of
//! re-reading text, so every text byte is examined a constant number of
//! times (amortized O(n)).

/// Pattern with its precomputed failure table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kmp {
    pattern: Vec<u8>,
    failure: Vec<usize>,
}

impl Kmp {
    /// Build the failure table, O(m)
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            failure: failure_table(pattern),
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

        let mut matched = 0;
        for (i, &byte) in text.iter().enumerate() {
            while matched > 0 && self.pattern[matched] != byte {
                matched = self.failure[matched - 1];
            }
            if self.pattern[matched] == byte {
                matched += 1;
            }
            if matched == m {
                return Some(i + 1 - m);
            }
        }
        None
    }

    /// True iff the pattern occurs in `text`
    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find(text).is_some()
    }
}

/// Prefix-function of `pattern`.
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut failure = vec![0; pattern.len()];
    let mut k = 0;

    for i in 1..pattern.len() {
        while k > 0 && pattern[k] != pattern[i] {
            k = failure[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        failure[i] = k;
    }
    failure
}

/// One-shot containment check.
pub fn contains(text: &[u8], pattern: &[u8]) -> bool {
    Kmp::new(pattern).is_match(text)
}
