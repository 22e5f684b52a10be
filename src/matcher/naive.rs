//! Reference substring scan.
//!
//! Compares the pattern against every window of the text, O(n·m) in the
//! worst case. Kept as the correctness baseline for the linear-time scans.

/// First offset of `pattern` in `text`, by direct window comparison.
pub fn find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|window| window == pattern)
}

/// True iff `pattern` occurs in `text`.
pub fn contains(text: &[u8], pattern: &[u8]) -> bool {
    find(text, pattern).is_some()
}
