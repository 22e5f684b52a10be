//! Substring matching for pattern-range queries.
//!
//! ## Contract
//!
//! `contains(text, pattern)` is true iff `pattern` occurs as a contiguous
//! substring of `text`:
//!
//! - The empty pattern matches every text, including the empty text
//! - A non-empty pattern never matches the empty text
//! - A pattern longer than the text never matches
//!
//! Every [`MatchAlgorithm`] satisfies the same contract; results never
//! depend on which one a [`PatternMatcher`] was built with. Matching is
//! byte-wise over UTF-8, which agrees with `str::contains`.
//!
//! ## Example
//!
//! ```
//! use product_catalog::matcher::{MatchAlgorithm, PatternMatcher};
//!
//! let matcher = PatternMatcher::new(MatchAlgorithm::Kmp);
//! assert!(matcher.contains("red shoe", "shoe"));
//!
//! // Compile once, scan many descriptions
//! let compiled = matcher.compile("hat");
//! assert!(compiled.is_match("blue hat"));
//! assert!(!compiled.is_match("red shoe"));
//! ```

pub mod boyer_moore;
pub mod kmp;
pub mod naive;

use std::fmt;
use std::str::FromStr;

pub use boyer_moore::BoyerMoore;
pub use kmp::Kmp;

use crate::error::CatalogError;

/// Substring search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchAlgorithm {
    /// Window-by-window comparison, O(n·m)
    Naive,
    /// Knuth–Morris–Pratt, O(n + m)
    Kmp,
    /// Boyer–Moore with bad-character and good-suffix shifts
    #[default]
    BoyerMoore,
}

impl MatchAlgorithm {
    /// Every algorithm, in declaration order
    pub const ALL: [MatchAlgorithm; 3] = [
        MatchAlgorithm::Naive,
        MatchAlgorithm::Kmp,
        MatchAlgorithm::BoyerMoore,
    ];

    /// Stable name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            MatchAlgorithm::Naive => "naive",
            MatchAlgorithm::Kmp => "kmp",
            MatchAlgorithm::BoyerMoore => "boyer-moore",
        }
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchAlgorithm {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(MatchAlgorithm::Naive),
            "kmp" => Ok(MatchAlgorithm::Kmp),
            "boyer-moore" | "boyer_moore" | "bm" => Ok(MatchAlgorithm::BoyerMoore),
            other => Err(CatalogError::InvalidConfig(format!(
                "unknown match algorithm {other:?}"
            ))),
        }
    }
}

/// Substring predicate with the algorithm fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternMatcher {
    algorithm: MatchAlgorithm,
}

impl PatternMatcher {
    /// Create a matcher using `algorithm`
    pub fn new(algorithm: MatchAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The algorithm in use
    #[inline]
    pub fn algorithm(&self) -> MatchAlgorithm {
        self.algorithm
    }

    /// Precompute the pattern's tables for repeated scans
    pub fn compile(&self, pattern: &str) -> CompiledPattern {
        let bytes = pattern.as_bytes();
        match self.algorithm {
            MatchAlgorithm::Naive => CompiledPattern::Naive(bytes.to_vec()),
            MatchAlgorithm::Kmp => CompiledPattern::Kmp(Kmp::new(bytes)),
            MatchAlgorithm::BoyerMoore => CompiledPattern::BoyerMoore(BoyerMoore::new(bytes)),
        }
    }

    /// True iff `pattern` occurs in `text`
    pub fn contains(&self, text: &str, pattern: &str) -> bool {
        match self.algorithm {
            MatchAlgorithm::Naive => naive::contains(text.as_bytes(), pattern.as_bytes()),
            MatchAlgorithm::Kmp => kmp::contains(text.as_bytes(), pattern.as_bytes()),
            MatchAlgorithm::BoyerMoore => boyer_moore::contains(text.as_bytes(), pattern.as_bytes()),
        }
    }
}

/// A pattern with its search tables built.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    Naive(Vec<u8>),
    Kmp(Kmp),
    BoyerMoore(BoyerMoore),
}

impl CompiledPattern {
    /// First byte offset of the pattern in `text`
    pub fn find(&self, text: &str) -> Option<usize> {
        let text = text.as_bytes();
        match self {
            CompiledPattern::Naive(pattern) => naive::find(text, pattern),
            CompiledPattern::Kmp(kmp) => kmp.find(text),
            CompiledPattern::BoyerMoore(bm) => bm.find(text),
        }
    }

    /// True iff the pattern occurs in `text`
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// The raw pattern bytes
    pub fn pattern(&self) -> &[u8] {
        match self {
            CompiledPattern::Naive(pattern) => pattern.as_slice(),
            CompiledPattern::Kmp(kmp) => kmp.pattern(),
            CompiledPattern::BoyerMoore(bm) => bm.pattern(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&str, &str, bool)] = &[
        ("", "", true),
        ("red shoe", "", true),
        ("", "red", false),
        ("red", "red shoe", false),
        ("red shoe", "red", true),
        ("red shoe", "shoe", true),
        ("red shoe", "d s", true),
        ("red shoe", "Red", false),
        ("blue hat", "hat", true),
        ("abababca", "ababca", true),
        ("aaaaaaaaab", "aaab", true),
        ("aaaaaaaaaa", "aaab", false),
        ("mississippi", "issip", true),
        ("mississippi", "issipi", false),
    ];

    #[test]
    fn test_all_algorithms_agree_on_cases() {
        for algorithm in MatchAlgorithm::ALL {
            let matcher = PatternMatcher::new(algorithm);
            for &(text, pattern, expected) in CASES {
                assert_eq!(
                    matcher.contains(text, pattern),
                    expected,
                    "{algorithm} on ({text:?}, {pattern:?})"
                );
                assert_eq!(matcher.compile(pattern).is_match(text), expected);
            }
        }
    }

    #[test]
    fn test_compiled_find_offsets() {
        for algorithm in MatchAlgorithm::ALL {
            let compiled = PatternMatcher::new(algorithm).compile("issi");
            assert_eq!(compiled.find("mississippi"), Some(1), "{algorithm}");
            assert_eq!(compiled.pattern(), b"issi");
        }
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("kmp".parse::<MatchAlgorithm>().unwrap(), MatchAlgorithm::Kmp);
        assert_eq!("NAIVE".parse::<MatchAlgorithm>().unwrap(), MatchAlgorithm::Naive);
        assert_eq!(
            "boyer-moore".parse::<MatchAlgorithm>().unwrap(),
            MatchAlgorithm::BoyerMoore
        );
        assert!("rabin-karp".parse::<MatchAlgorithm>().is_err());
    }

    #[test]
    fn test_algorithm_display_roundtrip() {
        for algorithm in MatchAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<MatchAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_default_is_boyer_moore() {
        assert_eq!(PatternMatcher::default().algorithm(), MatchAlgorithm::BoyerMoore);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_algorithms_agree(text in "[ab ]{0,40}", pattern in "[ab ]{0,6}") {
                let expected = text.contains(pattern.as_str());
                for algorithm in MatchAlgorithm::ALL {
                    let matcher = PatternMatcher::new(algorithm);
                    prop_assert_eq!(matcher.contains(&text, &pattern), expected);
                    prop_assert_eq!(matcher.compile(&pattern).find(&text), text.find(pattern.as_str()));
                }
            }

            #[test]
            fn prop_algorithms_agree_unicode(text in "\\PC{0,30}", pattern in "\\PC{0,4}") {
                let expected = text.contains(pattern.as_str());
                for algorithm in MatchAlgorithm::ALL {
                    prop_assert_eq!(PatternMatcher::new(algorithm).contains(&text, &pattern), expected);
                }
            }
        }
    }
}
