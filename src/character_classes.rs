use once_cell::sync::Lazy;
use std::collections::HashSet;

// This is the character set containing just the alphabetic characters
// from the ASCII character set.
pub static ALPHA: Lazy<HashSet<char>> = Lazy::new(|| ('a'..='z').chain('A'..='Z').collect());

// This is the character set containing just numbers.
pub static DIGIT: Lazy<HashSet<char>> = Lazy::new(|| ('0'..='9').collect());

// Characters allowed in protocol, credentials, segments and parameters
// before percent-decoding.  `%` is included so encoded text stays one token.
pub static SAFE: Lazy<HashSet<char>> = Lazy::new(|| {
    ALPHA
        .iter()
        .chain(DIGIT.iter())
        .chain(['_', '-', '.', '+', '!', '*', '\'', '(', ')', '$', '%'].iter())
        .copied()
        .collect()
});

// Characters of a plain (non-bracketed) host name or IPv4 address.
pub static HOST_NAME: Lazy<HashSet<char>> = Lazy::new(|| {
    ALPHA
        .iter()
        .chain(DIGIT.iter())
        .chain(['.', '-'].iter())
        .copied()
        .collect()
});

// Characters allowed between the brackets of an IPv6 host.
pub static IPV6_LITERAL: Lazy<HashSet<char>> = Lazy::new(|| {
    ALPHA
        .iter()
        .chain(DIGIT.iter())
        .chain([':', '%'].iter())
        .copied()
        .collect()
});

// This is the set left alone when percent-encoding a single component.
pub static COMPONENT_NOT_PCT_ENCODED: Lazy<HashSet<char>> = Lazy::new(|| {
    ALPHA
        .iter()
        .chain(DIGIT.iter())
        .chain(['-', '_', '.', '!', '~', '*', '\'', '(', ')'].iter())
        .copied()
        .collect()
});

/// Length in bytes of the longest prefix of `s` made only of characters from
/// `class`.  All classes are ASCII, so the result is always a char boundary.
pub fn run_length(s: &str, class: &HashSet<char>) -> usize {
    s.find(|c: char| !class.contains(&c)).unwrap_or(s.len())
}
