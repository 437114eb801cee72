//! Self-introduction detection

use once_cell::sync::Lazy;
use regex::Regex;

static INTRODUCTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Case folding is ASCII-only: no Kelvin sign for K, no long s for s
    Regex::new(r"(?i-u:i am|i'm|my name is|call me)\s+((?-u:[a-zA-Z])+)")
        .expect("introduction pattern is a valid regex")
});

/// Extract the name from the first introduction phrase in `utterance`.
///
/// The token is taken as-is: no capitalization and no plausibility check, so
/// "I am tired" yields `tired`.
#[must_use]
pub fn capture_name(utterance: &str) -> Option<&str> {
    INTRODUCTION_PATTERN
        .captures(utterance)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}
