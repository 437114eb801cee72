//! Keyword-based intent detection
//!
//! There is no language understanding here: an utterance is lower-cased and
//! checked against an ordered table of substring rules. The first rule with
//! a matching keyword decides the intent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse topic an utterance is mapped to for reply selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Encouragement,
    Loneliness,
    Wisdom,
    Prayer,
}

impl Intent {
    /// All intents, in declaration order
    pub const ALL: [Intent; 5] = [
        Intent::Greeting,
        Intent::Encouragement,
        Intent::Loneliness,
        Intent::Wisdom,
        Intent::Prayer,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Encouragement => "encouragement",
            Intent::Loneliness => "loneliness",
            Intent::Wisdom => "wisdom",
            Intent::Prayer => "prayer",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classification rule: any keyword present selects `intent`
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

impl IntentRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Classification rules in priority order. Greeting is absent on purpose:
/// it is only reachable through [`is_greeting`] before introduction.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["lonely", "loneliness", "alone"],
        intent: Intent::Loneliness,
    },
    IntentRule {
        keywords: &["pray", "prayer"],
        intent: Intent::Prayer,
    },
    IntentRule {
        keywords: &["encourage", "sad", "down"],
        intent: Intent::Encouragement,
    },
    IntentRule {
        keywords: &["wisdom", "guidance", "help"],
        intent: Intent::Wisdom,
    },
];

/// Intent used when no rule matches
pub const FALLBACK_INTENT: Intent = Intent::Encouragement;

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];

/// Classify an utterance. Never fails; unmatched text falls back to
/// [`FALLBACK_INTENT`].
#[must_use]
pub fn classify(utterance: &str) -> Intent {
    let lowered = utterance.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(FALLBACK_INTENT, |rule| rule.intent)
}

/// Whether the utterance contains a greeting keyword.
///
/// Plain substring test, so "this" and "white" count as greetings too.
#[must_use]
pub fn is_greeting(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    GREETING_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
