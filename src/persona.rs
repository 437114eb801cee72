//! Fixed companion texts: welcome, onboarding and input hints

use serde::{Deserialize, Serialize};

/// First companion message of a new session
pub const WELCOME_MESSAGE: &str = "Welcome to DSCPL! I'm your spiritual companion, here to guide you through devotionals, prayers, meditation, and accountability. Feel free to introduce yourself or let me know how I can help you grow in faith today! 🙏";

/// Input hint shown before the user has introduced themselves
pub const ANONYMOUS_INPUT_HINT: &str = "Tell me your name or ask for spiritual guidance...";

/// Activities offered right after the user introduces themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Devotional,
    Prayer,
    Meditation,
    Chat,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Devotional,
        Activity::Prayer,
        Activity::Meditation,
        Activity::Chat,
    ];

    /// Phrase used when offering the activity
    #[must_use]
    pub fn offer(self) -> &'static str {
        match self {
            Activity::Devotional => "a devotional",
            Activity::Prayer => "prayer time",
            Activity::Meditation => "meditation",
            Activity::Chat => "just to chat about what's on your heart",
        }
    }
}

/// "a, b, c, or d"
fn offer_list() -> String {
    let offers: Vec<&str> = Activity::ALL.into_iter().map(Activity::offer).collect();
    match offers.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}

/// Reply sent once, when a name is first captured
#[must_use]
pub fn onboarding_reply(name: &str) -> String {
    format!(
        "Hello {name}! What a beautiful name. I'll remember that. How would you like to start your day in God's presence? Would you like {}? I'm here to support your spiritual journey.",
        offer_list()
    )
}

/// Prefix a bank reply with the user's name
#[must_use]
pub fn personalize(name: &str, reply: &str) -> String {
    format!("{name}, {reply}")
}

#[must_use]
pub fn introduced_input_hint(name: &str) -> String {
    format!("Share what's on your heart, {name}...")
}
