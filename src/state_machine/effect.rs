//! Effects produced by state transitions

use crate::transcript::Sender;

/// Effects to be executed by the session after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message to the transcript
    RecordMessage { sender: Sender, text: String },

    /// A name was captured for the first time
    NameCaptured { name: String },
}

impl Effect {
    #[must_use]
    pub fn record_user_message(text: impl Into<String>) -> Self {
        Effect::RecordMessage {
            sender: Sender::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn record_companion_message(text: impl Into<String>) -> Self {
        Effect::RecordMessage {
            sender: Sender::Companion,
            text: text.into(),
        }
    }
}
