//! Events that can occur in a conversation

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new session is opened and wants its welcome message
    SessionStarted,

    /// The user submitted an utterance
    UserMessage { text: String },
}

impl Event {
    #[must_use]
    pub fn user_message(text: impl Into<String>) -> Self {
        Event::UserMessage { text: text.into() }
    }
}
