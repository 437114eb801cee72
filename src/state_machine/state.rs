//! Conversation state types

use serde::{Deserialize, Serialize};

/// Conversation state
///
/// `Introduced` is terminal: once a name is captured there is no way back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// No name captured yet; greetings are answered from the greeting bank
    #[default]
    NotIntroduced,

    /// Name captured; every reply is prefixed with it
    Introduced { name: String },
}

impl ConvState {
    #[must_use]
    pub fn is_introduced(&self) -> bool {
        matches!(self, ConvState::Introduced { .. })
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            ConvState::NotIntroduced => None,
            ConvState::Introduced { name } => Some(name),
        }
    }

    /// Flat view handed to callers
    #[must_use]
    pub fn snapshot(&self) -> ConversationState {
        ConversationState {
            introduced: self.is_introduced(),
            name: self.name().map(String::from),
        }
    }
}

/// Caller-facing state: `name` is `Some` exactly when `introduced` is true
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationState {
    pub introduced: bool,
    pub name: Option<String>,
}

impl From<&ConvState> for ConversationState {
    fn from(state: &ConvState) -> Self {
        state.snapshot()
    }
}
