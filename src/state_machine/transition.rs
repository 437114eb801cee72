//! Pure state transition function
//!
//! Given the current state, an event and a random source, computes the next
//! state, the companion's reply and the effects the session must run. No I/O
//! happens here; with a seeded random source the output is fully determined.

use super::{ConvState, Effect, Event};
use crate::bank::bank_for;
use crate::intent::{classify, is_greeting, Intent};
use crate::name_capture::capture_name;
use crate::persona::{onboarding_reply, personalize, WELCOME_MESSAGE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a reply's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplySource {
    /// Fixed session welcome
    Welcome,
    /// Fixed template sent when a name is first captured
    Onboarding,
    /// Drawn from the bank of `intent`
    Bank { intent: Intent },
}

/// The companion's answer to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub reply: Reply,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(state: ConvState, reply: Reply) -> Self {
        Self {
            new_state: state,
            reply,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Utterance is empty or whitespace-only")]
    InvalidInput,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// # Errors
///
/// `InvalidInput` for a blank user message, `InvalidTransition` when a
/// welcome is requested after the user has already introduced themselves.
/// The state is left untouched in both cases.
pub fn transition<R: Rng + ?Sized>(
    state: &ConvState,
    event: Event,
    rng: &mut R,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Session start
        // ============================================================
        (ConvState::NotIntroduced, Event::SessionStarted) => {
            let reply = Reply {
                text: WELCOME_MESSAGE.to_string(),
                source: ReplySource::Welcome,
            };
            Ok(TransitionResult::new(ConvState::NotIntroduced, reply)
                .with_effect(Effect::record_companion_message(WELCOME_MESSAGE)))
        }

        (ConvState::Introduced { .. }, Event::SessionStarted) => Err(
            TransitionError::InvalidTransition("session already has an introduced user".into()),
        ),

        // ============================================================
        // User messages
        // ============================================================
        (_, Event::UserMessage { text }) if text.trim().is_empty() => {
            Err(TransitionError::InvalidInput)
        }

        // Name capture takes priority over everything else, once
        (ConvState::NotIntroduced, Event::UserMessage { text }) => {
            if let Some(name) = capture_name(&text) {
                let name = name.to_string();
                let reply = Reply {
                    text: onboarding_reply(&name),
                    source: ReplySource::Onboarding,
                };
                return Ok(finish_turn(
                    ConvState::Introduced { name: name.clone() },
                    text,
                    reply,
                )
                .with_effect(Effect::NameCaptured { name }));
            }

            // Greetings only short-circuit before introduction
            let intent = if is_greeting(&text) {
                Intent::Greeting
            } else {
                classify(&text)
            };
            let reply = Reply {
                text: bank_for(intent).choose(rng).to_string(),
                source: ReplySource::Bank { intent },
            };
            Ok(finish_turn(ConvState::NotIntroduced, text, reply))
        }

        // Later introductions are ignored; the text is classified like any other
        (ConvState::Introduced { name }, Event::UserMessage { text }) => {
            let intent = classify(&text);
            let reply = Reply {
                text: personalize(name, bank_for(intent).choose(rng)),
                source: ReplySource::Bank { intent },
            };
            Ok(finish_turn(
                ConvState::Introduced { name: name.clone() },
                text,
                reply,
            ))
        }
    }
}

/// Record both sides of a user turn
fn finish_turn(state: ConvState, user_text: String, reply: Reply) -> TransitionResult {
    let companion_text = reply.text.clone();
    TransitionResult::new(state, reply)
        .with_effect(Effect::record_user_message(user_text))
        .with_effect(Effect::record_companion_message(companion_text))
}
