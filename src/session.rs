//! Chat session: one engine plus its transcript
//!
//! A session is what the presentation layer holds on to. It feeds user text
//! to the engine, executes the resulting effects against the transcript and
//! hands back the structured reply.

use crate::config::CompanionConfig;
use crate::engine::{Engine, ReplyResult};
use crate::persona::{introduced_input_hint, ANONYMOUS_INPUT_HINT};
use crate::state_machine::{ConversationState, Effect, Event, TransitionError};
use crate::transcript::{Message, Transcript};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One continuous conversation
#[derive(Debug)]
pub struct Session<R = StdRng> {
    id: String,
    created_at: DateTime<Utc>,
    engine: Engine<R>,
    transcript: Transcript,
}

/// Open a session with settings from the environment
#[must_use]
pub fn create_session() -> Session {
    Session::create(&CompanionConfig::from_env())
}

impl Session<StdRng> {
    #[must_use]
    pub fn create(config: &CompanionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.welcome)
    }
}

impl<R: Rng> Session<R> {
    /// Open a session around an explicit random source
    #[must_use]
    pub fn with_rng(rng: R, welcome: bool) -> Self {
        let mut session = Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            engine: Engine::with_rng(rng),
            transcript: Transcript::new(),
        };
        tracing::info!(session_id = %session.id, welcome, "Chat session created");

        if welcome {
            session.welcome();
        }
        session
    }

    /// Record the welcome message; refused once the user is introduced
    fn welcome(&mut self) {
        match self.engine.apply(Event::SessionStarted) {
            Ok(result) => self.execute(&result.effects),
            Err(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "Welcome message not recorded");
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn state(&self) -> ConversationState {
        self.engine.state().snapshot()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    /// Placeholder text for the message input box
    #[must_use]
    pub fn input_hint(&self) -> String {
        match self.engine.state().name() {
            Some(name) => introduced_input_hint(name),
            None => ANONYMOUS_INPUT_HINT.to_string(),
        }
    }

    /// Answer one user utterance and record both messages.
    ///
    /// # Errors
    ///
    /// `TransitionError::InvalidInput` for blank input. Nothing is recorded
    /// and the state is unchanged.
    pub fn respond(&mut self, utterance: &str) -> Result<ReplyResult, TransitionError> {
        let result = self.engine.apply(Event::user_message(utterance))?;
        self.execute(&result.effects);

        tracing::debug!(
            session_id = %self.id,
            source = ?result.reply.source,
            introduced = self.engine.state().is_introduced(),
            "Reply generated"
        );
        Ok(self.engine.reply_result(result))
    }

    /// Boundary entry point for raw input box contents: trims, and quietly
    /// ignores blank submissions.
    ///
    /// # Errors
    ///
    /// None in practice; the error type is shared with [`Session::respond`].
    pub fn submit(&mut self, raw: &str) -> Result<Option<ReplyResult>, TransitionError> {
        let text = raw.trim();
        if text.is_empty() {
            tracing::debug!(session_id = %self.id, "Ignoring blank submission");
            return Ok(None);
        }
        self.respond(text).map(Some)
    }

    fn execute(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::RecordMessage { sender, text } => {
                    let message = self.transcript.push(*sender, text.as_str());
                    tracing::trace!(
                        session_id = %self.id,
                        message_id = %message.id,
                        sender = ?message.sender,
                        "Message recorded"
                    );
                }
                Effect::NameCaptured { .. } => {
                    tracing::info!(session_id = %self.id, "User introduced themselves");
                }
            }
        }
    }
}
