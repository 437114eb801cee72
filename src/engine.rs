//! Conversation engine: state plus random source

use crate::state_machine::{
    transition, ConvState, ConversationState, Event, ReplySource, TransitionError,
    TransitionResult,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Answer to one user utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyResult {
    pub reply_text: String,
    pub updated_state: ConversationState,
    pub source: ReplySource,
}

/// Owns the conversation state of one session.
///
/// `respond` takes `&mut self`, so turns against one engine are sequential.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    state: ConvState,
    rng: R,
}

impl Engine<StdRng> {
    /// Engine seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine with a reproducible reply sequence
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: ConvState::NotIntroduced,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ConvState {
        &self.state
    }

    /// Produce the next companion reply and advance the state.
    ///
    /// # Errors
    ///
    /// `TransitionError::InvalidInput` for empty or whitespace-only input; the
    /// state is unchanged in that case.
    pub fn respond(&mut self, utterance: &str) -> Result<ReplyResult, TransitionError> {
        let result = self.apply(Event::user_message(utterance))?;
        Ok(self.reply_result(result))
    }

    /// Run one event through the state machine and commit the new state.
    /// Effects are returned for the caller to execute.
    pub(crate) fn apply(&mut self, event: Event) -> Result<TransitionResult, TransitionError> {
        let result = transition(&self.state, event, &mut self.rng)?;
        self.state = result.new_state.clone();
        Ok(result)
    }

    pub(crate) fn reply_result(&self, result: TransitionResult) -> ReplyResult {
        ReplyResult {
            reply_text: result.reply.text,
            updated_state: self.state.snapshot(),
            source: result.reply.source,
        }
    }
}
