//! DSCPL companion core
//!
//! Scripted conversation logic for a spiritual companion chat: keyword intent
//! detection, a one-time name capture, and canned replies drawn from static
//! banks. Rendering, theming and navigation live in the presentation layer,
//! which only talks to [`Session`].

mod bank;
mod config;
mod engine;
mod intent;
mod name_capture;
mod persona;
mod session;
mod state_machine;
mod telemetry;
mod transcript;

pub use bank::{bank_for, ResponseBank};
pub use config::CompanionConfig;
pub use engine::{Engine, ReplyResult};
pub use intent::{classify, is_greeting, Intent, IntentRule, FALLBACK_INTENT, INTENT_RULES};
pub use name_capture::capture_name;
pub use persona::{onboarding_reply, Activity, ANONYMOUS_INPUT_HINT, WELCOME_MESSAGE};
pub use session::{create_session, Session};
pub use state_machine::{
    transition, ConvState, ConversationState, Effect, Event, Reply, ReplySource,
    TransitionError, TransitionResult,
};
pub use telemetry::init_tracing;
pub use transcript::{Message, Sender, Transcript};
