//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::bank::bank_for;
use crate::intent::Intent;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}"
}

fn arb_trigger() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("I am"),
        Just("i'm"),
        Just("My name is"),
        Just("call me"),
        Just("I AM"),
    ]
}

fn arb_introduction() -> impl Strategy<Value = (String, String)> {
    // Lead-in alphabet cannot spell any trigger phrase
    ("[bdfgkoqtuvwxz ]{0,10}", arb_trigger(), arb_name())
        .prop_map(|(lead, trigger, name)| (format!("{lead}{trigger} {name}"), name))
}

/// Free text that never contains an introduction phrase
fn arb_plain_text() -> impl Strategy<Value = String> {
    "[a-z ]{0,40}"
        .prop_filter("no introduction phrase", |s| crate::name_capture::capture_name(s).is_none())
        .prop_filter("not blank", |s| !s.trim().is_empty())
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::NotIntroduced),
        arb_name().prop_map(|name| ConvState::Introduced { name }),
    ]
}

fn bank_reply_body<'a>(state: &ConvState, text: &'a str) -> Option<&'a str> {
    match state {
        ConvState::NotIntroduced => Some(text),
        ConvState::Introduced { name } => text.strip_prefix(&format!("{name}, ")),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    // Invariant 1: Introduction from a fresh state captures the name
    #[test]
    fn prop_introduction_captures_name((text, name) in arb_introduction(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = transition(&ConvState::NotIntroduced, Event::user_message(text), &mut rng).unwrap();

        prop_assert_eq!(&result.new_state, &ConvState::Introduced { name: name.clone() });
        prop_assert_eq!(result.reply.source, ReplySource::Onboarding);
        prop_assert!(result.reply.text.contains(&name));
    }

    // Invariant 2: Introduced is terminal and the name never changes
    #[test]
    fn prop_name_is_never_overwritten(
        name in arb_name(),
        (text, _) in arb_introduction(),
        seed in any::<u64>()
    ) {
        let state = ConvState::Introduced { name: name.clone() };
        let mut rng = StdRng::seed_from_u64(seed);
        let result = transition(&state, Event::user_message(text), &mut rng).unwrap();

        let prefix = format!("{name}, ");
        prop_assert_eq!(result.new_state, state);
        prop_assert!(result.reply.text.starts_with(&prefix));
    }

    // Invariant 3: Every bank reply is an exact member of its bank, prefixed
    // with the name exactly when introduced
    #[test]
    fn prop_bank_reply_membership(
        state in arb_state(),
        text in arb_plain_text(),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = transition(&state, Event::user_message(text), &mut rng).unwrap();

        match result.reply.source {
            ReplySource::Bank { intent } => {
                let body = bank_reply_body(&state, &result.reply.text);
                prop_assert!(body.is_some(), "missing name prefix: {}", result.reply.text);
                prop_assert!(bank_for(intent).contains(body.unwrap()));
            }
            other => prop_assert!(false, "unexpected source {:?}", other),
        }
    }

    // Invariant 4: Greeting bank is unreachable once introduced
    #[test]
    fn prop_no_greeting_after_introduction(
        name in arb_name(),
        text in arb_plain_text(),
        seed in any::<u64>()
    ) {
        let state = ConvState::Introduced { name };
        let mut rng = StdRng::seed_from_u64(seed);
        let result = transition(&state, Event::user_message(text), &mut rng).unwrap();
        prop_assert_ne!(result.reply.source, ReplySource::Bank { intent: Intent::Greeting });
    }

    // Invariant 5: Blank input is rejected in every state
    #[test]
    fn prop_blank_input_rejected(state in arb_state(), text in "[ \t\n]{0,8}") {
        let mut rng = StdRng::seed_from_u64(0);
        let result = transition(&state, Event::user_message(text), &mut rng);
        prop_assert_eq!(result.unwrap_err(), TransitionError::InvalidInput);
    }

    // Invariant 6: Every accepted user turn records exactly one user and one
    // companion message, in that order
    #[test]
    fn prop_turn_records_both_messages(
        state in arb_state(),
        text in arb_plain_text(),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = transition(&state, Event::user_message(text.clone()), &mut rng).unwrap();

        let recorded: Vec<_> = result
            .effects
            .iter()
            .filter_map(|e| match e {
                Effect::RecordMessage { sender, text } => Some((*sender, text.clone())),
                Effect::NameCaptured { .. } => None,
            })
            .collect();
        prop_assert_eq!(
            recorded,
            vec![
                (crate::transcript::Sender::User, text),
                (crate::transcript::Sender::Companion, result.reply.text.clone()),
            ]
        );
    }

    // Invariant 7: Same seed and input give the same output
    #[test]
    fn prop_seeded_transition_is_deterministic(
        state in arb_state(),
        text in arb_plain_text(),
        seed in any::<u64>()
    ) {
        let a = transition(&state, Event::user_message(text.clone()), &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = transition(&state, Event::user_message(text), &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a.new_state, b.new_state);
        prop_assert_eq!(a.reply, b.reply);
        prop_assert_eq!(a.effects, b.effects);
    }
}
