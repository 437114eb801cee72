//! Canned reply banks, one per intent

use crate::intent::Intent;
use rand::seq::SliceRandom;
use rand::Rng;

/// A fixed, non-empty list of replies for one intent
#[derive(Debug, Clone, Copy)]
pub struct ResponseBank {
    replies: &'static [&'static str],
}

impl ResponseBank {
    /// Fails const evaluation of the bank statics when `replies` is empty.
    const fn new(replies: &'static [&'static str]) -> Self {
        assert!(!replies.is_empty(), "response bank must not be empty");
        Self { replies }
    }

    #[must_use]
    pub fn replies(&self) -> &'static [&'static str] {
        self.replies
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.replies.contains(&text)
    }

    /// Uniform pick over the bank
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.replies.choose(rng).copied().unwrap_or_default()
    }
}

static GREETING: ResponseBank = ResponseBank::new(&[
    "Hello, beloved child of God! How wonderful to meet you. How would you like to start your spiritual journey today?",
    "Greetings in the name of our Lord! I'm here to walk with you on your faith journey. What's on your heart today?",
    "Peace be with you! I'm blessed to be your spiritual companion today. How can I help nurture your soul?",
]);

static ENCOURAGEMENT: ResponseBank = ResponseBank::new(&[
    "Remember, God has not given you a spirit of fear, but of power, love, and sound mind. (2 Timothy 1:7)",
    "The Lord your God is with you wherever you go. He will never leave you nor forsake you. (Joshua 1:9)",
    "Cast all your anxiety on Him because He cares for you. (1 Peter 5:7)",
]);

static LONELINESS: ResponseBank = ResponseBank::new(&[
    "Here's a prayer for loneliness: 'Heavenly Father, I feel alone right now, but I know You are always with me. Help me feel Your presence and surround me with Your love. Connect me with people who will encourage my faith. In Jesus' name, Amen.'",
    "When you feel lonely, remember: 'The Lord your God goes with you; he will never leave you nor forsake you.' (Deuteronomy 31:6). Try this prayer: 'Lord, fill this emptiness with Your love and help me find community in You.'",
    "Prayer for loneliness: 'Dear God, even when I feel isolated, help me remember that You are my constant companion. Show me ways to connect with others and be a light in someone else's darkness. Amen.'",
]);

static WISDOM: ResponseBank = ResponseBank::new(&[
    "Trust in the Lord with all your heart and lean not on your own understanding. (Proverbs 3:5)",
    "For I know the plans I have for you, declares the Lord, plans to prosper you and not to harm you. (Jeremiah 29:11)",
    "Be still and know that I am God. (Psalm 46:10)",
]);

static PRAYER: ResponseBank = ResponseBank::new(&[
    "Let's pray together. Heavenly Father, we come before You with grateful hearts...",
    "Would you like to pray about something specific? I'm here to lift your concerns to the Lord.",
    "Prayer is our direct line to God. What would you like to bring before His throne today?",
]);

/// The bank backing an intent
#[must_use]
pub fn bank_for(intent: Intent) -> &'static ResponseBank {
    match intent {
        Intent::Greeting => &GREETING,
        Intent::Encouragement => &ENCOURAGEMENT,
        Intent::Loneliness => &LONELINESS,
        Intent::Wisdom => &WISDOM,
        Intent::Prayer => &PRAYER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_every_intent_has_replies() {
        for intent in Intent::ALL {
            assert!(!bank_for(intent).replies().is_empty(), "{intent}");
        }
    }

    #[test]
    fn test_banks_are_disjoint() {
        let mut seen = HashSet::new();
        for intent in Intent::ALL {
            for reply in bank_for(intent).replies() {
                assert!(seen.insert(*reply), "duplicate reply across banks: {reply}");
            }
        }
    }

    #[test]
    fn test_choose_stays_in_bank() {
        let mut rng = StdRng::seed_from_u64(7);
        for intent in Intent::ALL {
            let bank = bank_for(intent);
            for _ in 0..50 {
                assert!(bank.contains(bank.choose(&mut rng)));
            }
        }
    }

    #[test]
    fn test_choose_reaches_every_reply() {
        let mut rng = StdRng::seed_from_u64(42);
        let bank = bank_for(Intent::Wisdom);
        let picked: HashSet<_> = (0..200).map(|_| bank.choose(&mut rng)).collect();
        assert_eq!(picked.len(), bank.replies().len());
    }

    #[test]
    fn test_choose_is_deterministic_for_a_seed() {
        let bank = bank_for(Intent::Prayer);
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(bank.choose(&mut a), bank.choose(&mut b));
        }
    }

    #[test]
    fn test_single_reply_bank_always_picks_it() {
        let bank = ResponseBank::new(&["Be still."]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(bank.choose(&mut rng), "Be still.");
        }
    }

    #[test]
    fn test_greeting_bank_has_three_entries() {
        assert_eq!(bank_for(Intent::Greeting).replies().len(), 3);
    }
}
