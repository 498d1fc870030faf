use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use kural_schema::{ChatReply, Classification, Kural};

use crate::catalog::Catalog;

/// Opening lines for greeting replies.
const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm here to help you find wisdom through Thirukkural. What's on your mind today?",
    "Welcome! I sense you're seeking guidance. How can I help you today?",
    "Greetings! I'm ready to share ancient wisdom that speaks to your heart. What brings you here?",
];

/// Acknowledgement lines for emotion/general replies.
const GENERAL_REPLIES: &[&str] = &[
    "That's a beautiful thought. Let me share some wisdom that might resonate with you.",
    "I understand what you're going through. Here's some guidance from ancient wisdom.",
    "Your feelings are valid. Let me offer you some perspective from Thirukkural.",
];

const FOLLOW_UPS: &[&str] = &[
    "Is there anything specific you'd like to explore further?",
    "Would you like to dive deeper into this topic?",
    "How does this wisdom speak to your current situation?",
];

/// Turns a classification into a reply: a phrasing from the matching pool
/// plus a kural drawn from the matching candidate set.
///
/// The random source is injected per call so callers control determinism;
/// each call is an independent draw.
pub struct Composer {
    catalog: Arc<Catalog>,
}

impl Composer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn compose<R: Rng>(&self, classification: Classification, rng: &mut R) -> ChatReply {
        let (message_pool, kural) = match classification {
            Classification::Greeting => (GREETING_REPLIES, self.pick_any(rng)),
            Classification::Emotion(emotion) => {
                let kurals = self.catalog.kurals_for(emotion);
                // Non-empty by the catalog's construction invariant.
                let kural = kurals
                    .choose(rng)
                    .cloned()
                    .expect("catalog categories are never empty");
                (GENERAL_REPLIES, kural)
            }
            Classification::General => (GENERAL_REPLIES, self.pick_any(rng)),
        };

        ChatReply {
            message: pick_phrase(message_pool, rng),
            kural,
            follow_up: pick_phrase(FOLLOW_UPS, rng),
        }
    }

    fn pick_any<R: Rng>(&self, rng: &mut R) -> Kural {
        self.catalog
            .all()
            .choose(rng)
            .map(|(_, kural)| kural.clone())
            .expect("catalog union is never empty")
    }
}

fn pick_phrase<R: Rng>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng)
        .expect("phrase pools are non-empty constants")
        .to_string()
}
