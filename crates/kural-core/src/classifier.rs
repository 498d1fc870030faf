use kural_schema::{Classification, Emotion};

/// Greeting phrases. Checked before any emotion keyword; a greeting always
/// wins over co-occurring emotion words.
const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Emotion keyword table. This is a priority list, not a scored classifier:
/// iteration order is the `Emotion` declaration order and the first emotion
/// with any keyword hit wins. Keep it an ordered slice, never a map.
///
/// Matching is plain substring containment, without word boundaries. That
/// means "mad" also hits inside longer words; this mirrors the behavior the
/// service has always had and changing it would silently reclassify inputs.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "happy",
            "joy",
            "cheerful",
            "excited",
            "celebrate",
            "smile",
            "laugh",
        ],
    ),
    (
        Emotion::Sadness,
        &[
            "sad", "depressed", "down", "blue", "cry", "tears", "grief", "mourn",
        ],
    ),
    (
        Emotion::Anger,
        &[
            "angry",
            "mad",
            "furious",
            "rage",
            "irritated",
            "annoyed",
            "frustrated",
        ],
    ),
    (
        Emotion::Fear,
        &[
            "afraid", "scared", "fear", "anxious", "worried", "nervous", "panic",
        ],
    ),
    (
        Emotion::Love,
        &[
            "love",
            "adore",
            "cherish",
            "romance",
            "affection",
            "care",
            "devotion",
        ],
    ),
    (
        Emotion::Forgiveness,
        &[
            "forgive",
            "forgiveness",
            "pardon",
            "excuse",
            "apologize",
            "sorry",
        ],
    ),
    (
        Emotion::Strength,
        &[
            "strong",
            "power",
            "courage",
            "brave",
            "mighty",
            "resilient",
            "tough",
        ],
    ),
    (
        Emotion::Peace,
        &[
            "peace", "calm", "serene", "tranquil", "quiet", "still", "harmony",
        ],
    ),
    (
        Emotion::Gratitude,
        &[
            "grateful",
            "thankful",
            "appreciate",
            "blessed",
            "gratitude",
            "thanks",
        ],
    ),
    (
        Emotion::Hope,
        &[
            "hope", "hopeful", "optimistic", "positive", "future", "dream", "aspire",
        ],
    ),
];

/// Keyword-containment classifier over the fixed emotion taxonomy.
#[derive(Debug, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify free text. Total over any string; empty/whitespace input is
    /// rejected upstream by the caller.
    pub fn classify(&self, text: &str) -> Classification {
        let lower = text.to_lowercase();

        if GREETING_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
            return Classification::Greeting;
        }

        for (emotion, keywords) in EMOTION_KEYWORDS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return Classification::Emotion(*emotion);
            }
        }

        Classification::General
    }
}
