use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single Thirukkural couplet with its English gloss and guidance note.
///
/// The `tamil` text is the natural key: two kurals with identical `tamil`
/// are indistinguishable downstream (feedback grouping relies on this).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kural {
    pub tamil: String,
    pub english: String,
    pub relevance: String,
    pub category: String,
}

/// A possibly partial reference to a kural, as submitted with feedback.
/// Callers may omit any field; grouping only uses `tamil` when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KuralRef {
    #[serde(default)]
    pub tamil: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub relevance: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<Kural> for KuralRef {
    fn from(kural: Kural) -> Self {
        Self {
            tamil: Some(kural.tamil),
            english: Some(kural.english),
            relevance: Some(kural.relevance),
            category: Some(kural.category),
        }
    }
}

/// The fixed emotion taxonomy. Declaration order is the classification
/// priority order: the first emotion with a keyword hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Forgiveness,
    Strength,
    Peace,
    Gratitude,
    Hope,
}

impl Emotion {
    /// All emotions in declaration (priority) order.
    pub const ALL: [Emotion; 10] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Love,
        Emotion::Forgiveness,
        Emotion::Strength,
        Emotion::Peace,
        Emotion::Gratitude,
        Emotion::Hope,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Love => "love",
            Emotion::Forgiveness => "forgiveness",
            Emotion::Strength => "strength",
            Emotion::Peace => "peace",
            Emotion::Gratitude => "gratitude",
            Emotion::Hope => "hope",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or(())
    }
}

/// Outcome of matching user text against the greeting/keyword rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Greeting,
    Emotion(Emotion),
    General,
}

/// A composed chat reply: phrasing plus the selected kural.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    pub kural: Kural,
    pub follow_up: String,
}

/// One recorded chat exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub user: String,
    pub bot: String,
    pub kural: Kural,
    pub timestamp: DateTime<Utc>,
}

/// A stored quiz submission. Append-only: never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub session_id: String,
    /// question-id -> choice letter, e.g. "1" -> "A"
    pub answers: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
    pub total_questions: usize,
}

/// A response rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Positive,
    Negative,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Positive => "positive",
            Rating::Negative => "negative",
        }
    }
}

impl FromStr for Rating {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Rating::Positive),
            "negative" => Ok(Rating::Negative),
            _ => Err(()),
        }
    }
}

/// A stored feedback record. Same append-only lifecycle as quiz submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub feedback_id: String,
    pub user_message: String,
    pub bot_response: String,
    #[serde(default)]
    pub kural: Option<KuralRef>,
    pub feedback: Rating,
    pub timestamp: DateTime<Utc>,
}

/// Derived personality label. Never stored; recomputed from a submission's
/// answers. Declaration order is the tie-break priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PersonalityType {
    #[serde(rename = "The Wise Seeker")]
    WiseSeeker,
    #[serde(rename = "The Compassionate Heart")]
    CompassionateHeart,
    #[serde(rename = "The Strong Leader")]
    StrongLeader,
    #[serde(rename = "The Peaceful Soul")]
    PeacefulSoul,
}

impl PersonalityType {
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::WiseSeeker => "The Wise Seeker",
            PersonalityType::CompassionateHeart => "The Compassionate Heart",
            PersonalityType::StrongLeader => "The Strong Leader",
            PersonalityType::PeacefulSoul => "The Peaceful Soul",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
