use anyhow::anyhow;

use kural_schema::{Emotion, Kural};

use crate::error::CoreError;

/// The immutable kural taxonomy: every emotion owns an ordered, non-empty
/// list of kurals. Built once at startup and shared read-only.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<(Emotion, Vec<Kural>)>,
    /// Flattened union across all emotions, cached at construction so the
    /// greeting/general fallback pools are not rebuilt per request.
    all: Vec<(Emotion, Kural)>,
}

impl Catalog {
    /// Build the catalog from the built-in data. Fails fast if any emotion
    /// ends up with zero kurals, since random selection over an empty list
    /// is undefined.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_entries(builtin_entries())
    }

    fn from_entries(entries: Vec<(Emotion, Vec<Kural>)>) -> Result<Self, CoreError> {
        for emotion in Emotion::ALL {
            let kurals = entries
                .iter()
                .find(|(e, _)| *e == emotion)
                .map(|(_, k)| k.as_slice())
                .unwrap_or(&[]);
            if kurals.is_empty() {
                return Err(CoreError::Internal(anyhow!(
                    "catalog has no kurals for emotion '{emotion}'"
                )));
            }
        }

        let all = entries
            .iter()
            .flat_map(|(emotion, kurals)| kurals.iter().map(|k| (*emotion, k.clone())))
            .collect();

        Ok(Self { entries, all })
    }

    /// Kurals for one emotion, in declaration order.
    pub fn kurals_for(&self, emotion: Emotion) -> &[Kural] {
        self.entries
            .iter()
            .find(|(e, _)| *e == emotion)
            .map(|(_, kurals)| kurals.as_slice())
            .unwrap_or(&[])
    }

    /// The cached union of all kurals, each paired with its owning emotion.
    pub fn all(&self) -> &[(Emotion, Kural)] {
        &self.all
    }

    /// Emotion names in declaration (priority) order.
    pub fn emotions(&self) -> &'static [Emotion] {
        &Emotion::ALL
    }
}

fn kural(tamil: &str, english: &str, relevance: &str, category: &str) -> Kural {
    Kural {
        tamil: tamil.to_string(),
        english: english.to_string(),
        relevance: relevance.to_string(),
        category: category.to_string(),
    }
}

fn builtin_entries() -> Vec<(Emotion, Vec<Kural>)> {
    vec![
        (
            Emotion::Joy,
            vec![
                kural(
                    "மகிழ்ச்சியே வாழ்க்கையின் மணம்",
                    "Joy is the fragrance of life",
                    "True happiness comes from within and spreads to others",
                    "Emotions",
                ),
                kural(
                    "இன்பம் தரும் செயல்களே இனிய வாழ்க்கை",
                    "Actions that bring joy create a sweet life",
                    "Choose activities that bring genuine happiness to yourself and others",
                    "Emotions",
                ),
            ],
        ),
        (
            Emotion::Sadness,
            vec![
                kural(
                    "துயரம் வளர்க்கும் மனிதனை",
                    "Sorrow nurtures the human soul",
                    "Through sadness, we learn empathy and grow stronger",
                    "Emotions",
                ),
                kural(
                    "கண்ணீர் வழியும் இடத்தில் வளரும் அன்பு",
                    "Love grows where tears flow",
                    "Shared sorrows create deeper bonds and understanding",
                    "Emotions",
                ),
            ],
        ),
        (
            Emotion::Anger,
            vec![
                kural(
                    "கோபம் அழிக்கும் அறிவை",
                    "Anger destroys wisdom",
                    "When angry, step back and breathe before acting",
                    "Emotions",
                ),
                kural(
                    "சினம் தீயின் வழி",
                    "Anger is the path of fire",
                    "Channel anger into positive action rather than destruction",
                    "Emotions",
                ),
            ],
        ),
        (
            Emotion::Fear,
            vec![
                kural(
                    "பயம் வளர்க்கும் வீரம்",
                    "Fear nurtures courage",
                    "Facing fears makes us stronger and more resilient",
                    "Emotions",
                ),
                kural(
                    "அச்சம் தவிர்த்து அறிவு பெறு",
                    "Remove fear and gain wisdom",
                    "Knowledge and understanding dispel unnecessary fears",
                    "Emotions",
                ),
            ],
        ),
        (
            Emotion::Love,
            vec![
                kural(
                    "அன்பின் வழியது உயிர்நிலை",
                    "Love is the way of life",
                    "Love gives meaning to our existence and relationships",
                    "Relationships",
                ),
                kural(
                    "காதல் வாழ்க்கையின் மணம்",
                    "Love is the fragrance of life",
                    "True love enriches both the giver and receiver",
                    "Relationships",
                ),
            ],
        ),
        (
            Emotion::Forgiveness,
            vec![
                kural(
                    "மன்னிப்பு மனிதனின் பெருமை",
                    "Forgiveness is human greatness",
                    "Forgiving others frees your own heart from bitterness",
                    "Ethics",
                ),
                kural(
                    "குற்றம் மன்னித்தல் அறிவின் அடையாளம்",
                    "Forgiving faults is the mark of wisdom",
                    "Forgiveness shows strength, not weakness",
                    "Ethics",
                ),
            ],
        ),
        (
            Emotion::Strength,
            vec![
                kural(
                    "வலிமை மனதில் வளரும்",
                    "Strength grows in the mind",
                    "True strength comes from mental resilience and character",
                    "Wisdom",
                ),
                kural(
                    "தன்னை வென்றவன் உலகை வெல்வான்",
                    "He who conquers himself conquers the world",
                    "Self-mastery is the greatest victory",
                    "Wisdom",
                ),
            ],
        ),
        (
            Emotion::Peace,
            vec![
                kural(
                    "அமைதி மனதின் நிலை",
                    "Peace is the state of mind",
                    "Inner peace comes from acceptance and mindfulness",
                    "Wisdom",
                ),
                kural(
                    "சமாதானம் வாழ்க்கையின் பூ",
                    "Peace is the flower of life",
                    "Peaceful minds create peaceful relationships and communities",
                    "Wisdom",
                ),
            ],
        ),
        (
            Emotion::Gratitude,
            vec![
                kural(
                    "நன்றி வாழ்க்கையின் மணம்",
                    "Gratitude is the fragrance of life",
                    "Gratitude transforms what we have into enough",
                    "Ethics",
                ),
                kural(
                    "கடமை உணர்வு மனிதனின் பெருமை",
                    "Sense of duty is human greatness",
                    "Gratitude leads to service and contribution to others",
                    "Ethics",
                ),
            ],
        ),
        (
            Emotion::Hope,
            vec![
                kural(
                    "நம்பிக்கை வாழ்க்கையின் விளக்கு",
                    "Hope is the lamp of life",
                    "Hope keeps us moving forward even in dark times",
                    "Wisdom",
                ),
                kural(
                    "எதிர்காலம் நம்பிக்கையில் வளரும்",
                    "The future grows in hope",
                    "Hope is the foundation for building a better tomorrow",
                    "Wisdom",
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_emotion_with_at_least_two_kurals() {
        let catalog = Catalog::builtin().unwrap();
        for emotion in Emotion::ALL {
            let kurals = catalog.kurals_for(emotion);
            assert!(
                kurals.len() >= 2,
                "emotion {emotion} has only {} kurals",
                kurals.len()
            );
        }
    }

    #[test]
    fn union_is_flattened_once_and_complete() {
        let catalog = Catalog::builtin().unwrap();
        let expected: usize = Emotion::ALL
            .iter()
            .map(|e| catalog.kurals_for(*e).len())
            .sum();
        assert_eq!(catalog.all().len(), expected);
    }

    #[test]
    fn empty_category_fails_fast() {
        let mut entries = builtin_entries();
        entries.retain(|(e, _)| *e != Emotion::Hope);
        let err = Catalog::from_entries(entries).unwrap_err();
        assert_eq!(err.kind(), "internal");
        assert!(err.to_string().contains("hope"));
    }

    #[test]
    fn emotions_in_declaration_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.emotions().first(), Some(&Emotion::Joy));
        assert_eq!(catalog.emotions().last(), Some(&Emotion::Hope));
    }
}
