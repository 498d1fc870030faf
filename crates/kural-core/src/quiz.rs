use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use kural_schema::{PersonalityType, QuizSubmission};
use kural_store::KeyedStore;

use crate::error::CoreError;

/// Question ids that contribute to personality scoring. Answers to any
/// other question count toward frequencies but never toward the
/// personality type.
const PERSONALITY_QUESTIONS: std::ops::RangeInclusive<i64> = 1..=5;

/// Derived quiz analytics. Always recomputed from the stored submissions;
/// two reads with no intervening submit yield identical output.
#[derive(Debug, Clone, Serialize)]
pub struct QuizAnalytics {
    pub total_responses: usize,
    /// "Q{id}_{letter}" -> occurrence count across all submissions.
    pub answer_frequencies: BTreeMap<String, u64>,
    pub personality_distribution: BTreeMap<PersonalityType, u64>,
}

/// Accepts quiz submissions and computes analytics on demand.
pub struct QuizAggregator {
    store: Arc<dyn KeyedStore<QuizSubmission>>,
}

impl QuizAggregator {
    pub fn new(store: Arc<dyn KeyedStore<QuizSubmission>>) -> Self {
        Self { store }
    }

    /// Persist a submission and return its fresh session id. Empty answer
    /// maps are rejected before anything is stored.
    pub async fn submit(
        &self,
        answers: BTreeMap<String, String>,
    ) -> Result<String, CoreError> {
        if answers.is_empty() {
            return Err(CoreError::InvalidInput("no answers provided".to_string()));
        }

        let session_id = Uuid::new_v4().to_string();
        let submission = QuizSubmission {
            session_id: session_id.clone(),
            total_questions: answers.len(),
            answers,
            timestamp: Utc::now(),
        };
        self.store.append(submission).await?;
        info!(%session_id, "quiz submitted");
        Ok(session_id)
    }

    /// All submissions in insertion order.
    pub async fn all(&self) -> Result<Vec<QuizSubmission>, CoreError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, session_id: &str) -> Result<QuizSubmission, CoreError> {
        self.store
            .get(session_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("quiz response {session_id}")))
    }

    pub async fn analytics(&self) -> Result<QuizAnalytics, CoreError> {
        let submissions = self.store.list().await?;

        let mut answer_frequencies: BTreeMap<String, u64> = BTreeMap::new();
        let mut personality_distribution: BTreeMap<PersonalityType, u64> = BTreeMap::new();

        for submission in &submissions {
            for (question_id, letter) in &submission.answers {
                let key = format!("Q{question_id}_{letter}");
                *answer_frequencies.entry(key).or_insert(0) += 1;
            }
            let personality = personality_for(&submission.answers);
            *personality_distribution.entry(personality).or_insert(0) += 1;
        }

        Ok(QuizAnalytics {
            total_responses: submissions.len(),
            answer_frequencies,
            personality_distribution,
        })
    }
}

/// Classify one submission's answers into a personality type.
///
/// Each of the first five questions maps its letter to a trait counter
/// (A=wisdom, B=compassion, C=strength, D=harmony). The first counter, in
/// that fixed priority order, whose value is >= all others wins the tie.
pub fn personality_for(answers: &BTreeMap<String, String>) -> PersonalityType {
    let count = |letter: &str| -> u32 {
        answers
            .iter()
            .filter(|(question_id, answer)| {
                answer.as_str() == letter && scores_personality(question_id)
            })
            .count() as u32
    };

    let scores = [count("A"), count("B"), count("C"), count("D")];
    let max = scores.iter().copied().max().unwrap_or(0);

    if scores[0] >= max {
        PersonalityType::WiseSeeker
    } else if scores[1] >= max {
        PersonalityType::CompassionateHeart
    } else if scores[2] >= max {
        PersonalityType::StrongLeader
    } else {
        PersonalityType::PeacefulSoul
    }
}

fn scores_personality(question_id: &str) -> bool {
    question_id
        .parse::<i64>()
        .map(|id| PERSONALITY_QUESTIONS.contains(&id))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use kural_store::{InMemoryStore, RecordStore};

    use super::*;

    fn aggregator() -> QuizAggregator {
        QuizAggregator::new(Arc::new(InMemoryStore::new()))
    }

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(q, a)| (q.to_string(), a.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn submit_rejects_empty_answers_without_storing() {
        let store = Arc::new(InMemoryStore::new());
        let quiz = QuizAggregator::new(store.clone());

        let err = quiz.submit(BTreeMap::new()).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_stores_and_get_finds() {
        let quiz = aggregator();
        let id = quiz.submit(answers(&[("1", "A"), ("2", "B")])).await.unwrap();

        let found = quiz.get(&id).await.unwrap();
        assert_eq!(found.session_id, id);
        assert_eq!(found.total_questions, 2);

        let err = quiz.get("no-such-session").await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn analytics_empty_store_is_zeroed_not_an_error() {
        let quiz = aggregator();
        let analytics = quiz.analytics().await.unwrap();
        assert_eq!(analytics.total_responses, 0);
        assert!(analytics.answer_frequencies.is_empty());
        assert!(analytics.personality_distribution.is_empty());
    }

    #[tokio::test]
    async fn analytics_counts_frequencies() {
        let quiz = aggregator();
        quiz.submit(answers(&[("1", "A"), ("2", "B")])).await.unwrap();
        quiz.submit(answers(&[("1", "A"), ("2", "C")])).await.unwrap();

        let analytics = quiz.analytics().await.unwrap();
        assert_eq!(analytics.total_responses, 2);
        assert_eq!(analytics.answer_frequencies["Q1_A"], 2);
        assert_eq!(analytics.answer_frequencies["Q2_B"], 1);
        assert_eq!(analytics.answer_frequencies["Q2_C"], 1);
    }

    #[tokio::test]
    async fn analytics_is_idempotent() {
        let quiz = aggregator();
        quiz.submit(answers(&[("1", "A"), ("5", "D")])).await.unwrap();

        let first = quiz.analytics().await.unwrap();
        let second = quiz.analytics().await.unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn worked_example_wise_seeker() {
        // wisdom=3 dominates compassion=1, strength=1, harmony=0.
        let a = answers(&[("1", "A"), ("2", "A"), ("3", "A"), ("4", "B"), ("5", "C")]);
        assert_eq!(personality_for(&a), PersonalityType::WiseSeeker);
    }

    #[test]
    fn tie_breaks_favor_earlier_trait() {
        // All four counters zero: wisdom wins the >= comparison first.
        assert_eq!(
            personality_for(&answers(&[("9", "A")])),
            PersonalityType::WiseSeeker
        );
        // compassion == strength == 1, wisdom == 0: compassion wins.
        assert_eq!(
            personality_for(&answers(&[("1", "B"), ("2", "C")])),
            PersonalityType::CompassionateHeart
        );
    }

    #[test]
    fn only_first_five_questions_score_personality() {
        // Question 6 would make strength dominant if it counted.
        let a = answers(&[("1", "B"), ("6", "C"), ("7", "C"), ("8", "C")]);
        assert_eq!(personality_for(&a), PersonalityType::CompassionateHeart);
    }

    #[test]
    fn non_numeric_question_ids_never_contribute() {
        let a = answers(&[("abc", "C"), ("1", "D")]);
        assert_eq!(personality_for(&a), PersonalityType::PeacefulSoul);
    }

    #[test]
    fn harmony_dominant_yields_peaceful_soul() {
        let a = answers(&[("1", "D"), ("2", "D"), ("3", "A")]);
        assert_eq!(personality_for(&a), PersonalityType::PeacefulSoul);
    }

    #[tokio::test]
    async fn session_ids_unique_over_ten_thousand_submissions() {
        let quiz = aggregator();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = quiz.submit(answers(&[("1", "A")])).await.unwrap();
            assert!(seen.insert(id), "duplicate session id generated");
        }
    }
}
