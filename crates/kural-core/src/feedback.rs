use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use kural_schema::{FeedbackRecord, KuralRef, Rating};
use kural_store::KeyedStore;

use crate::error::CoreError;

/// How many kurals the helpfulness ranking returns.
const MOST_HELPFUL_LIMIT: usize = 5;

/// Helpfulness tally for one kural, grouped by its tamil text.
#[derive(Debug, Clone, Serialize)]
pub struct KuralScore {
    pub tamil: String,
    pub positive: i64,
    pub negative: i64,
    /// positive - negative
    pub score: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackAnalytics {
    pub total_feedback: usize,
    pub positive_feedback: usize,
    pub negative_feedback: usize,
    /// round(100 * positive / total, 2); 0 when there is no feedback.
    pub feedback_rate: f64,
    pub most_helpful_kurals: Vec<KuralScore>,
}

/// Accepts response ratings and computes helpfulness analytics on demand.
pub struct FeedbackAggregator {
    store: Arc<dyn KeyedStore<FeedbackRecord>>,
}

impl FeedbackAggregator {
    pub fn new(store: Arc<dyn KeyedStore<FeedbackRecord>>) -> Self {
        Self { store }
    }

    /// Persist a rating and return its fresh feedback id. The rating string
    /// must be exactly "positive" or "negative"; the timestamp defaults to
    /// capture time when the caller does not supply one.
    pub async fn submit(
        &self,
        user_message: &str,
        bot_response: &str,
        kural: Option<KuralRef>,
        rating: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<String, CoreError> {
        let rating: Rating = rating
            .parse()
            .map_err(|_| CoreError::InvalidInput("invalid feedback type".to_string()))?;

        let feedback_id = Uuid::new_v4().to_string();
        let record = FeedbackRecord {
            feedback_id: feedback_id.clone(),
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            kural,
            feedback: rating,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        };
        self.store.append(record).await?;
        info!(%feedback_id, rating = rating.as_str(), "feedback submitted");
        Ok(feedback_id)
    }

    /// All feedback records in insertion order.
    pub async fn all(&self) -> Result<Vec<FeedbackRecord>, CoreError> {
        Ok(self.store.list().await?)
    }

    pub async fn analytics(&self) -> Result<FeedbackAnalytics, CoreError> {
        let records = self.store.list().await?;

        let total = records.len();
        let positive = records
            .iter()
            .filter(|r| r.feedback == Rating::Positive)
            .count();
        let negative = total - positive;

        let feedback_rate = if total > 0 {
            (positive as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Ok(FeedbackAnalytics {
            total_feedback: total,
            positive_feedback: positive,
            negative_feedback: negative,
            feedback_rate,
            most_helpful_kurals: most_helpful(&records),
        })
    }
}

/// Group records by the referenced kural's tamil text (records without one
/// are excluded from grouping only), score positive - negative, and return
/// the top groups by score. Ties keep first-seen order: groups are
/// accumulated in record order and the sort is stable.
fn most_helpful(records: &[FeedbackRecord]) -> Vec<KuralScore> {
    let mut groups: Vec<KuralScore> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(tamil) = record.kural.as_ref().and_then(|k| k.tamil.clone()) else {
            continue;
        };
        let i = *index.entry(tamil.clone()).or_insert_with(|| {
            groups.push(KuralScore {
                tamil,
                positive: 0,
                negative: 0,
                score: 0,
            });
            groups.len() - 1
        });
        match record.feedback {
            Rating::Positive => groups[i].positive += 1,
            Rating::Negative => groups[i].negative += 1,
        }
    }

    for group in &mut groups {
        group.score = group.positive - group.negative;
    }
    groups.sort_by(|a, b| b.score.cmp(&a.score));
    groups.truncate(MOST_HELPFUL_LIMIT);
    groups
}
