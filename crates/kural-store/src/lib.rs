use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use kural_schema::{FeedbackRecord, QuizSubmission};

/// Records that carry their own lookup key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for QuizSubmission {
    fn key(&self) -> &str {
        &self.session_id
    }
}

impl Keyed for FeedbackRecord {
    fn key(&self) -> &str {
        &self.feedback_id
    }
}

/// Append-only record collection. Appends are atomic with respect to
/// concurrent callers; `list` returns a snapshot taken at call time, so a
/// concurrent append never produces a partial read.
#[async_trait]
pub trait RecordStore<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    async fn append(&self, record: T) -> Result<()>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<T>>;
}

/// A `RecordStore` that also supports lookup by the record's key.
#[async_trait]
pub trait KeyedStore<T>: RecordStore<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<T>>;
}

/// In-memory store: process-lifetime accumulation, no durability. Matches
/// the original service's behavior; a persistent implementation can be
/// swapped in without touching the aggregators.
#[derive(Debug, Default)]
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<T> RecordStore<T> for InMemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn append(&self, record: T) -> Result<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.clone())
    }
}

#[async_trait]
impl<T> KeyedStore<T> for InMemoryStore<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Result<Option<T>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.key() == key)
            .cloned())
    }
}
