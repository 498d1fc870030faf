use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use kural_schema::{ChatReply, ConversationEntry};
use kural_store::RecordStore;

use crate::error::CoreError;

/// Builds conversation entries and appends them to the injected store.
pub struct Recorder {
    store: Arc<dyn RecordStore<ConversationEntry>>,
}

impl Recorder {
    pub fn new(store: Arc<dyn RecordStore<ConversationEntry>>) -> Self {
        Self { store }
    }

    /// Record one exchange. The timestamp is supplied per call, normally
    /// `Utc::now()` at capture time; tests pass a fixed instant. The entry
    /// is returned to the caller; store failures surface as `Internal`.
    pub async fn record(
        &self,
        user_text: &str,
        reply: &ChatReply,
        timestamp: DateTime<Utc>,
    ) -> Result<ConversationEntry, CoreError> {
        let entry = ConversationEntry {
            user: user_text.to_string(),
            bot: reply.message.clone(),
            kural: reply.kural.clone(),
            timestamp,
        };
        self.store.append(entry.clone()).await?;
        debug!(user = %entry.user, "conversation entry recorded");
        Ok(entry)
    }
}
