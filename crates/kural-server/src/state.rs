use std::sync::Arc;

use anyhow::Result;

use kural_core::{Catalog, Classifier, Composer, FeedbackAggregator, QuizAggregator, Recorder};
use kural_store::InMemoryStore;

/// Shared application state accessible from all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub classifier: Arc<Classifier>,
    pub composer: Arc<Composer>,
    pub recorder: Arc<Recorder>,
    pub quiz: Arc<QuizAggregator>,
    pub feedback: Arc<FeedbackAggregator>,
}

impl AppState {
    /// Wire up the core over in-memory stores. Fails if the built-in
    /// catalog is invalid (a startup error, never a per-request one).
    pub fn in_memory() -> Result<Self> {
        let catalog = Arc::new(Catalog::builtin()?);
        Ok(Self {
            classifier: Arc::new(Classifier::new()),
            composer: Arc::new(Composer::new(catalog.clone())),
            recorder: Arc::new(Recorder::new(Arc::new(InMemoryStore::new()))),
            quiz: Arc::new(QuizAggregator::new(Arc::new(InMemoryStore::new()))),
            feedback: Arc::new(FeedbackAggregator::new(Arc::new(InMemoryStore::new()))),
            catalog,
        })
    }
}
