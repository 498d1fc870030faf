//! Core decision logic: classification, reply composition, recording, and
//! the quiz/feedback aggregators. Transport-free; the HTTP layer lives in
//! `kural-server`.

pub mod catalog;
pub mod classifier;
pub mod composer;
pub mod error;
pub mod feedback;
pub mod quiz;
pub mod recorder;

pub use catalog::Catalog;
pub use classifier::Classifier;
pub use composer::Composer;
pub use error::CoreError;
pub use feedback::{FeedbackAggregator, FeedbackAnalytics, KuralScore};
pub use quiz::{personality_for, QuizAggregator, QuizAnalytics};
pub use recorder::Recorder;
