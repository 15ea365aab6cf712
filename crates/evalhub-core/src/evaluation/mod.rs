//! Durable evaluation records and aggregate statistics.

pub mod model;
pub mod repository;
pub mod stats;

pub use model::{EvaluationRecord, FeedbackSubmission, Thumbs};
pub use repository::EvaluationRepository;
pub use stats::{EvaluationStats, positive_rate};
