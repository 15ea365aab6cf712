//! Application layer for EvalHub.
//!
//! Coordinates the domain traits into the three request flows: generating
//! responses, recording feedback and reporting statistics.

pub mod feedback_service;
pub mod generation_service;
pub mod stats_service;

pub use feedback_service::FeedbackService;
pub use generation_service::{GenerationOutcome, GenerationService};
pub use stats_service::StatsService;
