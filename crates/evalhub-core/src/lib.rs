//! Domain layer for EvalHub.
//!
//! Holds the types and traits shared by the generation and feedback flows:
//! session records and their store, the text-generation provider contract,
//! evaluation records and their repository, configuration and errors.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod session;

// Re-export common error type
pub use error::{EvalError, Result};
