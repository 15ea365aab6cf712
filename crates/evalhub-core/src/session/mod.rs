//! Ephemeral session state bridging generation and feedback.
//!
//! A session is created when a set of responses has been generated and is
//! read back when the caller votes on one of them.

pub mod model;
pub mod store;

pub use model::SessionRecord;
pub use store::SessionStore;
