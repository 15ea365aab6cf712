//! Infrastructure layer for EvalHub: concrete session stores, evaluation
//! repositories and configuration loading.

pub mod config_service;
pub mod expiring_session_store;
pub mod in_memory_evaluation_repository;
pub mod in_memory_session_store;
pub mod mongo_evaluation_repository;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::expiring_session_store::ExpiringSessionStore;
pub use crate::in_memory_evaluation_repository::InMemoryEvaluationRepository;
pub use crate::in_memory_session_store::InMemorySessionStore;
pub use crate::mongo_evaluation_repository::MongoEvaluationRepository;
pub use crate::paths::EvalhubPaths;
