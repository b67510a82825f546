//! Family-pattern baby prediction service
//!
//! Predicts a baby's gender from the birth order of both parents' siblings,
//! inherited physical traits from the parents' traits, and hereditary
//! disease risk from reported family histories. Results are explained by a
//! language model and recorded in a SQLite history.
//!
//! - Lookup-table and positional gender policies
//! - Dominance-score trait averaging
//! - Keyword disease registry with X-linked rules
//! - axum HTTP API under `/api`

pub mod config;
pub mod explain;
pub mod language;
pub mod prediction;
pub mod server;
pub mod store;

// Re-exports for convenience
pub use config::ServiceConfig;
pub use language::Language;
pub use prediction::{Gender, GenderToken};
pub use server::{router, run_server, AppState};
