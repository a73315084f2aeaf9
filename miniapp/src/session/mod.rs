//! # Session
//!
//! Per-user cached data and the store that loads it.

pub mod state;
pub mod store;

pub use state::{DegradedField, FetchFailure, SessionField, SessionState, LOAD_ERROR_MESSAGE};
pub use store::{LoadOutcome, SessionStore};
