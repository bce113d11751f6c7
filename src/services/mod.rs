//! External collaborators, abstracted at their trait boundary.
//!
//! The flow core depends on these seams only:
//! - [`AuthGate`]: who is signed in
//! - [`ScoringService`]: answers in, scored feedback out
//! - [`HistoryStore`]: persist a finished report
//!
//! In-memory implementations ship for local shells and tests.

pub mod auth;
pub mod history;
pub mod scoring;

pub use auth::{AuthGate, Credentials, Identity, InMemoryAuthGate};
pub use history::{HistoryStore, InMemoryHistoryStore};
pub use scoring::ScoringService;
