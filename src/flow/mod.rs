//! The rehearsal flow
//!
//! - [`Stage`]: which screen/step is active
//! - [`SessionContext`]: the working set for one rehearsal attempt
//! - [`FlowController`]: the state machine owning both, with the
//!   post-transition repair pass
//! - [`AnalysisOrchestrator`]: drives review -> analyzing -> report
//! - [`FlowEvent`]: notifications for the embedding shell

pub mod analysis;
pub mod controller;
pub mod events;
pub mod session;
pub mod stage;

pub use analysis::{AnalysisConfig, AnalysisOrchestrator};
pub use controller::FlowController;
pub use events::FlowEvent;
pub use session::SessionContext;
pub use stage::Stage;
