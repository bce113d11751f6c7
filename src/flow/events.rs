//! Notifications for the embedding shell

use crate::flow::stage::Stage;

/// Events emitted by the flow controller.
///
/// Shells poll these (`try_recv`) to know when to re-render. Current state
/// should be read from the controller itself rather than reconstructed from
/// events. Sends are best-effort; a shell that dropped its receiver is
/// simply not notified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// The active stage changed
    StageChanged { from: Stage, to: Stage },
    /// The working set was wiped
    SessionReset,
    /// Scoring started, the analyzing stage is active
    AnalysisStarted,
    /// A report was produced and persisted, the report stage is active
    AnalysisCompleted { report_id: String },
    /// Scoring failed or timed out, the flow returned to review
    AnalysisFailed { reason: String },
    /// An illegal stage entry was repaired
    InvalidStageEntry { attempted: Stage, redirected_to: Stage },
}
