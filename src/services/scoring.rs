use anyhow::Result;
use async_trait::async_trait;

use crate::interview::{AnswerSet, InterviewSettings, Question, ReportData};

/// Turns a finished rehearsal into scored feedback.
///
/// Implementations live in the embedding application (remote AI providers,
/// local heuristics, test stubs). The flow treats the call as a black box:
/// any `Err` is a scoring failure and sends the user back to review.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn analyze(
        &self,
        questions: &[Question],
        settings: &InterviewSettings,
        answers: &AnswerSet,
    ) -> Result<ReportData>;
}
