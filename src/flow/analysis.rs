//! The analysis pipeline: review -> analyzing -> report
//!
//! The orchestrator owns the scoring and history collaborators and is the
//! only code that enters or leaves the analyzing stage.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::flow::controller::FlowController;
use crate::flow::stage::Stage;
use crate::interview::{AnswerSet, Report};
use crate::services::{HistoryStore, ScoringService};
use crate::{HexatechError, Result};

/// Configuration for the analysis pipeline
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// How long a single scoring call may run before it is cancelled
    pub scoring_timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scoring_timeout: Duration::from_secs(60),
        }
    }
}

impl AnalysisConfig {
    /// Set the scoring timeout
    pub fn with_scoring_timeout(mut self, timeout: Duration) -> Self {
        self.scoring_timeout = timeout;
        self
    }
}

/// Coordinates the session working set, the scoring provider and the
/// history store to move the flow from review to report.
pub struct AnalysisOrchestrator {
    scoring: Arc<dyn ScoringService>,
    history: Arc<dyn HistoryStore>,
    config: AnalysisConfig,
}

impl AnalysisOrchestrator {
    pub fn new(scoring: Arc<dyn ScoringService>, history: Arc<dyn HistoryStore>) -> Self {
        Self::with_config(scoring, history, AnalysisConfig::default())
    }

    pub fn with_config(
        scoring: Arc<dyn ScoringService>,
        history: Arc<dyn HistoryStore>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            scoring,
            history,
            config,
        }
    }

    /// Score the current rehearsal and persist the resulting report.
    ///
    /// Holds the controller exclusively for the whole call, so no other
    /// flow operation can run while scoring is suspended and a second
    /// analysis cannot start concurrently. On success the flow lands on the
    /// report stage; on scoring failure or timeout it returns to review
    /// with the recording and answers intact.
    pub async fn start_analysis(
        &self,
        flow: &mut FlowController,
        answers: &AnswerSet,
    ) -> Result<Report> {
        if flow.stage().is_analyzing() {
            warn!("analysis requested while one is in flight");
            return Err(HexatechError::AnalysisInFlight);
        }

        // Preconditions: the working set must hold settings and questions.
        let (settings, questions) = {
            let session = flow.session();
            match session.settings() {
                Some(settings) if !session.questions().is_empty() => {
                    (settings.clone(), session.questions().to_vec())
                }
                _ => {
                    warn!("settings or questions missing");
                    flow.navigate(Stage::Setup);
                    return Err(HexatechError::MissingPrerequisite(
                        "interview settings and questions are required".to_string(),
                    ));
                }
            }
        };

        if !flow.enter_analysis() {
            // The repair pass refused the analyzing stage.
            return Err(HexatechError::MissingPrerequisite(
                "a signed-in user is required".to_string(),
            ));
        }

        debug!(
            questions = questions.len(),
            answers = answers.len(),
            timeout_secs = self.config.scoring_timeout.as_secs(),
            "scoring started"
        );

        let scoring = self.scoring.analyze(&questions, &settings, answers);
        match tokio::time::timeout(self.config.scoring_timeout, scoring).await {
            Ok(Ok(data)) => {
                let report = Report::from_data(data);
                info!(report_id = %report.id, "scoring complete");

                if let Err(e) = self.history.save(&report).await {
                    // History is best-effort; the user still gets the report.
                    warn!(report_id = %report.id, "failed to persist report: {}", e);
                }

                flow.complete_analysis(report.clone());
                Ok(report)
            }
            Ok(Err(e)) => {
                error!("scoring failed: {}", e);
                flow.fail_analysis(&e.to_string());
                Err(HexatechError::ScoringFailure(e.to_string()))
            }
            Err(_) => {
                let secs = self.config.scoring_timeout.as_secs();
                error!(timeout_secs = secs, "scoring timed out");
                flow.fail_analysis("scoring timed out");
                Err(HexatechError::ScoringTimeout(secs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::{InterviewSettings, Question, RecordedMedia, ReportData, ScoreDetail};
    use crate::services::{Identity, InMemoryHistoryStore};
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_data() -> ReportData {
        ReportData {
            overall_score: 82.0,
            clarity_of_communication: ScoreDetail::new(80.0, "clear"),
            technical_proficiency: ScoreDetail::new(85.0, "solid"),
            behavioral_competency: ScoreDetail::new(78.0, "good"),
            confidence_and_demeanor: ScoreDetail::new(84.0, "calm"),
            strengths: vec!["structure".to_string()],
            areas_for_improvement: vec!["examples".to_string()],
        }
    }

    /// Returns fixed data and counts invocations.
    struct FixedScoring {
        calls: AtomicUsize,
    }

    impl FixedScoring {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ScoringService for FixedScoring {
        async fn analyze(
            &self,
            _questions: &[Question],
            _settings: &InterviewSettings,
            _answers: &AnswerSet,
        ) -> anyhow::Result<ReportData> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(sample_data())
        }
    }

    struct FailingScoring;

    #[async_trait]
    impl ScoringService for FailingScoring {
        async fn analyze(
            &self,
            _questions: &[Question],
            _settings: &InterviewSettings,
            _answers: &AnswerSet,
        ) -> anyhow::Result<ReportData> {
            bail!("provider unavailable")
        }
    }

    struct SlowScoring;

    #[async_trait]
    impl ScoringService for SlowScoring {
        async fn analyze(
            &self,
            _questions: &[Question],
            _settings: &InterviewSettings,
            _answers: &AnswerSet,
        ) -> anyhow::Result<ReportData> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(sample_data())
        }
    }

    struct FailingHistory;

    #[async_trait]
    impl HistoryStore for FailingHistory {
        async fn save(&self, _report: &Report) -> anyhow::Result<()> {
            bail!("disk full")
        }
    }

    fn reviewed_flow() -> FlowController {
        let (mut flow, _events) = FlowController::new();
        flow.initialize(Some(Identity::new("Dana", "dana@example.com")));
        flow.navigate(Stage::Setup);
        flow.complete_setup(
            InterviewSettings::new("Backend Engineer", "Senior", "technical", "hard", "30"),
            vec![Question::technical("What is a lifetime?")],
        )
        .unwrap();
        flow.finish_recording(RecordedMedia::new("video/webm", vec![1; 8]));
        flow
    }

    fn answers() -> AnswerSet {
        let mut set = AnswerSet::new();
        set.insert(0, "Lifetimes bound borrows to scopes");
        set
    }

    #[tokio::test]
    async fn test_success_reaches_report_and_persists() {
        let scoring = FixedScoring::new();
        let history = Arc::new(InMemoryHistoryStore::new());
        let orchestrator = AnalysisOrchestrator::new(scoring.clone(), history.clone());
        let mut flow = reviewed_flow();

        let report = orchestrator
            .start_analysis(&mut flow, &answers())
            .await
            .unwrap();

        assert_eq!(flow.stage(), Stage::Report);
        assert_eq!(scoring.calls.load(Ordering::SeqCst), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.reports()[0].id, report.id);
        assert_eq!(flow.session().report().unwrap().id, report.id);
    }

    #[tokio::test]
    async fn test_missing_settings_redirects_to_setup() {
        let scoring = FixedScoring::new();
        let orchestrator =
            AnalysisOrchestrator::new(scoring.clone(), Arc::new(InMemoryHistoryStore::new()));
        let (mut flow, _events) = FlowController::new();
        flow.initialize(Some(Identity::new("Dana", "dana@example.com")));

        let result = orchestrator.start_analysis(&mut flow, &answers()).await;

        assert!(matches!(result, Err(HexatechError::MissingPrerequisite(_))));
        assert_eq!(flow.stage(), Stage::Setup);
        assert_eq!(scoring.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_while_analyzing() {
        let orchestrator =
            AnalysisOrchestrator::new(FixedScoring::new(), Arc::new(InMemoryHistoryStore::new()));
        let mut flow = reviewed_flow();
        assert!(flow.enter_analysis());

        let result = orchestrator.start_analysis(&mut flow, &answers()).await;

        assert!(matches!(result, Err(HexatechError::AnalysisInFlight)));
        assert_eq!(flow.stage(), Stage::Analyzing);
    }

    #[tokio::test]
    async fn test_failure_returns_to_review_with_media_kept() {
        let orchestrator = AnalysisOrchestrator::new(
            Arc::new(FailingScoring),
            Arc::new(InMemoryHistoryStore::new()),
        );
        let mut flow = reviewed_flow();
        let media_id = flow.session().recorded_media().unwrap().id;

        let result = orchestrator.start_analysis(&mut flow, &answers()).await;

        assert!(matches!(result, Err(HexatechError::ScoringFailure(_))));
        assert_eq!(flow.stage(), Stage::Review);
        assert_eq!(flow.session().recorded_media().unwrap().id, media_id);
        assert!(flow.session().report().is_none());
    }

    #[tokio::test]
    async fn test_timeout_returns_to_review() {
        let config = AnalysisConfig::default().with_scoring_timeout(Duration::from_millis(20));
        let orchestrator = AnalysisOrchestrator::with_config(
            Arc::new(SlowScoring),
            Arc::new(InMemoryHistoryStore::new()),
            config,
        );
        let mut flow = reviewed_flow();

        let result = orchestrator.start_analysis(&mut flow, &answers()).await;

        assert!(matches!(result, Err(HexatechError::ScoringTimeout(_))));
        assert_eq!(flow.stage(), Stage::Review);
        assert!(flow.session().has_recording());
    }

    #[tokio::test]
    async fn test_history_save_failure_still_reaches_report() {
        let orchestrator = AnalysisOrchestrator::new(FixedScoring::new(), Arc::new(FailingHistory));
        let mut flow = reviewed_flow();

        // Persistence is best-effort; the user still gets the report.
        let report = orchestrator
            .start_analysis(&mut flow, &answers())
            .await
            .unwrap();

        assert_eq!(flow.stage(), Stage::Report);
        assert_eq!(flow.session().report().unwrap().id, report.id);
    }

    #[tokio::test]
    async fn test_consecutive_reports_have_distinct_ids() {
        let orchestrator =
            AnalysisOrchestrator::new(FixedScoring::new(), Arc::new(InMemoryHistoryStore::new()));
        let mut flow = reviewed_flow();

        let first = orchestrator
            .start_analysis(&mut flow, &answers())
            .await
            .unwrap();

        // Rehearse again: review is re-entered, then re-analyzed
        flow.navigate(Stage::Review);
        let second = orchestrator
            .start_analysis(&mut flow, &answers())
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
    }
}
