//! The rehearsal flow state machine
//!
//! Owns the active stage, the signed-in identity, and the session working
//! set. Every operation that mutates the stage runs a synchronous invariant
//! check before returning: an illegal stage entry is repaired with a forced
//! redirect, never an error. Navigation is therefore infallible from the
//! caller's point of view; the stage that results may differ from the stage
//! that was requested.

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, info, warn};

use crate::flow::events::FlowEvent;
use crate::flow::session::SessionContext;
use crate::flow::stage::Stage;
use crate::interview::{InterviewSettings, Question, RecordedMedia, Report};
use crate::services::Identity;
use crate::{HexatechError, Result};

/// Single source of truth for the rehearsal flow.
///
/// One instance exists per running shell, constructed at boot. All state is
/// owned here; collaborators receive references or clones.
pub struct FlowController {
    /// Active stage, mutated only through the methods below
    stage: Stage,
    /// Signed-in user, `None` while unauthenticated
    identity: Option<Identity>,
    /// Working set for the current rehearsal attempt
    session: SessionContext,
    /// Notification stream for the embedding shell
    events: Sender<FlowEvent>,
}

impl FlowController {
    /// Create a controller on the landing stage with an empty session.
    ///
    /// The returned receiver carries [`FlowEvent`]s for the shell to poll.
    /// Dropping it is fine; sends are best-effort.
    pub fn new() -> (Self, Receiver<FlowEvent>) {
        let (events, event_rx) = unbounded();
        let controller = Self {
            stage: Stage::Landing,
            identity: None,
            session: SessionContext::new(),
            events,
        };
        (controller, event_rx)
    }

    /// Pick the initial stage from the identity resolved at boot: dashboard
    /// for a signed-in user, landing otherwise. Called once.
    pub fn initialize(&mut self, identity: Option<Identity>) -> Stage {
        self.identity = identity;
        let initial = if self.identity.is_some() {
            Stage::Dashboard
        } else {
            Stage::Landing
        };
        info!(stage = %initial, "flow initialized");
        self.set_stage(initial);
        self.repair_stage();
        self.stage
    }

    /// Request a stage change on the user's behalf.
    ///
    /// Entering `Setup` wipes the working set first. `Analyzing` is not a
    /// navigation target (only the analysis pipeline enters it) and the
    /// request is refused. Every other target is accepted and then repaired
    /// if its data requirements are not met.
    pub fn navigate(&mut self, target: Stage) {
        if target == self.stage {
            debug!(stage = %target, "already on requested stage");
            return;
        }
        if target == Stage::Analyzing {
            warn!("analyzing cannot be entered by navigation");
            return;
        }

        debug!(from = %self.stage, to = %target, "navigate");
        if target == Stage::Setup {
            self.reset_session();
        }
        self.set_stage(target);
        self.repair_stage();
    }

    /// Record a successful sign-in and move to the dashboard.
    pub fn on_login(&mut self, identity: Identity) {
        info!(email = %identity.email, "signed in");
        self.identity = Some(identity);
        self.set_stage(Stage::Dashboard);
        self.repair_stage();
    }

    /// Record a sign-out: the identity is dropped, the working set is wiped
    /// and the flow returns to the landing stage.
    pub fn on_logout(&mut self) {
        info!("signed out");
        self.identity = None;
        self.reset_session();
        self.set_stage(Stage::Landing);
        self.repair_stage();
    }

    /// Store the captured configuration and generated questions, then move
    /// to the live session stage. Settings stay fixed until the next reset.
    pub fn complete_setup(
        &mut self,
        settings: InterviewSettings,
        questions: Vec<Question>,
    ) -> Result<()> {
        if questions.is_empty() {
            warn!("setup submitted without questions");
            return Err(HexatechError::MissingPrerequisite(
                "an interview needs at least one question".to_string(),
            ));
        }

        debug!(role = %settings.job_role, questions = questions.len(), "setup complete");
        self.session.set_interview(settings, questions);
        self.set_stage(Stage::Session);
        self.repair_stage();
        Ok(())
    }

    /// Store the finished recording and move to review. Recording again
    /// replaces the previous handle.
    pub fn finish_recording(&mut self, media: RecordedMedia) {
        debug!(media_id = %media.id, bytes = media.len(), "recording finished");
        self.session.set_recorded_media(media);
        self.set_stage(Stage::Review);
        self.repair_stage();
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Check if a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    // === Analysis pipeline hooks ===

    /// Enter the analyzing stage on the orchestrator's behalf. Returns
    /// whether the stage was actually reached; a repair may have redirected
    /// the flow instead (e.g. no signed-in user).
    pub(crate) fn enter_analysis(&mut self) -> bool {
        self.set_stage(Stage::Analyzing);
        self.repair_stage();
        if self.stage.is_analyzing() {
            let _ = self.events.send(FlowEvent::AnalysisStarted);
            true
        } else {
            false
        }
    }

    /// Store the finished report and move to the report stage. Like
    /// [`Self::enter_analysis`], the completion event is announced only if
    /// the stage survives the repair pass.
    pub(crate) fn complete_analysis(&mut self, report: Report) {
        let report_id = report.id.clone();
        self.session.set_report(report);
        self.set_stage(Stage::Report);
        self.repair_stage();
        if self.stage == Stage::Report {
            let _ = self.events.send(FlowEvent::AnalysisCompleted { report_id });
        }
    }

    /// Return to review after a failed scoring attempt. The recording and
    /// the captured answers are kept so the user can retry. The failure
    /// event is announced only if the stage survives the repair pass.
    pub(crate) fn fail_analysis(&mut self, reason: &str) {
        self.set_stage(Stage::Review);
        self.repair_stage();
        if self.stage == Stage::Review {
            let _ = self.events.send(FlowEvent::AnalysisFailed {
                reason: reason.to_string(),
            });
        }
    }

    fn set_stage(&mut self, target: Stage) {
        if target == self.stage {
            return;
        }
        let from = self.stage;
        self.stage = target;
        debug!(%from, to = %target, "stage changed");
        let _ = self.events.send(FlowEvent::StageChanged { from, to: target });
    }

    fn reset_session(&mut self) {
        self.session.reset();
        debug!("session reset");
        let _ = self.events.send(FlowEvent::SessionReset);
    }

    /// Post-transition invariant check.
    ///
    /// Runs synchronously after every stage mutation. Data rules run first;
    /// the auth rule runs last so it also corrects any redirect target.
    fn repair_stage(&mut self) {
        if self.stage == Stage::Review && !self.session.has_recording() {
            warn!("entered review without a recording");
            self.redirect(Stage::Review, Stage::Dashboard);
        }
        if self.stage == Stage::Report && !self.session.is_ready_for_report() {
            warn!("entered report without a persisted report");
            self.redirect(Stage::Report, Stage::Dashboard);
        }
        if self.stage == Stage::Analyzing && !self.session.is_ready_for_analysis() {
            warn!("entered analyzing without settings or questions");
            self.redirect(Stage::Analyzing, Stage::Dashboard);
        }
        if self.identity.is_none() && self.stage.requires_auth() {
            warn!(stage = %self.stage, "no signed-in user for an authenticated stage");
            self.redirect(self.stage, Stage::Landing);
        }
    }

    fn redirect(&mut self, attempted: Stage, to: Stage) {
        let _ = self.events.send(FlowEvent::InvalidStageEntry {
            attempted,
            redirected_to: to,
        });
        self.set_stage(to);
    }
}
