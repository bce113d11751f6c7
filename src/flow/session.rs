//! Working set for a single rehearsal attempt

use crate::interview::{InterviewSettings, Question, RecordedMedia, Report};

/// Everything captured during one rehearsal: the interview configuration,
/// the generated questions, the recording, and (eventually) the report.
///
/// Created empty, populated field by field as the user progresses, and wiped
/// as a whole on re-entering setup or on logout. Never shared across users
/// or concurrent attempts.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    settings: Option<InterviewSettings>,
    questions: Vec<Question>,
    recorded_media: Option<RecordedMedia>,
    report: Option<Report>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> Option<&InterviewSettings> {
        self.settings.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn recorded_media(&self) -> Option<&RecordedMedia> {
        self.recorded_media.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Check if a recording exists to review
    pub fn has_recording(&self) -> bool {
        self.recorded_media.is_some()
    }

    /// Check if analysis may start: settings captured and questions present
    pub fn is_ready_for_analysis(&self) -> bool {
        self.settings.is_some() && !self.questions.is_empty()
    }

    /// Check if the report stage may be shown
    pub fn is_ready_for_report(&self) -> bool {
        self.report.is_some() && self.recorded_media.is_some()
    }

    /// Check if every field is empty
    pub fn is_empty(&self) -> bool {
        self.settings.is_none()
            && self.questions.is_empty()
            && self.recorded_media.is_none()
            && self.report.is_none()
    }

    /// Clear settings, questions, recording and report together.
    /// There is no partial reset.
    pub fn reset(&mut self) {
        self.settings = None;
        self.questions.clear();
        self.recorded_media = None;
        self.report = None;
    }

    pub(crate) fn set_interview(&mut self, settings: InterviewSettings, questions: Vec<Question>) {
        self.settings = Some(settings);
        self.questions = questions;
    }

    pub(crate) fn set_recorded_media(&mut self, media: RecordedMedia) {
        self.recorded_media = Some(media);
    }

    pub(crate) fn set_report(&mut self, report: Report) {
        self.report = Some(report);
    }
}
