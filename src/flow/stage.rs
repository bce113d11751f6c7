//! Stages of the rehearsal flow
//!
//! Exactly one stage is active at any time. The flow controller owns the
//! value and is its only mutator; everything else reads.

use serde::{Deserialize, Serialize};

/// The screen/step of the rehearsal flow that is currently active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Public entry screen for signed-out visitors
    #[default]
    Landing,
    /// Credential entry
    Login,
    /// Signed-in home
    Dashboard,
    /// Account details
    Profile,
    /// Interview configuration form
    Setup,
    /// Live interview, answers being recorded
    Session,
    /// Playback of the finished recording
    Review,
    /// Scoring in progress
    Analyzing,
    /// Scored feedback for the finished rehearsal
    Report,
}

impl Stage {
    /// Check if this stage requires a signed-in user
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Stage::Landing | Stage::Login)
    }

    /// Check if the scoring pipeline is running
    pub fn is_analyzing(&self) -> bool {
        matches!(self, Stage::Analyzing)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Landing => write!(f, "landing"),
            Stage::Login => write!(f, "login"),
            Stage::Dashboard => write!(f, "dashboard"),
            Stage::Profile => write!(f, "profile"),
            Stage::Setup => write!(f, "setup"),
            Stage::Session => write!(f, "session"),
            Stage::Review => write!(f, "review"),
            Stage::Analyzing => write!(f, "analyzing"),
            Stage::Report => write!(f, "report"),
        }
    }
}
