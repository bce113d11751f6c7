pub mod flow;
pub mod interview;
pub mod prefs;
pub mod services;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HexatechError {
    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    #[error("Analysis already in flight")]
    AnalysisInFlight,

    #[error("Scoring failed: {0}")]
    ScoringFailure(String),

    #[error("Scoring timed out after {0}s")]
    ScoringTimeout(u64),

    #[error("Preference store error: {0}")]
    Preference(String),
}

impl HexatechError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // The flow self-heals by redirecting to the setup stage
            HexatechError::MissingPrerequisite(_) => true,
            // The running analysis will finish or fail on its own
            HexatechError::AnalysisInFlight => true,
            // The recording and answers are kept for another attempt
            HexatechError::ScoringFailure(_) => true,
            HexatechError::ScoringTimeout(_) => true,
            // Preference persistence needs user/environment intervention
            HexatechError::Preference(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            HexatechError::MissingPrerequisite(_) => {
                "Interview setup is incomplete. Please configure the interview first.".to_string()
            }
            HexatechError::AnalysisInFlight => {
                "Your answers are already being analyzed. Please wait.".to_string()
            }
            HexatechError::ScoringFailure(_) => {
                "Analysis failed. Your recording was kept, please try again.".to_string()
            }
            HexatechError::ScoringTimeout(_) => {
                "Analysis took too long. Your recording was kept, please try again.".to_string()
            }
            HexatechError::Preference(_) => {
                "Could not save your preferences. Please check file permissions.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HexatechError>;
