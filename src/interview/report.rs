use chrono::{DateTime, SecondsFormat, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

/// Random alphanumeric characters appended to the timestamp in a report id.
const ID_SUFFIX_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub score: f32,
    pub feedback: String,
}

impl ScoreDetail {
    pub fn new(score: f32, feedback: impl Into<String>) -> Self {
        Self {
            score,
            feedback: feedback.into(),
        }
    }
}

/// Scored feedback exactly as the scoring provider produced it. The flow
/// stores and forwards these values but never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub overall_score: f32,
    pub clarity_of_communication: ScoreDetail,
    pub technical_proficiency: ScoreDetail,
    pub behavioral_competency: ScoreDetail,
    pub confidence_and_demeanor: ScoreDetail,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

/// A finished, identified report ready for history persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// UTC timestamp (RFC 3339, millisecond precision, `Z` suffix) plus a
    /// `-` separated random alphanumeric suffix, e.g.
    /// `2025-03-14T09:26:53.589Z-h7Kq2mXe`.
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub data: ReportData,
}

impl Report {
    /// Stamp provider output with a fresh id and date.
    pub fn from_data(data: ReportData) -> Self {
        let now = Utc::now();
        Self {
            id: new_report_id(now),
            date: now,
            data,
        }
    }
}

fn new_report_id(now: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!(
        "{}-{}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        suffix
    )
}
