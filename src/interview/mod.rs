pub mod report;
pub mod types;

pub use report::{Report, ReportData, ScoreDetail};
pub use types::{AnswerSet, InterviewSettings, Question, QuestionCategory, RecordedMedia};
