use chrono::NaiveDate;
use thiserror::Error;

use sp_model::ModelError;

/// Failures surfaced by the roadmap-creation workflow.
///
/// Input-validation variants mean the caller should re-prompt the user;
/// [`ScheduleError::Generation`] means the upstream module generator
/// produced an unusable payload and should be retried instead.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("outline contains no topics to schedule")]
    NoTopics,

    #[error("daily study hours must be positive (got {0})")]
    NonPositiveDailyHours(f64),

    #[error("exam date {exam} is not after today ({today})")]
    ExamNotInFuture { exam: NaiveDate, today: NaiveDate },

    #[error("upstream generation failure: {0}")]
    Generation(#[from] ModelError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
