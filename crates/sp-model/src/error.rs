use thiserror::Error;

use sp_core::{EntryId, ModuleId, TopicId};

use crate::plan::EntryStatus;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("outline parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generator output contains no modules")]
    NoModules,

    #[error("module {module:?} contains no topics")]
    EmptyModule { module: String },

    #[error("{what} name must not be empty")]
    EmptyName { what: &'static str },

    #[error("module {module:?}: difficulty score {score} outside 1-5")]
    DifficultyOutOfRange { module: String, score: f64 },

    #[error("module {module:?}: weightage {weightage} outside 0-100")]
    WeightageOutOfRange { module: String, weightage: f64 },

    #[error("topic {topic:?}: required study hours {hours} must be positive")]
    NonPositiveHours { topic: String, hours: f64 },

    #[error("plan entry {0} not found in roadmap")]
    EntryNotFound(EntryId),

    #[error("topic {0} not found in roadmap")]
    TopicNotFound(TopicId),

    #[error("entry {entry} is already {from:?}; pending entries only")]
    InvalidTransition { entry: EntryId, from: EntryStatus },

    #[error("confidence score {0} outside 1-5")]
    ConfidenceOutOfRange(u8),

    #[error("entry {entry} references unknown topic {topic}")]
    DanglingTopic { entry: EntryId, topic: TopicId },

    #[error("topic {topic} references unknown module {module}")]
    DanglingModule { topic: TopicId, module: ModuleId },
}

pub type ModelResult<T> = Result<T, ModelError>;
