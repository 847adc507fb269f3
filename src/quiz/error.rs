use thiserror::Error;

/// Caller contract violations. A correctly wired view never produces these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("option index {index} is invalid, expected 0 to 3")]
    InvalidArgument { index: usize },

    #[error("question index {index} is out of range for a quiz of {len} questions")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("Failed to read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("question bank is empty")]
    Empty,

    #[error("question bank has {len} questions, at most {max} are supported")]
    TooLarge { len: usize, max: usize },

    #[error("duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("question '{id}' is invalid: {reason}")]
    InvalidQuestion { id: String, reason: String },
}
