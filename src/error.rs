// src/error.rs

use crate::quiz::QuizPhase;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("No questions for topic '{0}'")]
    UnknownTopic(String),

    #[error("Option {index} out of range (question has {options} options)")]
    InvalidSelection { index: usize, options: usize },

    #[error("Action '{action}' not allowed while {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: QuizPhase,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Question '{question}' in topic '{topic}' has fewer than two options")]
    TooFewOptions { topic: String, question: String },

    #[error("Question '{question}' in topic '{topic}' points to missing option {index}")]
    CorrectAnswerOutOfRange {
        topic: String,
        question: String,
        index: usize,
    },

    #[error("Duplicate question id '{question}' in topic '{topic}'")]
    DuplicateQuestion { topic: String, question: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("timeLimitSeconds must be greater than zero")]
    ZeroTimeLimit,
}
