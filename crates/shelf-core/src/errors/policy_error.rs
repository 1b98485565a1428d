use chrono::{DateTime, Utc};

use super::error_code::{self, ShelfErrorCode};
use crate::roles::Role;

/// Errors raised at the edges of the policy engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("unknown role: {value}")]
    UnknownRole { value: String },

    #[error("unknown lifecycle phase: {value}")]
    UnknownPhase { value: String },

    #[error("{actor} may not {action}: requires {required}")]
    Forbidden {
        action: &'static str,
        actor: Role,
        required: Role,
    },

    #[error("retention deadline ({retention}) must be after grace deadline ({grace})")]
    InvalidDeadlines {
        grace: DateTime<Utc>,
        retention: DateTime<Utc>,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl ShelfErrorCode for PolicyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRole { .. } => error_code::UNKNOWN_ROLE,
            Self::UnknownPhase { .. } => error_code::UNKNOWN_PHASE,
            Self::Forbidden { .. } => error_code::FORBIDDEN,
            Self::InvalidDeadlines { .. } => error_code::INVALID_DEADLINES,
            Self::Config(_) => error_code::CONFIG_ERROR,
        }
    }
}

/// Convenience type alias.
pub type PolicyResult<T> = Result<T, PolicyError>;
