use crate::validation::Violation;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

/// Ways a decision request can end without a usable decision.
///
/// None of these reach callers of [`DecisionClient::decide`](super::DecisionClient::decide);
/// they only choose the log level of the record written there.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("OPENAI_API_KEY is not set")]
    MissingCredential,

    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend request timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend response is not valid JSON: {0}")]
    Format(String),

    #[error("backend response violates the decision schema: {0}")]
    SchemaViolation(Violation),
}

impl DecisionError {
    /// Hard failures log at ERROR; a backend that answered with the wrong
    /// shape logs at WARN.
    pub fn level(&self) -> Level {
        match self {
            DecisionError::SchemaViolation(_) => Level::WARN,
            _ => Level::ERROR,
        }
    }

    /// Whether re-prompting the backend could plausibly fix this.
    pub fn is_reprompt_candidate(&self) -> bool {
        matches!(self, DecisionError::SchemaViolation(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DecisionError::MissingCredential => "configuration",
            DecisionError::Transport(_) | DecisionError::Timeout(_) => "transport",
            DecisionError::Format(_) => "format",
            DecisionError::SchemaViolation(_) => "schema",
        }
    }
}
