//! Decision client: request in, validated decision or nothing out

use crate::config::{ConfigError, LlmConfig};
use crate::llm::backend::{DecisionBackend, OpenAiBackend};
use crate::llm::error::DecisionError;
use crate::llm::prompt::build_chat_request;
use crate::models::{DecisionRequest, ValidatedDecision};
use crate::validation::{self, DECISION_SCHEMA};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn, Level};

pub struct DecisionClient {
    settings: LlmConfig,
    backend: Arc<dyn DecisionBackend>,
}

impl DecisionClient {
    /// Client backed by the OpenAI-compatible endpoint in `settings`
    pub fn new(settings: &LlmConfig) -> Result<Self, ConfigError> {
        let backend = OpenAiBackend::new(settings)?;
        Ok(Self::with_backend(settings, Arc::new(backend)))
    }

    pub fn with_backend(settings: &LlmConfig, backend: Arc<dyn DecisionBackend>) -> Self {
        Self {
            settings: settings.clone(),
            backend,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.settings.api_key.is_some()
    }

    /// Ask the backend for a decision.
    ///
    /// Every expected failure is logged here and comes back as `None`.
    pub async fn decide(&self, request: &DecisionRequest) -> Option<ValidatedDecision> {
        match self.try_decide(request).await {
            Ok(decision) => Some(decision),
            Err(e) => {
                log_failure(&e);
                None
            }
        }
    }

    /// Same as [`decide`](Self::decide) but hands back the reason for a
    /// missing decision instead of logging it.
    pub async fn try_decide(
        &self,
        request: &DecisionRequest,
    ) -> Result<ValidatedDecision, DecisionError> {
        if !self.has_credential() {
            return Err(DecisionError::MissingCredential);
        }

        let chat = build_chat_request(&self.settings, request)
            .map_err(|e| DecisionError::Format(e.to_string()))?;

        let start = Instant::now();
        let content = self.backend.complete(&chat).await?;
        debug!(
            model = %self.settings.model,
            candidates = request.candidates.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Backend answered decision request"
        );

        parse_decision(&content)
    }
}

/// Parse and validate the backend's text. Values are passed through untouched.
pub fn parse_decision(content: &str) -> Result<ValidatedDecision, DecisionError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| DecisionError::Format(e.to_string()))?;

    validation::check_value(&value, DECISION_SCHEMA).map_err(DecisionError::SchemaViolation)?;

    // The schema check above guarantees every typed field deserializes.
    serde_json::from_value(value).map_err(|e| DecisionError::Format(e.to_string()))
}

fn log_failure(err: &DecisionError) {
    if err.level() == Level::WARN {
        warn!(
            kind = err.kind(),
            reprompt_candidate = err.is_reprompt_candidate(),
            error = %err,
            "Backend returned a decision that does not match the schema"
        );
    } else {
        error!(kind = err.kind(), error = %err, "Decision request failed");
    }
}
