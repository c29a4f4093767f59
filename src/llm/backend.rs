//! Transport to the chat-completions backend

use crate::config::{ConfigError, LlmConfig};
use crate::llm::error::DecisionError;
use crate::llm::prompt::ChatCompletionRequest;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Something that answers a chat request with the text of its first choice.
#[async_trait]
pub trait DecisionBackend: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, DecisionError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible chat-completions client
pub struct OpenAiBackend {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    timeout: Duration,
}

impl OpenAiBackend {
    pub fn new(settings: &LlmConfig) -> Result<Self, ConfigError> {
        Self::with_client(settings, reqwest::Client::new())
    }

    pub fn with_client(settings: &LlmConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        let base = settings.base_url()?;
        let endpoint = base
            .join("chat/completions")
            .map_err(|source| ConfigError::InvalidUrl {
                value: settings.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key.clone().unwrap_or_default(),
            timeout: settings.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> DecisionError {
        if err.is_timeout() {
            DecisionError::Timeout(self.timeout)
        } else if err.is_decode() {
            DecisionError::Format(err.to_string())
        } else {
            DecisionError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl DecisionBackend for OpenAiBackend {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, DecisionError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DecisionError::Transport(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| self.classify(e))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| DecisionError::Format("response carried no message content".to_string()))
    }
}
