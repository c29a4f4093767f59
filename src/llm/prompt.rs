//! Request payload and chat message construction

use crate::config::LlmConfig;
use crate::models::{Candidate, DecisionRequest, MarketOverview, PositionSet};
use serde::{Deserialize, Serialize};

/// Response mode asking the backend for a single JSON object and nothing else.
pub const JSON_OBJECT_FORMAT: &str = "json_object";

/// Fixed system instruction. `{language}` is replaced with the configured
/// response language.
const SYSTEM_PROMPT_TEMPLATE: &str = "You are a NASDAQ hybrid trading strategist. \
Base every call on the supplied market data and news. \
Consider NASDAQ-listed symbols only. \
Reply with a single JSON object with the keys as_of (string), market_view (string), \
actions (array of {symbol, decision: BUY|SELL|HOLD, confidence, reasoning, target_shares}), \
watchlist (array), constraints_check (object) and data_sources (array). \
All text in the response must be written in {language}.";

pub fn system_prompt(language: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace("{language}", language)
}

/// Assemble a request from its parts without reordering candidates
pub fn build_request(
    market_overview: MarketOverview,
    positions: PositionSet,
    candidates: Vec<Candidate>,
) -> DecisionRequest {
    DecisionRequest::new(market_overview, positions, candidates)
}

/// The user message: the whole request as one JSON document.
pub fn build_prompt(request: &DecisionRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(request)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of a chat-completions call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl ChatCompletionRequest {
    /// Content of the user message, i.e. the serialized decision request.
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

pub fn build_chat_request(
    settings: &LlmConfig,
    request: &DecisionRequest,
) -> Result<ChatCompletionRequest, serde_json::Error> {
    Ok(ChatCompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: system_prompt(&settings.response_language),
            },
            ChatMessage {
                role: Role::User,
                content: build_prompt(request)?,
            },
        ],
        temperature: settings.temperature,
        response_format: ResponseFormat {
            kind: JSON_OBJECT_FORMAT.to_string(),
        },
    })
}
