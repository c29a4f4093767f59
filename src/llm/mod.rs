//! Decision request/response contract with the language-model backend.

pub mod backend;
pub mod client;
pub mod error;
pub mod prompt;

pub use backend::{DecisionBackend, OpenAiBackend};
pub use client::{parse_decision, DecisionClient};
pub use error::DecisionError;
pub use prompt::{build_chat_request, build_prompt, build_request, ChatCompletionRequest};
