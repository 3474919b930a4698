//! HTTP client for OpenAI-compatible chat completions.
//!
//! This module provides the message types exchanged with the summarization
//! service, the [`Summarizer`] seam used by the session operations, and a
//! `reqwest`-based client implementing it.

use crate::errors::{AIError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

/// The role of a message sender.
///
/// Only the roles this client sends are modelled; the reply's role is not
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Anything that can turn a message exchange into a single completion.
///
/// The session operations depend on this trait rather than on the HTTP
/// client, so tests can substitute a scripted summarizer.
#[allow(async_fn_in_trait)]
pub trait Summarizer {
    /// Returns the completion text for `messages`.
    async fn complete(&self, messages: &[Message]) -> AppResult<String>;
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned by OpenAI-compatible APIs.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible chat completions API.
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<Zeroizing<String>>,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer token; requests fail with `AIError::MissingApiKey` without one
    /// * `model` - Name of the chat model (e.g., "gpt-3.5-turbo")
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<Zeroizing<String>>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is configured
    /// - The API is not reachable
    /// - The API returns a non-success status (the provider's message is kept)
    /// - The response has no completion text
    pub async fn chat(&self, messages: &[Message]) -> AppResult<String> {
        let api_key = self.api_key.as_ref().ok_or(AIError::MissingApiKey)?;

        debug!(
            "Sending chat request with model: {} ({} messages)",
            self.model,
            messages.len()
        );

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(AIError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AIError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            AIError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AIError::EmptyCompletion)?;

        debug!("Received chat response ({} chars)", content.len());
        Ok(content)
    }
}

impl Summarizer for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> AppResult<String> {
        self.chat(messages).await
    }
}
