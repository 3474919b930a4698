//! AI operations for physician summaries.
//!
//! This module provides integration with an OpenAI-compatible chat
//! completions API and the prompt that turns the entry log into a summary
//! request.
//!
//! # Module Structure
//!
//! - `openai`: HTTP client and the `Summarizer` seam
//! - `prompts`: System prompt and summary request builder
//!
//! # Example
//!
//! ```no_run
//! use symptom_sleuth::ai::{Message, OpenAiClient};
//! use zeroize::Zeroizing;
//!
//! # async fn run() -> symptom_sleuth::AppResult<()> {
//! let key = Some(Zeroizing::new("sk-...".to_string()));
//! let client = OpenAiClient::new("https://api.openai.com/v1", key, "gpt-3.5-turbo");
//! let reply = client.chat(&[Message::user("Hello")]).await?;
//! # Ok(())
//! # }
//! ```

pub mod openai;
pub mod prompts;

// Re-export commonly used types
pub use openai::{Message, OpenAiClient, Role, Summarizer};
pub use prompts::{build_prompt, summary_prompt, SYSTEM_PROMPT};
