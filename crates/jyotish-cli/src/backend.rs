//! Ollama-compatible chat backend.
//!
//! Talks to a local Ollama server over its JSON chat API. Any transport or
//! status failure surfaces as an error; the engine converts that into its
//! fixed default reply, so a stopped server degrades gracefully.

use std::time::Duration;

use jyotish_core::language::Language;
use jyotish_engine::ChatBackend;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Connection settings for the local Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
  pub base_url: String,
  pub model:    String,
}

impl Default for OllamaConfig {
  fn default() -> Self {
    OllamaConfig {
      base_url: "http://localhost:11434".to_string(),
      model:    "llama3.2:1b".to_string(),
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("ollama returned {0}")]
  Status(reqwest::StatusCode),
}

/// Chat client for `POST /api/chat`.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct OllamaClient {
  client: Client,
  config: OllamaConfig,
}

impl OllamaClient {
  pub fn new(config: OllamaConfig) -> Result<OllamaClient, BackendError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(OllamaClient { client, config })
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
  model:    &'a str,
  messages: Vec<WireMessage>,
  stream:   bool,
}

#[derive(Serialize)]
struct WireMessage {
  role:    &'static str,
  content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
  message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
  content: String,
}

// ─── ChatBackend impl ────────────────────────────────────────────────────────

impl ChatBackend for OllamaClient {
  type Error = BackendError;

  async fn reply(
    &self,
    prompt: &str,
    language: Language,
  ) -> Result<String, BackendError> {
    let request = ChatRequest {
      model:    &self.config.model,
      messages: vec![WireMessage {
        role:    "user",
        content: format!(
          "Reply in {language} only, short and natural: {prompt}"
        ),
      }],
      stream:   false,
    };

    let response = self
      .client
      .post(format!(
        "{}/api/chat",
        self.config.base_url.trim_end_matches('/')
      ))
      .json(&request)
      .send()
      .await?;

    if !response.status().is_success() {
      return Err(BackendError::Status(response.status()));
    }

    let body: ChatResponse = response.json().await?;
    Ok(body.message.content.trim().to_string())
  }
}
