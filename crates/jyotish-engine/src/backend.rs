//! The general-chat seam.
//!
//! Inputs without a full date+category pair fall through to a
//! [`ChatBackend`] — typically a local LLM over HTTP (see the CLI crate's
//! Ollama client). The engine never lets a backend failure escape; it
//! substitutes a fixed default reply instead.

use jyotish_core::language::Language;

/// Abstraction over the general-chat fallback.
///
/// Implementations own their transport, model selection, and timeouts; the
/// engine only asks for a short reply and treats any error as "unavailable".
pub trait ChatBackend {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Produce a short free-form reply to `prompt` in `language`.
  async fn reply(
    &self,
    prompt: &str,
    language: Language,
  ) -> Result<String, Self::Error>;
}

/// A backend that always fails, forcing the engine onto its fixed default
/// reply. The offline configuration, and the test double.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

#[derive(Debug, thiserror::Error)]
#[error("no chat backend configured")]
pub struct NoBackend;

impl ChatBackend for NullBackend {
  type Error = NoBackend;

  async fn reply(
    &self,
    _prompt: &str,
    _language: Language,
  ) -> Result<String, NoBackend> {
    Err(NoBackend)
  }
}
