//! Error types for `jyotish-engine`.
//!
//! These never cross the [`crate::Engine::respond`] boundary — that method
//! converts them into best-effort reply strings. They exist so the pure
//! prediction path stays testable as a `Result`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Extract(#[from] jyotish_extract::Error),

  #[error(transparent)]
  Template(#[from] jyotish_rules::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
