//! Error types for `jyotish-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The string is date-shaped but not a real calendar date
  /// (month outside 1–12, day outside the month's range).
  #[error("invalid calendar date: {0}")]
  InvalidDate(String),

  #[error("unknown language: {0}")]
  UnknownLanguage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
