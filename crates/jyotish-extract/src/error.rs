//! Error types for `jyotish-extract`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A `\d{4}-\d{2}-\d{2}` substring was found but is not a real calendar
  /// date (e.g. `2004-13-40`).
  #[error("date-shaped but not a real calendar date: {value}")]
  InvalidDate { value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
