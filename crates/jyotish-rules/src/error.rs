//! Error types for `jyotish-rules`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A `{…}` token survived substitution — the template names a placeholder
  /// the renderer does not know.
  #[error("unresolved placeholder {{{0}}}")]
  UnresolvedPlaceholder(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
