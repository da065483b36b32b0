//! Free-text extractor for JyotishAI chat input.
//!
//! Pulls an optional `YYYY-MM-DD` birth date and an optional question
//! category out of one chat line. Pure and synchronous; no I/O.
//!
//! # Quick start
//!
//! ```
//! use jyotish_core::category::Category;
//!
//! let got = jyotish_extract::extract("2004-06-11, career?").unwrap();
//! assert_eq!(got.birth_date.unwrap().to_string(), "2004-06-11");
//! assert_eq!(got.category, Some(Category::Career));
//! ```

pub mod error;
mod parse;

use jyotish_core::{birth::BirthDate, category::Category};

pub use error::{Error, Result};

// ─── Public types ────────────────────────────────────────────────────────────

/// What [`extract`] found in one chat line. Either half may be absent; the
/// caller decides what a missing half means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedInput {
  pub birth_date: Option<BirthDate>,
  pub category:   Option<Category>,
}

impl ExtractedInput {
  /// Both halves present — the input can drive a full prediction.
  pub fn is_complete(&self) -> bool {
    self.birth_date.is_some() && self.category.is_some()
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Extract a birth date and question category from `text`.
///
/// A missing date or unmatched category is `None`, not an error. A
/// date-shaped substring that is not a real calendar date *is* an error —
/// it must never be silently treated as valid.
pub fn extract(text: &str) -> Result<ExtractedInput> {
  Ok(ExtractedInput {
    birth_date: parse::find_date(text)?,
    category:   parse::find_category(text),
  })
}
