//! Date and keyword scanning.

use std::sync::LazyLock;

use jyotish_core::{birth::BirthDate, category::Category};
use regex::Regex;

use crate::error::{Error, Result};

static DATE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern"));

// ─── Keyword table ───────────────────────────────────────────────────────────

/// Bilingual keyword → category table.
///
/// Deliberately a slice, not a map: lookup order is table order, so a token
/// that matched two entries resolves to the earlier one rather than map
/// iteration order. The first matching *token* in left-to-right scan order
/// wins.
pub(crate) const KEYWORDS: &[(&str, Category)] = &[
  ("career", Category::Career),
  ("करियर", Category::Career),
  ("job", Category::Career),
  ("marriage", Category::Marriage),
  ("विवाह", Category::Marriage),
  ("बिहे", Category::Marriage),
  ("health", Category::Health),
  ("स्वास्थ्य", Category::Health),
  ("future", Category::Future),
  ("भविष्य", Category::Future),
  ("studies", Category::Studies),
  ("पढाइ", Category::Studies),
  ("wealth", Category::Wealth),
  ("धन", Category::Wealth),
  ("love", Category::Love),
  ("प्रेम", Category::Love),
  ("business", Category::Business),
  ("व्यापार", Category::Business),
  ("family", Category::Family),
  ("परिवार", Category::Family),
];

// ─── Scanners ────────────────────────────────────────────────────────────────

/// First `YYYY-MM-DD`-shaped substring, validated as a real calendar date.
pub(crate) fn find_date(text: &str) -> Result<Option<BirthDate>> {
  let Some(m) = DATE_PATTERN.find(text) else {
    return Ok(None);
  };
  BirthDate::parse(m.as_str())
    .map(Some)
    .map_err(|_| Error::InvalidDate {
      value: m.as_str().to_string(),
    })
}

/// First whitespace token that matches the keyword table.
///
/// Tokens are trimmed of ASCII edge punctuation before lookup so `career?`
/// and `(job)` still match, then lowercased for the English keywords.
pub(crate) fn find_category(text: &str) -> Option<Category> {
  for raw in text.split_whitespace() {
    let token = raw
      .trim_matches(|c: char| c.is_ascii_punctuation())
      .to_lowercase();
    if token.is_empty() {
      continue;
    }
    if let Some(&(_, category)) =
      KEYWORDS.iter().find(|(keyword, _)| *keyword == token)
    {
      return Some(category);
    }
  }
  None
}

// ─── Tests ───────────────────────────────────────────────────────────────────
