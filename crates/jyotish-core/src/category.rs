//! Question categories — the life-domain a chat line asks about.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The life-domain the user is asking about. The union of all categories the
/// product variants expose; the `job` keyword folds into [`Category::Career`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Career,
  Marriage,
  Health,
  Future,
  Studies,
  Wealth,
  Love,
  Business,
  Family,
}

impl Category {
  /// The lowercase English keyword; doubles as the rule-file stem
  /// (`data/rules/<this>.txt`).
  pub fn as_str(self) -> &'static str {
    match self {
      Category::Career => "career",
      Category::Marriage => "marriage",
      Category::Health => "health",
      Category::Future => "future",
      Category::Studies => "studies",
      Category::Wealth => "wealth",
      Category::Love => "love",
      Category::Business => "business",
      Category::Family => "family",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn stems_are_unique() {
    let mut stems: Vec<&str> = Category::iter().map(|c| c.as_str()).collect();
    let before = stems.len();
    stems.sort();
    stems.dedup();
    assert_eq!(stems.len(), before);
  }
}
