//! Response language selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The language every user-facing string is rendered in: sign names,
/// narrative templates, remedies, and the response prefix.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  English,
  Nepali,
}

impl Language {
  /// The name the LLM prompt uses ("Reply in <this> only, …").
  pub fn as_str(self) -> &'static str {
    match self {
      Language::English => "English",
      Language::Nepali => "Nepali",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Language {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "english" | "en" => Ok(Language::English),
      "nepali" | "ne" | "नेपाली" => Ok(Language::Nepali),
      other => Err(Error::UnknownLanguage(other.to_string())),
    }
  }
}
