//! Birth dates — the sole seed source for chart derivation.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated `YYYY-MM-DD` birth date.
///
/// Used only as a seed source and for age arithmetic; it carries no
/// astronomical meaning. Construction rejects impossible calendar dates, so
/// everything downstream can treat the value as well-formed.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
  /// Parse a `YYYY-MM-DD` string, rejecting dates that do not exist on the
  /// calendar (month outside 1–12, day outside the month's range).
  pub fn parse(s: &str) -> Result<Self> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
      .map(BirthDate)
      .map_err(|_| Error::InvalidDate(s.to_string()))
  }

  /// The derivation seed: the sum of the Unicode scalar values of the
  /// canonical `YYYY-MM-DD` rendering.
  ///
  /// Chart output is a pure function of this value; the algorithm is part of
  /// the crate's compatibility contract and must not change.
  pub fn seed(&self) -> u64 {
    self.to_string().chars().map(|c| c as u64).sum()
  }

  pub fn year(&self) -> i32 {
    self.0.year()
  }

  /// Age as a plain year difference. Month and day are deliberately ignored —
  /// the observed product behaviour, kept as-is.
  pub fn age_at_year(&self, year: i32) -> i32 {
    year - self.0.year()
  }
}

impl fmt::Display for BirthDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format("%Y-%m-%d"))
  }
}

impl FromStr for BirthDate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}
