//! The twelve zodiac signs, in the fixed order all derivation indexes into.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::language::Language;

/// A zodiac sign. Discriminants are the canonical 0-based positions used by
/// [`crate::chart::Chart`] index arithmetic.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
  Aries = 0,
  Taurus,
  Gemini,
  Cancer,
  Leo,
  Virgo,
  Libra,
  Scorpio,
  Sagittarius,
  Capricorn,
  Aquarius,
  Pisces,
}

/// English names, indexed by [`Sign::index`].
const ENGLISH: [&str; Sign::COUNT] = [
  "Aries",
  "Taurus",
  "Gemini",
  "Cancer",
  "Leo",
  "Virgo",
  "Libra",
  "Scorpio",
  "Sagittarius",
  "Capricorn",
  "Aquarius",
  "Pisces",
];

/// Nepali (Devanagari) names, indexed identically to [`ENGLISH`].
const NEPALI: [&str; Sign::COUNT] = [
  "मेष",
  "वृष",
  "मिथुन",
  "कर्कट",
  "सिंह",
  "कन्या",
  "तुला",
  "वृश्चिक",
  "धनु",
  "मकर",
  "कुम्भ",
  "मीन",
];

impl Sign {
  pub const COUNT: usize = 12;

  /// All signs in canonical order.
  pub const ALL: [Sign; Sign::COUNT] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
  ];

  /// Map a 0-based index onto a sign, wrapping modulo 12.
  pub fn from_index(index: usize) -> Sign {
    Self::ALL[index % Self::COUNT]
  }

  /// This sign's 0-based position in the canonical order.
  pub fn index(self) -> usize {
    self as usize
  }

  /// The sign's name in `language`.
  pub fn name(self, language: Language) -> &'static str {
    match language {
      Language::English => ENGLISH[self.index()],
      Language::Nepali => NEPALI[self.index()],
    }
  }
}

impl fmt::Display for Sign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name(Language::English))
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn from_index_wraps_modulo_twelve() {
    assert_eq!(Sign::from_index(0), Sign::Aries);
    assert_eq!(Sign::from_index(11), Sign::Pisces);
    assert_eq!(Sign::from_index(12), Sign::Aries);
    assert_eq!(Sign::from_index(13), Sign::Taurus);
  }

  #[test]
  fn index_round_trips() {
    for sign in Sign::ALL {
      assert_eq!(Sign::from_index(sign.index()), sign);
    }
  }

  #[test]
  fn names_are_parallel_lists() {
    // Derived iteration, the hand-written ALL table, and both name lists
    // must all agree on the canonical order.
    assert_eq!(Sign::iter().count(), Sign::COUNT);
    for (sign, expected) in Sign::iter().zip(Sign::ALL) {
      assert_eq!(sign, expected);
      assert!(sign.name(Language::English).is_ascii());
      assert!(!sign.name(Language::Nepali).is_ascii());
    }
    assert_eq!(Sign::Aries.name(Language::Nepali), "मेष");
    assert_eq!(Sign::Pisces.name(Language::English), "Pisces");
    assert_eq!(Sign::Pisces.name(Language::Nepali), "मीन");
  }
}
