//! Deterministic chart derivation.
//!
//! The chart is fabricated, not computed: a ChaCha8 PRNG is seeded from the
//! birth-date string and drawn exactly once. ChaCha8 has a specified output
//! stream for a given seed, so the same date yields the same chart on every
//! platform and in every process run — the portability the platform-default
//! generator could not promise.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{birth::BirthDate, language::Language, sign::Sign};

/// The fabricated Lagna/Sun/Moon sign triple for a birth date.
///
/// Invariant: `sun.index() == (lagna.index() + 1) % 12` and
/// `moon.index() == (lagna.index() + 2) % 12`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Chart {
  pub lagna: Sign,
  pub sun:   Sign,
  pub moon:  Sign,
}

impl Chart {
  /// Derive the chart for `birth_date`. Infallible.
  ///
  /// One uniform draw in `0..12` selects the Lagna; Sun and Moon sit at
  /// fixed +1 / +2 offsets, wrapping modulo 12.
  pub fn derive(birth_date: &BirthDate) -> Chart {
    let mut rng = ChaCha8Rng::seed_from_u64(birth_date.seed());
    let idx = rng.gen_range(0..Sign::COUNT);
    Chart {
      lagna: Sign::from_index(idx),
      sun:   Sign::from_index(idx + 1),
      moon:  Sign::from_index(idx + 2),
    }
  }

  /// The `**Lagna:** … | **Sun:** … | **Moon:** …` markdown summary line.
  pub fn summary(&self, language: Language) -> String {
    format!(
      "**Lagna:** {} | **Sun:** {} | **Moon:** {}",
      self.lagna.name(language),
      self.sun.name(language),
      self.moon.name(language),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(s: &str) -> BirthDate {
    BirthDate::parse(s).unwrap()
  }

  #[test]
  fn identical_dates_yield_identical_charts() {
    let a = Chart::derive(&date("2004-06-11"));
    for _ in 0..10 {
      assert_eq!(Chart::derive(&date("2004-06-11")), a);
    }
  }

  #[test]
  fn cyclic_offset_invariant_holds() {
    // Sweep a spread of dates; every chart must satisfy the +1/+2 offsets.
    for year in [1950, 1984, 2000, 2004, 2020] {
      for (month, day) in [(1, 1), (6, 11), (12, 31)] {
        let d = date(&format!("{year:04}-{month:02}-{day:02}"));
        let c = Chart::derive(&d);
        assert_eq!(c.sun.index(), (c.lagna.index() + 1) % 12);
        assert_eq!(c.moon.index(), (c.lagna.index() + 2) % 12);
      }
    }
  }

  #[test]
  fn different_seeds_can_differ() {
    // Not a uniformity claim — just that the seed actually feeds the draw.
    let charts: Vec<Chart> = (1..=12)
      .map(|m| Chart::derive(&date(&format!("2004-{m:02}-11"))))
      .collect();
    assert!(charts.iter().any(|c| c != &charts[0]));
  }

  #[test]
  fn summary_uses_selected_language() {
    let c = Chart::derive(&date("2004-06-11"));
    let en = c.summary(Language::English);
    assert!(en.starts_with("**Lagna:**"));
    assert!(en.contains(c.lagna.name(Language::English)));
    let ne = c.summary(Language::Nepali);
    assert!(ne.contains(c.lagna.name(Language::Nepali)));
  }
}
