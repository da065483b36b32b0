//! Narrative templates and placeholder substitution.

use jyotish_core::{chart::Chart, language::Language};

use crate::error::{Error, Result};

/// A narrative sentence with optional `{lagna}` `{sun}` `{moon}` `{age}`
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
  pub fn new(text: impl Into<String>) -> Self {
    Template(text.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Fill every placeholder from `chart` and `age`.
  ///
  /// Any `{…}` token left after substitution is an error, not a best-effort
  /// passthrough — a half-filled sentence must never reach the user.
  pub fn render(
    &self,
    chart: &Chart,
    age: i32,
    language: Language,
  ) -> Result<String> {
    let filled = self
      .0
      .replace("{lagna}", chart.lagna.name(language))
      .replace("{sun}", chart.sun.name(language))
      .replace("{moon}", chart.moon.name(language))
      .replace("{age}", &age.to_string());
    if let Some(name) = unresolved(&filled) {
      return Err(Error::UnresolvedPlaceholder(name));
    }
    Ok(filled)
  }
}

impl From<&str> for Template {
  fn from(s: &str) -> Self {
    Template::new(s)
  }
}

/// First `{name}` token remaining in `s`, if any.
fn unresolved(s: &str) -> Option<String> {
  let start = s.find('{')?;
  let rest = &s[start + 1..];
  let end = rest.find('}')?;
  Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
  use jyotish_core::birth::BirthDate;

  use super::*;

  fn chart() -> Chart {
    Chart::derive(&BirthDate::parse("2004-06-11").unwrap())
  }

  #[test]
  fn fills_all_placeholders() {
    let t = Template::new("{lagna}/{sun}/{moon} at {age}");
    let c = chart();
    let out = t.render(&c, 21, Language::English).unwrap();
    assert_eq!(
      out,
      format!(
        "{}/{}/{} at 21",
        c.lagna.name(Language::English),
        c.sun.name(Language::English),
        c.moon.name(Language::English),
      )
    );
  }

  #[test]
  fn repeated_placeholders_all_fill() {
    let t = Template::new("{age} and {age}");
    assert_eq!(t.render(&chart(), 7, Language::English).unwrap(), "7 and 7");
  }

  #[test]
  fn nepali_rendering_uses_devanagari_names() {
    let t = Template::new("{lagna} लग्न");
    let c = chart();
    let out = t.render(&c, 21, Language::Nepali).unwrap();
    assert!(out.starts_with(c.lagna.name(Language::Nepali)));
  }

  #[test]
  fn unknown_placeholder_is_an_error() {
    let t = Template::new("ruled by {planet}");
    let err = t.render(&chart(), 21, Language::English).unwrap_err();
    assert!(matches!(
      err,
      Error::UnresolvedPlaceholder(name) if name == "planet"
    ));
  }

  #[test]
  fn plain_text_passes_through() {
    let t = Template::new("Good fortune.");
    assert_eq!(
      t.render(&chart(), 21, Language::English).unwrap(),
      "Good fortune."
    );
  }
}
