//! Per-category template pools.
//!
//! Pools start from built-in bilingual defaults and can be overlaid from a
//! rules directory of `<category>.txt` files, one template per line, blank
//! lines skipped. Missing files or a missing directory are tolerated — the
//! built-ins stay in place. A category with no templates at all falls back to
//! the pool's declared default template, never an error.

use std::{fs, path::Path};

use jyotish_core::{category::Category, language::Language};
use rand::{Rng, seq::SliceRandom};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::template::Template;

/// All narrative templates for one language, keyed by category.
#[derive(Debug, Clone)]
pub struct TemplatePool {
  by_category: Vec<(Category, Vec<Template>)>,
  default:     Template,
}

impl TemplatePool {
  /// The built-in pool for `language`. Categories without a built-in list
  /// (studies, wealth, …) resolve to the default template until a rules
  /// directory supplies them.
  pub fn builtin(language: Language) -> TemplatePool {
    match language {
      Language::English => TemplatePool {
        by_category: vec![
          (Category::Career, templates(&[
            "Career improves within two years under {lagna} influence.",
            "Success in a new job around age {age}.",
          ])),
          (Category::Marriage, templates(&[
            "Marriage is likely around age {age}.",
            "A good match comes soon while the Moon sits in {moon}.",
          ])),
          (Category::Health, templates(&[
            "Health stays stable under {lagna} influence.",
          ])),
          (Category::Future, templates(&[
            "The years after {age} brighten as {sun} strengthens.",
          ])),
        ],
        default: Template::new("Good fortune."),
      },
      Language::Nepali => TemplatePool {
        by_category: vec![
          (Category::Career, templates(&[
            "{lagna} लग्नका कारण करियर चाँडै राम्रो हुन्छ।",
          ])),
          (Category::Marriage, templates(&[
            "{age} वर्ष वरिपरि विवाहको योग छ।",
          ])),
          (Category::Health, templates(&[
            "{lagna} को प्रभावले स्वास्थ्य स्थिर रहन्छ।",
          ])),
        ],
        default: Template::new("तपाईंको भविष्य राम्रो छ।"),
      },
    }
  }

  /// Built-in pool for `language`, overlaid from `dir` when it exists.
  pub fn with_rules_dir(language: Language, dir: &Path) -> TemplatePool {
    let mut pool = Self::builtin(language);
    pool.overlay_dir(dir);
    pool
  }

  /// Replace each category's templates with the contents of
  /// `<dir>/<category>.txt` where that file exists and has any non-blank
  /// lines. Unreadable or absent files leave the built-ins untouched.
  pub fn overlay_dir(&mut self, dir: &Path) {
    for category in Category::iter() {
      let path = dir.join(format!("{category}.txt"));
      match fs::read_to_string(&path) {
        Ok(raw) => {
          let lines: Vec<Template> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(Template::new)
            .collect();
          if !lines.is_empty() {
            debug!(
              %category,
              count = lines.len(),
              path = %path.display(),
              "loaded rule file"
            );
            self.set(category, lines);
          }
        }
        Err(err) => {
          debug!(%category, path = %path.display(), %err, "no rule file");
        }
      }
    }
  }

  /// Replace the template list for `category`.
  pub fn set(&mut self, category: Category, list: Vec<Template>) {
    match self.by_category.iter_mut().find(|(c, _)| *c == category) {
      Some((_, existing)) => *existing = list,
      None => self.by_category.push((category, list)),
    }
  }

  /// The templates for `category`, if any are present and non-empty.
  pub fn templates(&self, category: Category) -> Option<&[Template]> {
    self
      .by_category
      .iter()
      .find(|(c, _)| *c == category)
      .map(|(_, list)| list.as_slice())
      .filter(|list| !list.is_empty())
  }

  /// The template used when a category has no pool entries.
  pub fn default_template(&self) -> &Template {
    &self.default
  }

  /// Uniform choice among `category`'s templates; the declared default when
  /// the category has none. Never fails.
  pub fn pick<R: Rng + ?Sized>(
    &self,
    category: Category,
    rng: &mut R,
  ) -> &Template {
    match self.templates(category) {
      Some(list) => list.choose(rng).unwrap_or(&self.default),
      None => &self.default,
    }
  }
}

fn templates(texts: &[&str]) -> Vec<Template> {
  texts.iter().copied().map(Template::new).collect()
}

#[cfg(test)]
mod tests {
  use rand::SeedableRng;
  use rand_chacha::ChaCha8Rng;

  use super::*;

  #[test]
  fn absent_category_falls_back_to_default() {
    let pool = TemplatePool::builtin(Language::English);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    // No built-in list for Wealth.
    let t = pool.pick(Category::Wealth, &mut rng);
    assert_eq!(t, pool.default_template());
    assert_eq!(t.as_str(), "Good fortune.");
  }

  #[test]
  fn present_category_picks_from_its_list() {
    let pool = TemplatePool::builtin(Language::English);
    let list = pool.templates(Category::Career).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let t = pool.pick(Category::Career, &mut rng);
    assert!(list.contains(t));
  }

  #[test]
  fn same_seed_picks_same_template() {
    let pool = TemplatePool::builtin(Language::English);
    let a = pool
      .pick(Category::Career, &mut ChaCha8Rng::seed_from_u64(7))
      .clone();
    let b = pool
      .pick(Category::Career, &mut ChaCha8Rng::seed_from_u64(7))
      .clone();
    assert_eq!(a, b);
  }

  #[test]
  fn set_replaces_an_existing_list() {
    let mut pool = TemplatePool::builtin(Language::English);
    pool.set(Category::Career, vec![Template::new("only this")]);
    assert_eq!(
      pool.templates(Category::Career).unwrap(),
      &[Template::new("only this")]
    );
  }

  #[test]
  fn empty_list_behaves_like_absent() {
    let mut pool = TemplatePool::builtin(Language::English);
    pool.set(Category::Career, Vec::new());
    assert!(pool.templates(Category::Career).is_none());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(pool.pick(Category::Career, &mut rng), pool.default_template());
  }

  #[test]
  fn overlay_of_missing_dir_keeps_builtins() {
    let mut pool = TemplatePool::builtin(Language::Nepali);
    pool.overlay_dir(Path::new("/nonexistent/rules"));
    assert!(pool.templates(Category::Career).is_some());
  }

  #[test]
  fn overlay_replaces_listed_categories_and_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
      dir.path().join("career.txt"),
      "Promotion under {lagna} influence.\n\n   \nA raise around age {age}.\n",
    )
    .unwrap();

    let mut pool = TemplatePool::builtin(Language::English);
    let marriage_before = pool.templates(Category::Marriage).unwrap().to_vec();
    pool.overlay_dir(dir.path());

    let career = pool.templates(Category::Career).unwrap();
    assert_eq!(career, &[
      Template::new("Promotion under {lagna} influence."),
      Template::new("A raise around age {age}."),
    ]);
    // Categories without a rule file keep their built-ins.
    assert_eq!(
      pool.templates(Category::Marriage).unwrap(),
      marriage_before.as_slice()
    );
  }

  #[test]
  fn overlay_with_all_blank_file_keeps_builtins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("health.txt"), "\n  \n\t\n").unwrap();

    let mut pool = TemplatePool::builtin(Language::English);
    let before = pool.templates(Category::Health).unwrap().to_vec();
    pool.overlay_dir(dir.path());
    assert_eq!(pool.templates(Category::Health).unwrap(), before.as_slice());
  }
}
