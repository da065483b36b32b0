//! Fixed remedy lines, keyed by category.

use jyotish_core::{category::Category, language::Language};

/// The remedy sentence appended verbatim to every astrology response.
/// Categories without a specific remedy share a generic one.
pub fn remedy(category: Category, language: Language) -> &'static str {
  match (language, category) {
    (Language::English, Category::Career) => "Donate banana on Thursday.",
    (Language::English, Category::Marriage) => {
      "Offer milk to Shivling on Monday."
    }
    (Language::English, Category::Health) => {
      "Chant Hanuman Chalisa on Tuesday."
    }
    (Language::English, _) => "Do regular puja.",
    (Language::Nepali, Category::Career) => "बिहीबार केरा दान गर्नुहोस्।",
    (Language::Nepali, Category::Marriage) => {
      "सोमबार शिवलिंगमा दूध चढाउनुहोस्।"
    }
    (Language::Nepali, Category::Health) => {
      "मंगलबार हनुमान चालिसा पाठ गर्नुहोस्।"
    }
    (Language::Nepali, _) => "नियमित पूजा गर्नुहोस्।",
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn every_category_has_a_remedy_in_both_languages() {
    for category in Category::iter() {
      for language in [Language::English, Language::Nepali] {
        assert!(!remedy(category, language).is_empty());
      }
    }
  }

  #[test]
  fn unkeyed_categories_share_the_default() {
    assert_eq!(
      remedy(Category::Wealth, Language::English),
      remedy(Category::Family, Language::English)
    );
  }
}
