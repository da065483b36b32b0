//! The prediction pipeline and the never-fails chat boundary.

use chrono::{Datelike, Utc};
use jyotish_core::{
  birth::BirthDate, category::Category, chart::Chart, language::Language,
};
use jyotish_rules::{Template, TemplatePool, remedy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::{
  backend::ChatBackend,
  error::Result,
  session::{Role, Session},
};

// ─── Selection mode ──────────────────────────────────────────────────────────

/// How the narrative template is drawn from the pool.
///
/// The chart is always deterministic; whether the narrative text is too was
/// left open by the source variants. `Seeded` (the default) draws from a
/// PRNG seeded by the same birth-date seed, so an entire response reproduces
/// across runs. `Entropy` keeps the original fresh-every-call variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
  #[default]
  Seeded,
  Entropy,
}

// ─── Prediction ──────────────────────────────────────────────────────────────

/// A fully-assembled astrology prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
  pub birth_date: BirthDate,
  pub chart:      Chart,
  pub age:        i32,
  pub narrative:  String,
  pub remedy:     String,
}

impl Prediction {
  /// The full markdown response: birth prefix line, chart summary,
  /// narrative, remedy line.
  pub fn markdown(&self, language: Language) -> String {
    let prefix = match language {
      Language::English => "Birth:",
      Language::Nepali => "जन्म:",
    };
    format!(
      "**{prefix}** {date}\n{summary}\n\n{narrative}\n\n**Remedy / उपाय:** \
       {remedy}",
      date = self.birth_date,
      summary = self.chart.summary(language),
      narrative = self.narrative,
      remedy = self.remedy,
    )
  }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// The chat engine: one language, one template pool, one chat backend.
///
/// Holds no per-request state — the chat log is externally owned and passed
/// into [`Engine::respond`] by reference.
pub struct Engine<B> {
  backend:  B,
  pool:     TemplatePool,
  language: Language,
  mode:     SelectionMode,
}

impl<B: ChatBackend> Engine<B> {
  pub fn new(backend: B, pool: TemplatePool, language: Language) -> Engine<B> {
    Engine {
      backend,
      pool,
      language,
      mode: SelectionMode::default(),
    }
  }

  pub fn with_selection_mode(mut self, mode: SelectionMode) -> Engine<B> {
    self.mode = mode;
    self
  }

  pub fn language(&self) -> Language {
    self.language
  }

  /// The pure prediction path. `year` is injected so tests can pin the
  /// clock; [`Engine::respond`] passes the current year.
  pub fn predict_at_year(
    &self,
    birth_date: &BirthDate,
    category: Category,
    year: i32,
  ) -> Result<Prediction> {
    let chart = Chart::derive(birth_date);
    let age = birth_date.age_at_year(year);
    let template = self.choose_template(birth_date, category);
    let narrative = template.render(&chart, age, self.language)?;
    Ok(Prediction {
      birth_date: *birth_date,
      chart,
      age,
      narrative,
      remedy: remedy(category, self.language).to_string(),
    })
  }

  fn choose_template(
    &self,
    birth_date: &BirthDate,
    category: Category,
  ) -> Template {
    match self.mode {
      SelectionMode::Seeded => {
        let mut rng = ChaCha8Rng::seed_from_u64(birth_date.seed());
        self.pool.pick(category, &mut rng).clone()
      }
      SelectionMode::Entropy => {
        self.pool.pick(category, &mut rand::thread_rng()).clone()
      }
    }
  }

  // ── The boundary ────────────────────────────────────────────────────────

  /// Process one chat line end to end, appending both the user message and
  /// the reply to `session`.
  ///
  /// Never fails: extraction errors, render errors, and backend failures all
  /// collapse into a best-effort reply. Errors are logged, not surfaced.
  pub async fn respond(&self, session: &mut Session, input: &str) -> String {
    let input = input.trim();
    session.push(Role::User, input);

    let reply = match self.reply_inner(input).await {
      Ok(reply) => reply,
      Err(err) => {
        warn!(%err, "prediction failed; falling back to general chat");
        self.general_chat(input).await
      }
    };

    session.push(Role::Assistant, reply.clone());
    reply
  }

  async fn reply_inner(&self, input: &str) -> Result<String> {
    let extracted = jyotish_extract::extract(input)?;
    match (extracted.birth_date, extracted.category) {
      (Some(birth_date), Some(category)) => {
        let year = Utc::now().year();
        let prediction = self.predict_at_year(&birth_date, category, year)?;
        Ok(prediction.markdown(self.language))
      }
      // Anything short of a full date+category pair is general chat.
      _ => Ok(self.general_chat(input).await),
    }
  }

  async fn general_chat(&self, input: &str) -> String {
    match self.backend.reply(input, self.language).await {
      Ok(text) => text,
      Err(err) => {
        debug!(%err, "chat backend unavailable; using default reply");
        default_reply(self.language).to_string()
      }
    }
  }
}

/// The fixed reply used when the chat backend is unavailable.
pub fn default_reply(language: Language) -> &'static str {
  match language {
    Language::English => "I'm here!",
    Language::Nepali => "म यहाँ छु!",
  }
}
