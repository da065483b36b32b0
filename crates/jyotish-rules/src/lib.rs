//! Canned-response rules for JyotishAI.
//!
//! A response is built from two lookups: a narrative [`Template`] drawn from
//! the per-category [`TemplatePool`], and a fixed [`remedy`] line appended
//! verbatim. Pools ship with built-in bilingual defaults and can be overlaid
//! from a rules directory (`<category>.txt`, one template per line); absent
//! files are tolerated.
//!
//! Template selection takes a caller-supplied [`rand::Rng`] so the engine
//! decides whether the draw is seeded (reproducible) or fresh entropy.

pub mod error;
mod pool;
mod remedy;
mod template;

pub use error::{Error, Result};
pub use pool::TemplatePool;
pub use remedy::remedy;
pub use template::Template;
