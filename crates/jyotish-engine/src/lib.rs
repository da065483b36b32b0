//! The JyotishAI chat engine — extract → derive → select → respond.
//!
//! The pure pipeline lives in [`predict`]: derive a deterministic chart from
//! the birth date, pick and fill a narrative template, append the remedy.
//! [`Engine::respond`] is the boundary: it never fails, converting every
//! error into a best-effort reply (general chat via a [`ChatBackend`], or a
//! fixed default string when that too is unavailable), so the typed error
//! taxonomy stays inspectable by tests while callers see only strings.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod backend;
pub mod error;
pub mod predict;
pub mod session;

pub use backend::{ChatBackend, NullBackend};
pub use error::{Error, Result};
pub use predict::{Engine, Prediction, SelectionMode, default_reply};
pub use session::{Message, Role, Session};
