//! Core domain types for the JyotishAI chat engine.
//!
//! This crate is deliberately free of I/O. Free-text parsing lives in
//! `jyotish-extract`, template pools in `jyotish-rules`, the chat pipeline in
//! `jyotish-engine`. All other crates depend on this one; it depends on
//! nothing heavier than `chrono` and a seedable PRNG.
//!
//! Nothing here performs astronomical computation. A [`chart::Chart`] is a
//! *fabricated* sign triple, fully determined by the birth-date string — the
//! only guarantee is that the same date always yields the same chart.

pub mod birth;
pub mod category;
pub mod chart;
pub mod error;
pub mod language;
pub mod sign;

pub use error::{Error, Result};
