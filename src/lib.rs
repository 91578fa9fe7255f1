//! Text generation for the portfolio site's brainstorm feature.
//!
//! This library sends a project idea to Google Gemini together with a fixed
//! strategist persona and returns a short roadmap. Transient failures are
//! retried with exponential backoff, and every failure is turned into one of
//! two fixed fallback sentences, so callers always receive a string.

pub mod brainstorm;
pub mod error;
pub mod provider;
pub mod providers;
pub mod retry;
pub mod types;

// Re-export core types for easy usage
pub use brainstorm::Brainstorm;
pub use error::Error;
pub use provider::TextGenerator;
pub use providers::*;
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};
pub use types::*;
