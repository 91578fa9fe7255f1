//! Core types used throughout the library.

pub mod config;
pub mod generation;
pub mod prompt;

// Re-export commonly used types
pub use config::*;
pub use generation::*;
pub use prompt::*;
