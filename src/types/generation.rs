use crate::Error;

/// Returned when the service answered but no usable text could be extracted.
pub const MALFORMED_FALLBACK: &str = "I couldn't generate a strategy at this moment.";

/// Returned when every attempt failed.
pub const CONNECTION_FALLBACK: &str = "Connection error. Please try again later.";

/// A single generation call: the user's prompt plus the fixed persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
        }
    }
}

/// Text handed to the presentation layer. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
}

impl GenerationResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this result is one of the fixed fallback sentences.
    pub fn is_fallback(&self) -> bool {
        self.text == MALFORMED_FALLBACK || self.text == CONNECTION_FALLBACK
    }
}

impl std::fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<GenerationResult> for String {
    fn from(result: GenerationResult) -> Self {
        result.text
    }
}

/// Categorized outcome of the attempt loop, kept for diagnostics.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The first candidate's text.
    Generated { text: String, attempts: u32 },
    /// A success response whose body held no usable text. Not retried.
    Malformed { reason: Error, attempts: u32 },
    /// Every attempt failed; `last_error` is the final failure.
    Exhausted { last_error: Error, attempts: u32 },
}

impl GenerationOutcome {
    /// Number of network requests issued.
    pub fn attempts(&self) -> u32 {
        match self {
            GenerationOutcome::Generated { attempts, .. }
            | GenerationOutcome::Malformed { attempts, .. }
            | GenerationOutcome::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// Collapse into the caller-facing string.
    pub fn into_result(self) -> GenerationResult {
        match self {
            GenerationOutcome::Generated { text, .. } => GenerationResult::new(text),
            GenerationOutcome::Malformed { .. } => GenerationResult::new(MALFORMED_FALLBACK),
            GenerationOutcome::Exhausted { .. } => GenerationResult::new(CONNECTION_FALLBACK),
        }
    }
}

impl From<GenerationOutcome> for GenerationResult {
    fn from(outcome: GenerationOutcome) -> Self {
        outcome.into_result()
    }
}
