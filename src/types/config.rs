use std::env;
use std::time::Duration;

use crate::retry::RetryPolicy;
use crate::Error;

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Persona sent as the system instruction with every request.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are an AI Strategy Consultant for Jateen Mourya's portfolio. Jateen is an AI/ML & Data Analytics student skilled in Python, Java, TensorFlow, Scikit-learn, SQL, AWS, and Power BI. When a user provides a project idea, generate a concise technical roadmap (3-4 steps) explaining how Jateen could build it using his specific tech stack. Keep it cinematic, professional, and brief.";

/// Per-attempt transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the text-generation client.
///
/// The credential is not validated: an empty key produces requests the
/// service rejects, which the client reports to its caller as a connection
/// error like any other outage.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub system_instruction: String,
    pub retry: RetryPolicy,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            retry: RetryPolicy::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create configuration with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint (proxies, mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full `generateContent` URL for the configured model, without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Create configuration from environment variables.
    ///
    /// `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL` and
    /// `GEMINI_SYSTEM_INSTRUCTION` are optional strings. `GEMINI_MAX_ATTEMPTS`
    /// and `GEMINI_BASE_DELAY_MS` must be unsigned integers when set.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::new(env::var("GEMINI_API_KEY").unwrap_or_default());

        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(instruction) = env::var("GEMINI_SYSTEM_INSTRUCTION") {
            config.system_instruction = instruction;
        }
        if let Ok(raw) = env::var("GEMINI_MAX_ATTEMPTS") {
            config.retry.max_attempts = raw.trim().parse().map_err(|_| {
                Error::config(format!("GEMINI_MAX_ATTEMPTS must be an integer, got '{raw}'"))
            })?;
        }
        if let Ok(raw) = env::var("GEMINI_BASE_DELAY_MS") {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                Error::config(format!("GEMINI_BASE_DELAY_MS must be an integer, got '{raw}'"))
            })?;
            config.retry.base_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
