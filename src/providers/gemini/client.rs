use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use super::types::{GeminiRequest, GeminiResponse};
use crate::provider::TextGenerator;
use crate::retry::{Sleeper, TokioSleeper};
use crate::{ClientConfig, Error, GenerationOutcome, GenerationRequest, GenerationResult};

/// Result of a request that reached the service and came back with a success status.
enum Delivered {
    Text(String),
    Malformed(Error),
}

/// Gemini `generateContent` client with bounded exponential-backoff retries.
///
/// Each call to [`generate`](TextGenerator::generate) runs its own attempt
/// sequence; the client holds no per-call state and can be shared freely.
pub struct GeminiClient {
    client: Client,
    config: ClientConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl GeminiClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        if config.api_key.is_empty() {
            tracing::warn!(
                model = %config.model,
                "Gemini API key is empty; requests will fail and callers will only see the connection fallback"
            );
        }

        Ok(Self {
            client,
            config,
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Create a new client from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Replace the mechanism used to wait between attempts.
    pub fn with_sleeper(mut self, sleeper: impl Sleeper) -> Self {
        self.sleeper = Arc::new(sleeper);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Pair the prompt with the configured persona.
    pub fn request_for(&self, prompt: &str) -> GenerationRequest {
        GenerationRequest::new(prompt, self.config.system_instruction.clone())
    }

    /// Run the attempt loop and report how it ended.
    pub async fn generate_detailed(&self, prompt: &str) -> GenerationOutcome {
        let request = self.request_for(prompt);
        let body = GeminiRequest::from(&request);
        let endpoint = self.config.endpoint();
        let policy = self.config.retry;

        let mut attempt = 0;
        loop {
            tracing::debug!(attempt = attempt + 1, model = %self.config.model, "Sending generateContent request");

            match self.send(&endpoint, &body).await {
                Ok(Delivered::Text(text)) => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt + 1, "Generation succeeded after retry");
                    }
                    return GenerationOutcome::Generated {
                        text,
                        attempts: attempt + 1,
                    };
                }
                Ok(Delivered::Malformed(reason)) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        error = %reason,
                        "Generation response had no usable text"
                    );
                    return GenerationOutcome::Malformed {
                        reason,
                        attempts: attempt + 1,
                    };
                }
                Err(e) if policy.is_last_attempt(attempt) => {
                    tracing::error!(
                        attempts = attempt + 1,
                        status = e.status_code(),
                        error = %e,
                        "Generation failed after all retry attempts"
                    );
                    return GenerationOutcome::Exhausted {
                        last_error: e,
                        attempts: attempt + 1,
                    };
                }
                Err(e) => {
                    let delay = policy.delay_for(attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_attempts = policy.attempts(),
                        delay_ms = whole_millis(delay),
                        status = e.status_code(),
                        error = %e,
                        "Generation request failed, retrying"
                    );
                    self.sleeper.sleep(delay).await;
                }
            }

            attempt += 1;
        }
    }

    /// Issue one request. `Err` means the attempt failed and may be retried.
    async fn send(&self, endpoint: &str, body: &GeminiRequest) -> Result<Delivered, Error> {
        let response = self
            .client
            .post(endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await?;
        Ok(Self::extract(&bytes))
    }

    /// Pull the first candidate's text out of a success body.
    fn extract(bytes: &[u8]) -> Delivered {
        let parsed = match serde_json::from_slice::<GeminiResponse>(bytes) {
            Ok(parsed) => parsed,
            Err(e) => return Delivered::Malformed(Error::Serialization(e)),
        };

        match parsed.first_text() {
            Ok(text) => Delivered::Text(text),
            Err(reason) => Delivered::Malformed(Error::malformed(reason)),
        }
    }
}

/// Milliseconds in `delay`, saturating at `u64::MAX`.
fn whole_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GenerationResult {
        self.generate_detailed(prompt).await.into()
    }
}
