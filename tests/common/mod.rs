#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use portfolio_brainstorm::{ClientConfig, GeminiClient, RetryPolicy, Sleeper};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const MODEL: &str = "gemini-test";
pub const PERSONA: &str = "You are a test strategist.";
pub const ENDPOINT_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// Records requested delays instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(API_KEY)
        .with_base_url(format!("{}/v1beta", server.uri()))
        .with_model(MODEL)
        .with_system_instruction(PERSONA)
        .with_retry(RetryPolicy::default())
}

/// Client against the mock server with the default retry policy and a recording sleeper.
pub fn client_for(server: &MockServer) -> (GeminiClient, RecordingSleeper) {
    let sleeper = RecordingSleeper::default();
    let client = GeminiClient::new(config_for(server))
        .expect("Failed to create Gemini client")
        .with_sleeper(sleeper.clone());
    (client, sleeper)
}

pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "systemInstruction": { "parts": [{ "text": PERSONA }] }
    })
}

pub fn text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 42, "candidatesTokenCount": 64, "totalTokenCount": 106 }
    })
}

pub fn millis(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_millis).collect()
}
