use serde::{Deserialize, Serialize};

use crate::GenerationRequest;

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub system_instruction: GeminiContent,
}

/// A list of parts. Neither side of this exchange sets a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    pub text: String,
}

impl GeminiContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

impl From<&GenerationRequest> for GeminiRequest {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            contents: vec![GeminiContent::text(request.prompt.clone())],
            system_instruction: GeminiContent::text(request.system_instruction.clone()),
        }
    }
}

/// `generateContent` response body. Every level is optional so that a
/// partial body still deserializes and the gap can be reported precisely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Option<Vec<GeminiResponsePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate.
    ///
    /// Returns a description of the first missing piece otherwise. Empty text
    /// counts as missing.
    pub fn first_text(self) -> Result<String, String> {
        let candidate = self
            .candidates
            .ok_or("response has no candidates")?
            .into_iter()
            .next()
            .ok_or("candidates array is empty")?;
        let finish_reason = candidate.finish_reason;
        let part = candidate
            .content
            .ok_or("first candidate has no content")?
            .parts
            .ok_or("first candidate content has no parts")?
            .into_iter()
            .next()
            .ok_or("first candidate content parts are empty")?;

        match part.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(match finish_reason {
                Some(reason) => format!("first part has no text (finishReason: {reason})"),
                None => "first part has no text".to_string(),
            }),
        }
    }
}
