use std::sync::Arc;

use crate::GenerationResult;

/// A source of generated text for the presentation layer.
/// Implementations absorb every failure and always return some text.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Turn a prompt into text, or a fallback sentence when that is not possible.
    async fn generate(&self, prompt: &str) -> GenerationResult;
}

#[async_trait::async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate(&self, prompt: &str) -> GenerationResult {
        (**self).generate(prompt).await
    }
}

#[async_trait::async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> GenerationResult {
        (**self).generate(prompt).await
    }
}
