use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error: {0}")]
    Network(String),
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// An opaque text-completion endpoint: one prompt in, one block of text
/// out. Implementations decide which backend and model serve the request.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
