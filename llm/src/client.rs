//! HTTP client for a running Ollama server.
//!
//! This module provides the [`OllamaClient`] type which implements the
//! [`Completer`] trait by issuing a single non-streaming generation
//! request per prompt.

use async_trait::async_trait;
use ollama_rs::{generation::completion::request::GenerationRequest, Ollama};

use crate::config::LlmConfig;
use crate::traits::{Completer, LlmError};

pub struct OllamaClient {
    inner: Ollama,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let inner = Ollama::try_new(config.base_url.as_str())
            .map_err(|e| LlmError::Network(e.to_string()))?;
        Ok(Self {
            inner,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Completer for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let req = GenerationRequest::new(self.model.clone(), prompt.to_string());
        let res = self
            .inner
            .generate(req)
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;
        Ok(res.response)
    }
}
