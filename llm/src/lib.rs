//! Generation client for the flashcard pipeline.
//!
//! The `llm` crate defines a [`Completer`] trait for an opaque
//! text-completion endpoint, a concrete [`OllamaClient`], the prompt
//! wording for both generation stages, and the two-stage [`Generator`]
//! that turns course text into a summary and a raw flashcard blob.

pub mod client;
pub mod config;
pub mod generator;
pub mod prompt;
pub mod traits;

pub use client::OllamaClient;
pub use config::LlmConfig;
pub use generator::{Generator, StudySet};
pub use traits::{Completer, LlmError};
