//! Two-stage pipeline: summarize the source text, then derive flashcards
//! from the summary.

use log::{error, warn};

use crate::prompt;
use crate::traits::{Completer, LlmError};

/// Result of a full generation run.
///
/// The flashcard stage keeps its own error so a failure there never hides
/// a successfully produced summary.
#[derive(Debug)]
pub struct StudySet {
    pub summary: String,
    pub flashcards: Result<String, LlmError>,
}

/// Drives the two completion calls against any [`Completer`].
pub struct Generator<C> {
    client: C,
}

impl<C: Completer> Generator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Summarize `text`. The reply is trimmed; an empty reply counts as a
    /// failure.
    pub async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        let reply = self.client.complete(&prompt::summary_prompt(text)).await?;
        let summary = reply.trim();
        if summary.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(summary.to_string())
    }

    /// Ask for `count` flashcards derived from `summary`.
    ///
    /// The count is advisory only; the raw blob comes back exactly as the
    /// model produced it (trimmed), however many entries it holds.
    pub async fn flashcards(&self, summary: &str, count: usize) -> Result<String, LlmError> {
        let reply = self
            .client
            .complete(&prompt::flashcard_prompt(summary, count))
            .await?;
        let blob = reply.trim();
        if blob.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(blob.to_string())
    }

    /// Run both stages in order.
    ///
    /// Summarization failure is terminal: the flashcard call is never
    /// attempted. A flashcard failure still returns the summary, with the
    /// error carried in [`StudySet::flashcards`].
    pub async fn run(&self, text: &str, count: usize) -> Result<StudySet, LlmError> {
        let summary = match self.summarize(text).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("summarization failed: {e}");
                return Err(e);
            }
        };
        let flashcards = self.flashcards(&summary, count).await;
        if let Err(e) = &flashcards {
            warn!("flashcard generation failed: {e}");
        }
        Ok(StudySet {
            summary,
            flashcards,
        })
    }
}
