//! Flashcard parsing and export formats.
//!
//! This crate turns the raw `Q:`/`A:` text a language model produces into
//! structured [`Flashcard`] records and renders them as CSV or PDF. The
//! plain-text export is a byte-for-byte passthrough of the raw blob and
//! needs no code here. Everything in this crate is pure and synchronous so
//! the parsing contract can be exercised against captured blobs without a
//! live model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parse;
pub mod pdf;
pub mod table;

pub use crate::parse::{parse_flashcards, MISSING_QUESTION};

/// One question/answer pair extracted from a generation blob.
///
/// The serde field names double as the CSV column headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl Flashcard {
    /// Create a card from a matched question and answer.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Create the fallback card for an entry that did not follow the
    /// expected `Q:`/`A:` layout. The whole entry text becomes the answer.
    pub fn unparsed(entry: impl Into<String>) -> Self {
        Self {
            question: MISSING_QUESTION.into(),
            answer: entry.into(),
        }
    }
}

/// Failures from the CSV and PDF exporters.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("font unavailable at {path}: {source}")]
    Font {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("pdf rendering failed: {0}")]
    Pdf(#[from] genpdf::error::Error),
}
