//! Splits a raw generation blob into [`Flashcard`] records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Flashcard;

/// Question text used when an entry lacks the `Q:`/`A:` markers.
pub const MISSING_QUESTION: &str = "N/A";

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

// Lazy question capture so the answer starts at the first `A:`; the answer
// capture runs to the end of the entry, embedded newlines included.
static QA_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^Q:\s*(.*?)\s*A:\s*(.*)$").unwrap());

/// Parse a flashcard blob into ordered records.
///
/// Entries are separated by blank lines (a newline, optional whitespace,
/// another newline). Entries that are empty after trimming are dropped. An
/// entry that does not follow the `Q: ... A: ...` layout still yields a
/// record with [`MISSING_QUESTION`] as the question and the full entry text
/// as the answer, so nothing the model produced is lost. The same blob
/// always yields the same sequence.
pub fn parse_flashcards(blob: &str) -> Vec<Flashcard> {
    BLANK_LINE
        .split(blob)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match QA_ENTRY.captures(entry) {
            Some(caps) => Flashcard::new(caps[1].trim(), caps[2].trim()),
            None => Flashcard::unparsed(entry),
        })
        .collect()
}
