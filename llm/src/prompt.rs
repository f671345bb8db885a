//! Prompt wording for the two generation stages.
//!
//! These helpers centralize the wording so it can be tweaked consistently.
//! The flashcard prompt is the wire contract the parser depends on: bare
//! `Q:`/`A:` blocks, blank-line separated, no numbering.

/// Prompt asking for a plain prose summary with no commentary appended.
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Provide a concise and clear summary of the following text without adding any extra information:\n\n{text}"
    )
}

/// Prompt asking for exactly `count` flashcards in the format the parser
/// understands. The count is a request, not a guarantee.
pub fn flashcard_prompt(summary: &str, count: usize) -> String {
    format!(
        "Based on the summary below, generate exactly {count} question-answer flashcards.\n\n\
         Format each flashcard as follows without numbering:\n\
         Q: [Your question here]\n\
         A: [Your answer here]\n\n\
         Summary:\n{summary}"
    )
}
