//! CSV export for parsed flashcards.

use crate::{ExportError, Flashcard};

/// Serialize cards as RFC 4180 CSV with a `Question,Answer` header row.
///
/// One data row per card, in sequence order. The `csv` crate quotes any
/// field containing the delimiter, a quote, or a newline, so the output
/// parses back into the identical card sequence.
pub fn to_csv(cards: &[Flashcard]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    // Written by hand so an empty card list still produces the header.
    writer.write_record(["Question", "Answer"])?;
    for card in cards {
        writer.serialize(card)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes).expect("csv writer emits UTF-8"))
}
