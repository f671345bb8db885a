//! PDF export for parsed flashcards.
//!
//! The document format needs a Unicode-capable TTF font supplied by the
//! caller, since the source text can contain arbitrary scripts. A missing
//! or unreadable font is an explicit error; there is no non-Unicode
//! fallback.

use std::path::Path;

use genpdf::{elements, fonts, SimplePageDecorator};

use crate::{ExportError, Flashcard};

/// Format one text block per card, numbered by 1-based sequence position.
///
/// Fallback cards get a block like any other; the numbering comes from the
/// parsed order, not from anything in the source text.
pub fn blocks(cards: &[Flashcard]) -> Vec<String> {
    cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            format!(
                "Flashcard {}:\nQ: {}\nA: {}",
                idx + 1,
                card.question,
                card.answer
            )
        })
        .collect()
}

/// Render the cards into a PDF held entirely in memory.
///
/// Nothing is written anywhere on failure; the caller only gets bytes once
/// the whole document has rendered.
pub fn render(cards: &[Flashcard], font_path: &Path) -> Result<Vec<u8>, ExportError> {
    let data = std::fs::read(font_path).map_err(|source| ExportError::Font {
        path: font_path.to_path_buf(),
        source,
    })?;
    let font = fonts::FontData::new(data, None)?;
    let family = fonts::FontFamily {
        regular: font.clone(),
        bold: font.clone(),
        italic: font.clone(),
        bold_italic: font,
    };

    let mut doc = genpdf::Document::new(family);
    doc.set_title("Flashcards");
    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);

    for block in blocks(cards) {
        for line in block.lines() {
            doc.push(elements::Paragraph::new(line.to_owned()));
        }
        doc.push(elements::Break::new(1));
    }

    let mut buf = Vec::new();
    doc.render(&mut buf)?;
    Ok(buf)
}
