use std::io::Write;

use cards::{pdf, table, ExportError, Flashcard};

#[test]
fn csv_has_header_and_rows_in_order() {
    let cards = vec![
        Flashcard::new("What is 2+2?", "4"),
        Flashcard::new("Capital of France?", "Paris"),
    ];
    let csv = table::to_csv(&cards).unwrap();
    assert_eq!(
        csv,
        "Question,Answer\nWhat is 2+2?,4\nCapital of France?,Paris\n"
    );
}

#[test]
fn csv_round_trips_awkward_fields() {
    let cards = vec![
        Flashcard::new("Commas, quotes \" and", "multi\nline"),
        Flashcard::new("plain", "value"),
    ];
    let csv = table::to_csv(&cards).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let parsed: Vec<Flashcard> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(parsed, cards);
}

#[test]
fn csv_of_no_cards_is_just_the_header() {
    assert_eq!(table::to_csv(&[]).unwrap(), "Question,Answer\n");
}

#[test]
fn pdf_blocks_number_every_card() {
    let cards = vec![
        Flashcard::new("q1", "a1"),
        Flashcard::unparsed("loose text"),
        Flashcard::new("q3", "a3"),
    ];
    let blocks = pdf::blocks(&cards);
    assert_eq!(
        blocks,
        vec![
            "Flashcard 1:\nQ: q1\nA: a1".to_string(),
            "Flashcard 2:\nQ: N/A\nA: loose text".to_string(),
            "Flashcard 3:\nQ: q3\nA: a3".to_string(),
        ]
    );
}

#[test]
fn pdf_render_without_font_fails_cleanly() {
    let missing = std::path::Path::new("no-such-fonts/missing.ttf");
    let err = pdf::render(&[Flashcard::new("q", "a")], missing).unwrap_err();
    assert!(matches!(err, ExportError::Font { .. }));
}

#[test]
fn pdf_render_rejects_invalid_font_data() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not a ttf").unwrap();
    let err = pdf::render(&[Flashcard::new("q", "a")], file.path()).unwrap_err();
    assert!(matches!(err, ExportError::Pdf(_)));
}
