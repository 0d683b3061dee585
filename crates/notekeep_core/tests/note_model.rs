use notekeep_core::{ColorTag, Note};

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let mut note = Note::new(3, "Call dentist", "Before Friday");
    note.color = ColorTag::Orange;

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Call dentist");
    assert_eq!(json["text"], "Before Friday");
    assert_eq!(json["color"], "orange");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn legacy_widget_blob_shape_decodes_directly() {
    // Shape written by the browser widget this store replaces.
    let blob = r#"[{"id":1,"title":"Groceries","text":"Milk, eggs","color":"white"}]"#;
    let notes: Vec<Note> = serde_json::from_str(blob).unwrap();
    assert_eq!(notes, vec![Note::new(1, "Groceries", "Milk, eggs")]);
}

#[test]
fn default_color_is_white() {
    assert_eq!(ColorTag::default(), ColorTag::White);
    assert_eq!(ColorTag::default().as_str(), "white");
}
