use notekeep_core::{ColorTag, NoteStore};
use std::collections::HashSet;

#[test]
fn first_note_in_empty_store_gets_id_one_and_default_color() {
    let mut store = NoteStore::open_in_memory();

    let note = store.create("Groceries", "Milk, eggs").unwrap();
    assert_eq!(note.id, 1);
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.text, "Milk, eggs");
    assert_eq!(note.color, ColorTag::White);

    assert_eq!(store.notes(), &[note]);
}

#[test]
fn created_ids_are_strictly_increasing_and_unique() {
    let mut store = NoteStore::open_in_memory();

    let mut previous = 0;
    let mut seen = HashSet::new();
    for n in 0..10 {
        let note = store.create("", &format!("note {n}")).unwrap();
        assert!(note.id > previous);
        assert!(seen.insert(note.id));
        previous = note.id;
    }
}

#[test]
fn blank_create_leaves_store_unchanged() {
    let mut store = NoteStore::open_in_memory();
    store.create("keep", "me").unwrap();

    assert!(store.create("", "").is_none());
    assert_eq!(store.notes().len(), 1);
}

#[test]
fn whitespace_only_input_is_accepted_untrimmed() {
    let mut store = NoteStore::open_in_memory();

    let note = store.create(" ", "").unwrap();
    assert_eq!(note.title, " ");
    assert_eq!(note.text, "");
}

#[test]
fn delete_preserves_order_and_next_create_skips_past_deleted_ids() {
    let mut store = NoteStore::open_in_memory();
    for n in 1..=3 {
        store.create("", &format!("note {n}")).unwrap();
    }

    store.delete(2);
    let ids: Vec<_> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let note = store.create("A", "B").unwrap();
    assert_eq!(note.id, 4);
}

#[test]
fn deleted_id_is_never_reused_even_when_it_was_the_highest() {
    let mut store = NoteStore::open_in_memory();
    store.create("", "one").unwrap();
    let last = store.create("", "two").unwrap();

    store.delete(last.id);
    let fresh = store.create("", "three").unwrap();
    assert!(fresh.id > last.id);
}

#[test]
fn update_replaces_fields_in_place_and_keeps_color() {
    let mut store = NoteStore::open_in_memory();
    store.create("a", "1").unwrap();
    let target = store.create("b", "2").unwrap();
    store.create("c", "3").unwrap();
    store.recolor(target.id, ColorTag::Green);

    store.update(target.id, "B", "22");

    let ids: Vec<_> = store.notes().iter().map(|note| note.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    let updated = store.get(target.id).unwrap();
    assert_eq!(updated.title, "B");
    assert_eq!(updated.text, "22");
    assert_eq!(updated.color, ColorTag::Green);
}

#[test]
fn update_on_missing_id_is_a_noop() {
    let mut store = NoteStore::open_in_memory();
    store.create("a", "1").unwrap();
    let before = store.notes().to_vec();

    store.update(99, "x", "y");
    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn recolor_changes_only_the_color() {
    let mut store = NoteStore::open_in_memory();
    let note = store.create("a", "1").unwrap();

    store.recolor(note.id, ColorTag::Red);

    let recolored = store.get(note.id).unwrap();
    assert_eq!(recolored.color, ColorTag::Red);
    assert_eq!(recolored.title, "a");
    assert_eq!(recolored.text, "1");
}

#[test]
fn recolor_on_missing_id_is_a_noop() {
    let mut store = NoteStore::open_in_memory();
    store.create("a", "1").unwrap();
    store.create("b", "2").unwrap();
    let before = store.notes().to_vec();

    store.recolor(3, ColorTag::Red);
    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn delete_on_missing_id_is_a_noop() {
    let mut store = NoteStore::open_in_memory();
    store.create("a", "1").unwrap();

    store.delete(42);
    assert_eq!(store.notes().len(), 1);
}
