use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_list_contains_created_note() {
    let mut app = helper::setup_test_app();

    let (status_code, _, _) =
        helper::maybe_create_note(&mut app, 1, "Note 1", Some("Description 1")).await;
    assert_eq!(StatusCode::CREATED, status_code);

    let (status_code, notes) = helper::list_notes(&mut app, 1).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert_eq!(1, notes.len());
    assert_eq!("Note 1".to_string(), notes[0].title);
    assert_eq!(Some("Description 1".to_string()), notes[0].description);
}

#[tokio::test]
async fn test_notes_are_scoped_to_their_owner() {
    let mut app = helper::setup_test_app();

    let (status_code, note_one, _) =
        helper::maybe_create_note(&mut app, 1, "Note 1", Some("Description 1")).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note_one = note_one.unwrap();

    let (status_code, note_two, _) =
        helper::maybe_create_note(&mut app, 2, "Note 2", Some("Description 2")).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note_two = note_two.unwrap();

    let (status_code, notes) = helper::list_notes(&mut app, 1).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert!(notes.iter().any(|note| note.id == note_one.id));
    assert!(notes.iter().all(|note| note.id != note_two.id));

    let (status_code, notes) = helper::list_notes(&mut app, 2).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert!(notes.iter().any(|note| note.id == note_two.id));
    assert!(notes.iter().all(|note| note.id != note_one.id));

    // an owner without notes gets an empty list, not an error
    let (status_code, notes) = helper::list_notes(&mut app, 3).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Vec::<helper::Note>::new(), notes.unwrap());
}
