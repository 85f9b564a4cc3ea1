use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_unknown_note_is_not_found() {
    let mut app = helper::setup_test_app();

    let (status_code, note, body) = helper::single_note(&mut app, 999).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert!(note.is_none());
    assert_eq!(String::new(), body);
}

#[tokio::test]
async fn test_update_unknown_note_is_not_found() {
    let mut app = helper::setup_test_app();

    let (status_code, _) =
        helper::maybe_update_note(&mut app, Some(999), "Note 1", Some("Description 1")).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);

    // the update did not insert a row
    let (status_code, _, _) = helper::single_note(&mut app, 999).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
}

#[tokio::test]
async fn test_update_without_id_is_a_bad_request() {
    let mut app = helper::setup_test_app();

    let (status_code, error) =
        helper::maybe_update_note(&mut app, None, "Note 1", Some("Description 1")).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Missing `id` field".to_string()), error);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let mut app = helper::setup_test_app();

    // deleting a note that never existed is still a 204
    let status_code = helper::delete_note(&mut app, 999).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    let (status_code, note, _) = helper::maybe_create_note(&mut app, 1, "Note 1", None).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();

    let status_code = helper::delete_note(&mut app, note.id).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    // a second delete of the same note
    let status_code = helper::delete_note(&mut app, note.id).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);

    let (status_code, _, _) = helper::single_note(&mut app, note.id).await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
}
