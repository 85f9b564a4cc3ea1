//! Note API management

use axum::Extension;

use crate::service::NoteDto;
use crate::service::NoteService;
use crate::storage::Storage;
use crate::users::UserId;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;

/// All notes of an owner
///
/// Owner existence is not validated; an unknown owner yields an empty list
pub async fn list<S: Storage>(
    Extension(service): Extension<NoteService<S>>,
    PathParameters(user_id): PathParameters<UserId>,
) -> Result<Success<Vec<NoteDto>>, Error> {
    let notes = service
        .list_by_owner(user_id)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(notes))
}

/// A single note by id
pub async fn single<S: Storage>(
    Extension(service): Extension<NoteService<S>>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<NoteDto>, Error> {
    service
        .get_by_id(note_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found()), |note| Ok(Success::ok(note)))
}

/// Create a note for an owner
///
/// Responds with the created note so the caller learns the generated id
pub async fn create<S: Storage>(
    Extension(service): Extension<NoteService<S>>,
    PathParameters(user_id): PathParameters<UserId>,
    Form(form): Form<NoteDto>,
) -> Result<Success<NoteDto>, Error> {
    let note = service
        .create(&form, user_id)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::created(note))
}

/// Update a note, keyed by the id in the body
///
/// Replaces title and description; an unknown id is a 404, never an insert
pub async fn update<S: Storage>(
    Extension(service): Extension<NoteService<S>>,
    Form(form): Form<NoteDto>,
) -> Result<Success<NoteDto>, Error> {
    let Some(note_id) = form.id else {
        return Err(Error::bad_request("Missing `id` field"));
    };

    service
        .update(note_id, &form)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found()), |_| Ok(Success::no_content()))
}

/// Delete a note by id
///
/// Idempotent; deleting an unknown id is still a 204
pub async fn delete<S: Storage>(
    Extension(service): Extension<NoteService<S>>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<NoteDto>, Error> {
    service
        .delete_by_id(note_id)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::no_content())
}
