//! All API endpoint setup

use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;

pub use request::Form;
pub use request::PathParameters;
pub use response::Error;
pub use response::Success;

use crate::storage::Storage;

mod notes;
mod request;
mod response;

/// Get the Axum router for all API routes
pub fn router<S: Storage>() -> Router {
    let notes = Router::new()
        .route("/", put(notes::update::<S>))
        .route("/user/{user_id}", get(notes::list::<S>))
        .route("/user/{user_id}", post(notes::create::<S>))
        .route("/{note_id}", get(notes::single::<S>))
        .route("/{note_id}", delete(notes::delete::<S>));

    Router::new().nest("/notes", notes)
}
