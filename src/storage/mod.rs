//! All things related to the storage of notes

use async_trait::async_trait;
use thiserror::Error;

use crate::notes::Note;
use crate::users::UserId;

#[cfg(any(test, not(feature = "postgres")))]
pub use memory::Memory;
#[cfg(feature = "postgres")]
use postgres::Postgres;

#[cfg(any(test, not(feature = "postgres")))]
mod memory;
#[cfg(feature = "postgres")]
mod postgres;

/// Setup the storage
#[cfg(not(feature = "postgres"))]
#[allow(clippy::unused_async)]
pub async fn setup() -> Memory {
    Memory::new()
}

/// Setup the storage
#[cfg(feature = "postgres")]
pub async fn setup() -> Postgres {
    Postgres::new().await
}

/// Storage errors
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum Error {
    /// A connection error with the storage
    #[error("Connection error: {0}")]
    Connection(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// The owner of the note
    pub user_id: UserId,

    /// Title of the note
    pub title: &'a str,

    /// Optional description of the note
    pub description: Option<&'a str>,
}

/// Values to update a Note
///
/// Every field is replaced; the owner is not touched
pub struct UpdateNoteValues<'a> {
    /// New title of the note
    pub title: &'a str,

    /// New description of the note, clears it when `None`
    pub description: Option<&'a str>,
}

/// Storage with all supported operations
///
/// Each operation is a single atomic interaction with the backing store;
/// no locks are held across operations
#[async_trait]
pub trait Storage: Clone + Send + Sync + 'static {
    /// Find all notes of an owner
    ///
    /// An owner without notes yields an empty list, not an error
    async fn find_all_notes_by_user(&self, user_id: UserId) -> Result<Vec<Note>>;

    /// Find a single note by its id
    async fn find_single_note_by_id(&self, note_id: i64) -> Result<Option<Note>>;

    /// Create a note, the id is generated by the store
    async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note>;

    /// Update a single note, keyed by its id
    ///
    /// Returns `None` when no note with that id exists; never inserts
    async fn update_note(
        &self,
        note_id: i64,
        values: &UpdateNoteValues<'_>,
    ) -> Result<Option<Note>>;

    /// Delete a note, a no-op when the id does not exist
    async fn delete_note(&self, note_id: i64) -> Result<()>;
}
