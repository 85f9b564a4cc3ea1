//! The note service
//!
//! Translates between the wire representation ([`NoteDto`]) and the
//! persisted representation ([`Note`]), and delegates each call to the
//! storage backend. No business rules live here; input is trusted as
//! delivered by the handlers.

use serde::Deserialize;
use serde::Serialize;

use crate::notes::Note;
use crate::storage::CreateNoteValues;
use crate::storage::Result;
use crate::storage::Storage;
use crate::storage::UpdateNoteValues;

use crate::users::UserId;

/// The wire representation of a note
///
/// The owner does not travel in the body; it is a path parameter on the
/// create and list routes. The id is absent on create and required on
/// update.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoteDto {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
}

impl NoteDto {
    /// Create a note DTO from a [`Note`]
    fn from_note(note: Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title,
            description: note.description,
        }
    }

    /// Create multiple note DTOs from [`Note`]s
    fn from_note_multiple(mut notes: Vec<Note>) -> Vec<Self> {
        notes.drain(..).map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// Stateless pass-through between the API handlers and the storage
#[derive(Clone)]
pub struct NoteService<S> {
    storage: S,
}

impl<S: Storage> NoteService<S> {
    /// Create a note service on top of a storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All notes of an owner, in store order
    pub async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<NoteDto>> {
        let notes = self.storage.find_all_notes_by_user(user_id).await?;

        Ok(NoteDto::from_note_multiple(notes))
    }

    /// A single note by its id
    pub async fn get_by_id(&self, note_id: i64) -> Result<Option<NoteDto>> {
        let note = self.storage.find_single_note_by_id(note_id).await?;

        Ok(note.map(NoteDto::from_note))
    }

    /// Persist a new note for an owner, returning it with the generated id
    pub async fn create(&self, dto: &NoteDto, user_id: UserId) -> Result<NoteDto> {
        let values = CreateNoteValues {
            user_id,
            title: &dto.title,
            description: dto.description.as_deref(),
        };

        let note = self.storage.create_note(&values).await?;

        Ok(NoteDto::from_note(note))
    }

    /// Replace title and description of an existing note
    ///
    /// The owner is never changed. Returns `None` when no note with that
    /// id exists
    pub async fn update(&self, note_id: i64, dto: &NoteDto) -> Result<Option<NoteDto>> {
        let values = UpdateNoteValues {
            title: &dto.title,
            description: dto.description.as_deref(),
        };

        let note = self.storage.update_note(note_id, &values).await?;

        Ok(note.map(NoteDto::from_note))
    }

    /// Remove a note; idempotent, unknown ids are a no-op
    pub async fn delete_by_id(&self, note_id: i64) -> Result<()> {
        self.storage.delete_note(note_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Memory;

    #[test]
    fn test_from_note() {
        let note = Note {
            id: 1,
            user_id: 2,
            title: "Note 1".to_string(),
            description: Some("Description 1".to_string()),
        };

        let dto = NoteDto::from_note(note);

        assert_eq!(Some(1), dto.id);
        assert_eq!("Note 1".to_string(), dto.title);
        assert_eq!(Some("Description 1".to_string()), dto.description);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let service = NoteService::new(Memory::new());

        let dto = NoteDto {
            id: None,
            title: "Note 1".to_string(),
            description: Some("Description 1".to_string()),
        };

        let created = service.create(&dto, 1).await.unwrap();
        let id = created.id.unwrap();

        let fetched = service.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(dto.title, fetched.title);
        assert_eq!(dto.description, fetched.description);
    }

    #[tokio::test]
    async fn test_owner_without_notes_lists_empty() {
        let service = NoteService::new(Memory::new());

        let notes = service.list_by_owner(1).await.unwrap();

        assert_eq!(Vec::<NoteDto>::new(), notes);
    }

    #[tokio::test]
    async fn test_update_does_not_change_owner() {
        let storage = Memory::new();
        let service = NoteService::new(storage.clone());

        let dto = NoteDto {
            id: None,
            title: "Note 1".to_string(),
            description: None,
        };

        let created = service.create(&dto, 1).await.unwrap();
        let id = created.id.unwrap();

        let update = NoteDto {
            id: Some(id),
            title: "Note 2".to_string(),
            description: Some("Description 2".to_string()),
        };

        service.update(id, &update).await.unwrap().unwrap();

        let note = storage
            .find_single_note_by_id(id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(1, note.user_id);
        assert_eq!("Note 2".to_string(), note.title);
    }
}
