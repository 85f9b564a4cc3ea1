//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::notes::Note;
use crate::users::UserId;

use super::CreateNoteValues;
use super::Result;
use super::Storage;
use super::UpdateNoteValues;

/// An in-memory storage
///
/// Will be destroyed on system shutdown
#[derive(Clone, Debug)]
pub struct Memory {
    /// All notes in storage
    notes: Arc<Mutex<HashMap<i64, Note>>>,

    /// Source of generated note ids
    next_note_id: Arc<AtomicI64>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self {
            notes: Arc::new(Mutex::new(HashMap::new())),
            next_note_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl Storage for Memory {
    async fn find_all_notes_by_user(&self, user_id: UserId) -> Result<Vec<Note>> {
        let mut notes = self
            .notes
            .lock()
            .await
            .values()
            .filter(|note| note.user_id == user_id)
            .cloned()
            .collect::<Vec<Note>>();

        notes.sort_by_key(|note| note.id);

        Ok(notes)
    }

    async fn find_single_note_by_id(&self, note_id: i64) -> Result<Option<Note>> {
        Ok(self.notes.lock().await.get(&note_id).cloned())
    }

    async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let note = Note {
            id: self.next_note_id.fetch_add(1, Ordering::Relaxed),
            user_id: values.user_id,
            title: values.title.to_string(),
            description: values.description.map(ToString::to_string),
        };

        self.notes.lock().await.insert(note.id, note.clone());

        Ok(note)
    }

    async fn update_note(
        &self,
        note_id: i64,
        values: &UpdateNoteValues<'_>,
    ) -> Result<Option<Note>> {
        Ok(self.notes.lock().await.get_mut(&note_id).map(|note| {
            note.title = values.title.to_string();
            note.description = values.description.map(ToString::to_string);

            note.clone()
        }))
    }

    async fn delete_note(&self, note_id: i64) -> Result<()> {
        self.notes.lock().await.remove(&note_id);

        Ok(())
    }
}
