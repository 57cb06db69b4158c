//! In-memory `NoteStore` used by unit tests, so no database is required.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{NoteStore, StoreError};
use crate::models::Note;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    last_id: i64,
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create(&self, title: String, content: String) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;

        let note = Note {
            id: inner.last_id,
            title,
            content,
            timestamp: Utc::now(),
        };
        inner.notes.push(note.clone());

        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().unwrap();

        let mut notes = inner.notes.clone();
        notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(notes)
    }

    async fn update(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Note, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        let note = inner
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(title) = title {
            note.title = title;
        }
        if let Some(content) = content {
            note.content = content;
        }
        note.timestamp = Utc::now();

        Ok(note.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();

        let len_before = inner.notes.len();
        inner.notes.retain(|note| note.id != id);

        if inner.notes.len() == len_before {
            Err(StoreError::NotFound(id))
        } else {
            Ok(())
        }
    }
}
