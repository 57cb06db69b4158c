use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    repository::{NoteStore, StoreError},
};

use std::sync::Arc;

/// Title substituted when a create request omits one.
const DEFAULT_TITLE: &str = "Untitled";

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Applies create defaults at the boundary: missing title becomes
    /// "Untitled", missing content becomes the empty string.
    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> Result<NoteResponse, StoreError> {
        let title = request.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let content = request.content.unwrap_or_default();

        self.store
            .create(title, content)
            .await
            .map(NoteResponse::from)
    }

    /// Partial update: omitted fields keep their stored value, the
    /// timestamp always refreshes.
    pub async fn update_note(
        &self,
        id: i64,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, StoreError> {
        self.store
            .update(id, request.title, request.content)
            .await
            .map(NoteResponse::from)
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), StoreError> {
        self.store.delete(id).await
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, StoreError> {
        self.store.list().await.map(|notes| {
            notes.into_iter().map(NoteResponse::from).collect()
        })
    }
}
