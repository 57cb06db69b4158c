use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Note;

/// Rendering format for the `timestamp` field: UTC, second precision,
/// no timezone suffix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
    /// Last-modified time, formatted `YYYY-MM-DD HH:MM:SS` (UTC)
    pub timestamp: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            timestamp: note.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title; "Untitled" when omitted
    #[serde(default)]
    pub title: Option<String>,
    /// Note content; empty when omitted
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// New title; omitted fields keep their current value
    #[serde(default)]
    pub title: Option<String>,
    /// New content; omitted fields keep their current value
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn response_formats_timestamp_without_timezone_suffix() {
        let note = Note {
            id: 7,
            title: "A".to_string(),
            content: "B".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
        };

        let response = NoteResponse::from(note);

        assert_eq!(response.timestamp, "2026-03-14 09:26:53");
    }

    #[test]
    fn requests_deserialize_with_missing_fields() {
        let create: CreateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(create.title.is_none());
        assert!(create.content.is_none());

        let update: UpdateNoteRequest = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(update.title.as_deref(), Some("t"));
        assert!(update.content.is_none());
    }
}
