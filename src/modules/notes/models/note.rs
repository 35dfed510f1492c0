use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::{Entity, Tracking};
use crate::service::{MapInto, MergeInto};

/// A stored note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub tracking: Tracking,

    pub title: String,

    pub body: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entity for Note {
    fn collection_name() -> &'static str {
        "notes"
    }

    fn tracking(&self) -> Option<&Tracking> {
        Some(&self.tracking)
    }

    fn tracking_mut(&mut self) -> Option<&mut Tracking> {
        Some(&mut self.tracking)
    }
}

/// Boundary shape returned to callers
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteView {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub is_deleted: bool,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.tracking.id,
            title: note.title,
            body: note.body,
            tags: note.tags,
            is_deleted: note.tracking.is_deleted,
            date_created: note.tracking.date_created,
            date_updated: note.tracking.date_updated,
        }
    }
}

/// Payload for creating a note
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub body: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl MapInto<Note> for CreateNoteRequest {
    fn map_into(self) -> Note {
        Note {
            tracking: Tracking::new(),
            title: self.title,
            body: self.body,
            tags: self.tags,
        }
    }
}

/// Payload for updating a note; absent fields keep their stored values
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl MergeInto<Note> for UpdateNoteRequest {
    fn merge_into(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(body) = self.body {
            note.body = body;
        }
        if let Some(tags) = self.tags {
            note.tags = tags;
        }
    }
}

/// Query-string filter for note listings
#[derive(Debug, Default, Deserialize)]
pub struct NoteFilter {
    pub title: Option<String>,
    pub tag: Option<String>,
}
