//! Descriptions of the mutations a [`NoteStore`](crate::NoteStore) publishes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single published mutation.
///
/// Serialized with an inline `"type"` tag so a host can forward change
/// records to a front-end unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Change {
    /// A note was appended to the active notes.
    NoteAdded { note_id: String },
    /// An active note's content, color, labels or bookmark were replaced.
    NoteEdited { note_id: String },
    /// An active note was moved to the trash.
    NoteTrashed { note_id: String },
    /// A trashed note was moved back to the active notes.
    NoteRestored { note_id: String },
    /// A trashed note was dropped for good.
    NotePurged { note_id: String },
    /// Every trashed note was moved back to the active notes.
    TrashRestored { count: usize },
    /// The trash was cleared.
    TrashEmptied { count: usize },
    /// A label was created.
    LabelAdded { label_id: String },
    /// A label's name was replaced.
    LabelRenamed { label_id: String },
    /// A label was removed and its id stripped from `scrubbed_notes` notes.
    LabelDeleted {
        label_id: String,
        scrubbed_notes: usize,
    },
    /// A folder was appended.
    FolderAdded { folder_id: String },
    /// The folder collection was replaced wholesale.
    FoldersReplaced { count: usize },
}

impl Change {
    /// Returns the variant name, matching the serialized `"type"` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoteAdded { .. } => "NoteAdded",
            Self::NoteEdited { .. } => "NoteEdited",
            Self::NoteTrashed { .. } => "NoteTrashed",
            Self::NoteRestored { .. } => "NoteRestored",
            Self::NotePurged { .. } => "NotePurged",
            Self::TrashRestored { .. } => "TrashRestored",
            Self::TrashEmptied { .. } => "TrashEmptied",
            Self::LabelAdded { .. } => "LabelAdded",
            Self::LabelRenamed { .. } => "LabelRenamed",
            Self::LabelDeleted { .. } => "LabelDeleted",
            Self::FolderAdded { .. } => "FolderAdded",
            Self::FoldersReplaced { .. } => "FoldersReplaced",
        }
    }
}

/// A [`Change`] stamped with the store revision it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Store revision right after this change was applied.
    pub revision: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub change: Change,
}
