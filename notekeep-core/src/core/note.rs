use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display tag attached to a note.
///
/// Serializes as the bare variant name (`"Lightseagreen"`, `"Orange"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteColor {
    Lightseagreen,
    Skyblue,
    Lightcoral,
    Lightpink,
    Lightgreen,
    Lightblue,
    Orange,
    Palegreen,
}

/// Every color a note may carry, in palette order.
pub const PALETTE: [NoteColor; 8] = [
    NoteColor::Lightseagreen,
    NoteColor::Skyblue,
    NoteColor::Lightcoral,
    NoteColor::Lightpink,
    NoteColor::Lightgreen,
    NoteColor::Lightblue,
    NoteColor::Orange,
    NoteColor::Palegreen,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub color: Option<NoteColor>,
    /// Ordered; may repeat or reference labels that have since been deleted.
    pub label_ids: Vec<String>,
    pub content: String,
    pub updated_at: DateTime<Utc>,
    pub is_bookmarked: bool,
}

impl Note {
    /// Returns `true` if `label_id` appears anywhere in this note's labels.
    pub fn has_label(&self, label_id: &str) -> bool {
        self.label_ids.iter().any(|id| id == label_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
}

/// A named grouping. Folders are not linked to notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
}
