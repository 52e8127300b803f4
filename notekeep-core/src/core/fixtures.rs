//! Built-in sample dataset used to seed a fresh store.

use crate::{Folder, Label, Note, NotekeepError, Result};
use include_dir::{include_dir, Dir};
use serde::de::DeserializeOwned;

static SAMPLE_DATA: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/fixtures");

/// Initial contents for the four store collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleData {
    pub labels: Vec<Label>,
    pub notes: Vec<Note>,
    pub trash: Vec<Note>,
    pub folders: Vec<Folder>,
}

impl SampleData {
    /// Parses the embedded `labels.json`, `notes.json` and `trash.json`.
    ///
    /// The sample set has no folders.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Fixture`] if a file is missing from the
    /// bundle, or [`NotekeepError::Json`] if one fails to parse.
    pub fn load() -> Result<Self> {
        Ok(Self {
            labels: read_fixture("labels.json")?,
            notes: read_fixture("notes.json")?,
            trash: read_fixture("trash.json")?,
            folders: Vec::new(),
        })
    }
}

fn read_fixture<T: DeserializeOwned>(name: &str) -> Result<T> {
    let file = SAMPLE_DATA
        .get_file(name)
        .ok_or_else(|| NotekeepError::Fixture(format!("{name} is not bundled")))?;
    let text = file
        .contents_utf8()
        .ok_or_else(|| NotekeepError::Fixture(format!("{name} is not UTF-8")))?;
    Ok(serde_json::from_str(text)?)
}
