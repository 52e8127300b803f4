//! The in-memory note store: sole authority over notes, labels, trash and folders.

use crate::core::ids::{IdSequence, FOLDER_PREFIX, LABEL_PREFIX, NOTE_PREFIX};
use crate::core::search;
use crate::{
    Change, ChangeLog, ChangeRecord, Folder, Label, Note, NoteColor, NotekeepError, Result,
    SampleData, StoreConfig, PALETTE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// A consistent read-only view of every collection at one revision.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub notes: Arc<[Note]>,
    pub labels: Arc<[Label]>,
    pub trash: Arc<[Note]>,
    pub folders: Arc<[Folder]>,
    pub revision: u64,
}

/// Holds all note, label, trash and folder state for one running application.
///
/// Each collection is an immutable `Arc<[T]>` snapshot. A mutation builds the
/// replacement collection first and then swaps it in, so snapshots handed out
/// earlier never change underneath their holders, and `Arc::ptr_eq` tells an
/// observer whether a collection was republished.
///
/// Operations that name an unknown id do nothing: no collection is replaced,
/// the revision stays put and nothing is logged to the change log.
///
/// # Examples
///
/// ```rust
/// use notekeep_core::{NoteStore, StoreConfig};
///
/// let mut store = NoteStore::new(StoreConfig::default()).unwrap();
/// let work = store.add_label("Work");
/// let id = store.add_note("hello", None, Some(vec![work]));
///
/// store.delete_note(&id);
/// assert!(store.notes().is_empty());
///
/// store.restore_note(&id);
/// assert_eq!(store.get_label_names(&store.notes()[0].label_ids), vec!["Work"]);
/// ```
#[derive(Debug)]
pub struct NoteStore {
    config: StoreConfig,
    notes: Arc<[Note]>,
    labels: Arc<[Label]>,
    trash: Arc<[Note]>,
    folders: Arc<[Folder]>,
    note_ids: IdSequence,
    label_ids: IdSequence,
    folder_ids: IdSequence,
    rng: StdRng,
    revision: u64,
    change_log: ChangeLog,
}

impl NoteStore {
    /// Creates a store with all four collections empty.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: StoreConfig) -> Result<Self> {
        Self::from_data(config, SampleData::default())
    }

    /// Creates a store seeded with the built-in sample dataset
    /// (5 labels, 7 notes, 1 trashed note, no folders).
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::InvalidConfig`] for a bad `config`, or the
    /// error from [`SampleData::load`].
    pub fn with_sample_data(config: StoreConfig) -> Result<Self> {
        Self::from_data(config, SampleData::load()?)
    }

    /// Creates a store seeded with `data`.
    ///
    /// Id counters continue after the highest numbered id already present, so
    /// new ids never repeat a seeded one.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::InvalidConfig`] if `config` fails validation.
    pub fn from_data(config: StoreConfig, data: SampleData) -> Result<Self> {
        config.validate()?;

        let note_ids = IdSequence::seeded(
            NOTE_PREFIX,
            config.id_strategy,
            data.notes.iter().chain(&data.trash).map(|n| n.id.as_str()),
        );
        let label_ids = IdSequence::seeded(
            LABEL_PREFIX,
            config.id_strategy,
            data.labels.iter().map(|l| l.id.as_str()),
        );
        let folder_ids = IdSequence::seeded(
            FOLDER_PREFIX,
            config.id_strategy,
            data.folders.iter().map(|f| f.id.as_str()),
        );
        let rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let change_log = ChangeLog::new(config.change_log_capacity);

        log::debug!(
            "note store seeded with {} notes, {} labels, {} trashed, {} folders",
            data.notes.len(),
            data.labels.len(),
            data.trash.len(),
            data.folders.len()
        );

        Ok(Self {
            config,
            notes: data.notes.into(),
            labels: data.labels.into(),
            trash: data.trash.into(),
            folders: data.folders.into(),
            note_ids,
            label_ids,
            folder_ids,
            rng,
            revision: 0,
            change_log,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Active notes.
    pub fn notes(&self) -> Arc<[Note]> {
        Arc::clone(&self.notes)
    }

    pub fn labels(&self) -> Arc<[Label]> {
        Arc::clone(&self.labels)
    }

    /// Soft-deleted notes, oldest deletion first.
    pub fn trash(&self) -> Arc<[Note]> {
        Arc::clone(&self.trash)
    }

    pub fn folders(&self) -> Arc<[Folder]> {
        Arc::clone(&self.folders)
    }

    /// Number of mutations published since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            notes: self.notes(),
            labels: self.labels(),
            trash: self.trash(),
            folders: self.folders(),
            revision: self.revision,
        }
    }

    /// Change records newer than `revision` that the change log still retains.
    pub fn changes_since(&self, revision: u64) -> Vec<ChangeRecord> {
        self.change_log.since(revision)
    }

    /// The most recently published change, if the change log still holds one.
    pub fn latest_change(&self) -> Option<&ChangeRecord> {
        self.change_log.latest()
    }

    /// Looks up an active note.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::NoteNotFound`] if `id` is not an active note.
    pub fn get_note(&self, id: &str) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| NotekeepError::NoteNotFound(id.to_string()))
    }

    /// Looks up a note in the trash.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::NoteNotFound`] if `id` is not in the trash.
    pub fn get_trashed_note(&self, id: &str) -> Result<&Note> {
        self.trash
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| NotekeepError::NoteNotFound(id.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`NotekeepError::LabelNotFound`] if no label has this `id`.
    pub fn get_label(&self, id: &str) -> Result<&Label> {
        self.labels
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| NotekeepError::LabelNotFound(id.to_string()))
    }

    /// Appends a new active note and returns its id.
    ///
    /// With no `color`, one is drawn uniformly from [`PALETTE`]. Content is
    /// not validated; an empty note is allowed.
    pub fn add_note(
        &mut self,
        content: impl Into<String>,
        color: Option<NoteColor>,
        label_ids: Option<Vec<String>>,
    ) -> String {
        let notes = &self.notes;
        let trash = &self.trash;
        let id = self
            .note_ids
            .next_id(|c| notes.iter().chain(trash.iter()).any(|n| n.id == c));

        let note = Note {
            id: id.clone(),
            color: Some(color.unwrap_or_else(|| self.pick_color())),
            label_ids: label_ids.unwrap_or_default(),
            content: content.into(),
            updated_at: chrono::Utc::now(),
            is_bookmarked: false,
        };

        self.notes = appended(&self.notes, note);
        self.publish(Change::NoteAdded {
            note_id: id.clone(),
        });
        id
    }

    /// Replaces content, color, labels and bookmark flag of an active note.
    ///
    /// `updated_at` is left alone unless [`StoreConfig::touch_on_edit`] is set.
    pub fn edit_note(
        &mut self,
        id: &str,
        content: impl Into<String>,
        color: Option<NoteColor>,
        label_ids: Vec<String>,
        is_bookmarked: bool,
    ) {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            log::warn!("edit_note: no active note {id}");
            return;
        };

        let mut edited = self.notes[pos].clone();
        edited.content = content.into();
        edited.color = color;
        edited.label_ids = label_ids;
        edited.is_bookmarked = is_bookmarked;
        if self.config.touch_on_edit {
            edited.updated_at = chrono::Utc::now();
        }

        let mut notes = self.notes.to_vec();
        notes[pos] = edited;
        self.notes = notes.into();
        self.publish(Change::NoteEdited {
            note_id: id.to_string(),
        });
    }

    /// Moves an active note, unchanged, to the end of the trash.
    pub fn delete_note(&mut self, id: &str) {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            log::warn!("delete_note: no active note {id}");
            return;
        };

        let (notes, note) = removed_at(&self.notes, pos);
        self.trash = appended(&self.trash, note);
        self.notes = notes;
        self.publish(Change::NoteTrashed {
            note_id: id.to_string(),
        });
    }

    /// Moves a trashed note, unchanged, to the end of the active notes.
    pub fn restore_note(&mut self, id: &str) {
        let Some(pos) = self.trash.iter().position(|n| n.id == id) else {
            log::warn!("restore_note: no trashed note {id}");
            return;
        };

        let (trash, note) = removed_at(&self.trash, pos);
        self.notes = appended(&self.notes, note);
        self.trash = trash;
        self.publish(Change::NoteRestored {
            note_id: id.to_string(),
        });
    }

    /// Drops a note from the trash for good. Active notes are never touched.
    pub fn delete_note_permanently(&mut self, id: &str) {
        let Some(pos) = self.trash.iter().position(|n| n.id == id) else {
            log::warn!("delete_note_permanently: no trashed note {id}");
            return;
        };

        let (trash, _) = removed_at(&self.trash, pos);
        self.trash = trash;
        self.publish(Change::NotePurged {
            note_id: id.to_string(),
        });
    }

    /// Appends every trashed note to the active notes, in trash order, and clears the trash.
    pub fn restore_all_notes(&mut self) {
        if self.trash.is_empty() {
            return;
        }

        let count = self.trash.len();
        self.notes = self
            .notes
            .iter()
            .chain(self.trash.iter())
            .cloned()
            .collect();
        self.trash = Vec::<Note>::new().into();
        self.publish(Change::TrashRestored { count });
    }

    pub fn empty_trash(&mut self) {
        if self.trash.is_empty() {
            return;
        }

        let count = self.trash.len();
        self.trash = Vec::<Note>::new().into();
        self.publish(Change::TrashEmptied { count });
    }

    /// Appends a label and returns its id. Empty and duplicate names are accepted.
    pub fn add_label(&mut self, name: impl Into<String>) -> String {
        let labels = &self.labels;
        let id = self.label_ids.next_id(|c| labels.iter().any(|l| l.id == c));

        let label = Label {
            id: id.clone(),
            name: name.into(),
        };
        self.labels = appended(&self.labels, label);
        self.publish(Change::LabelAdded {
            label_id: id.clone(),
        });
        id
    }

    pub fn edit_label(&mut self, id: &str, name: impl Into<String>) {
        let Some(pos) = self.labels.iter().position(|l| l.id == id) else {
            log::warn!("edit_label: no label {id}");
            return;
        };

        let mut labels = self.labels.to_vec();
        labels[pos].name = name.into();
        self.labels = labels.into();
        self.publish(Change::LabelRenamed {
            label_id: id.to_string(),
        });
    }

    /// Removes a label and strips its id from every active note's labels.
    ///
    /// Trashed notes are stripped too when
    /// [`StoreConfig::scrub_trash_on_label_delete`] is set. A collection in
    /// which no note referenced the label keeps its current snapshot.
    pub fn delete_label(&mut self, id: &str) {
        if !self.labels.iter().any(|l| l.id == id) {
            log::warn!("delete_label: no label {id}");
            return;
        }

        self.labels = self.labels.iter().filter(|l| l.id != id).cloned().collect();

        let mut scrubbed_notes = 0;
        if let Some((notes, affected)) = without_label(&self.notes, id) {
            scrubbed_notes += affected;
            self.notes = notes;
        }
        if self.config.scrub_trash_on_label_delete {
            if let Some((trash, affected)) = without_label(&self.trash, id) {
                scrubbed_notes += affected;
                self.trash = trash;
            }
        }

        self.publish(Change::LabelDeleted {
            label_id: id.to_string(),
            scrubbed_notes,
        });
    }

    /// Resolves label ids to names, position for position.
    ///
    /// Unknown ids resolve to an empty string, so the result always has the
    /// same length as `label_ids`.
    pub fn get_label_names<S: AsRef<str>>(&self, label_ids: &[S]) -> Vec<String> {
        label_ids
            .iter()
            .map(|wanted| {
                self.labels
                    .iter()
                    .find(|l| l.id == wanted.as_ref())
                    .map(|l| l.name.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Replaces the whole folder collection.
    pub fn set_folders(&mut self, folders: Vec<Folder>) {
        let count = folders.len();
        self.folders = folders.into();
        self.publish(Change::FoldersReplaced { count });
    }

    /// Appends a folder and returns its id.
    pub fn add_folder(&mut self, name: impl Into<String>) -> String {
        let folders = &self.folders;
        let id = self
            .folder_ids
            .next_id(|c| folders.iter().any(|f| f.id == c));

        let folder = Folder {
            id: id.clone(),
            name: name.into(),
        };
        self.folders = appended(&self.folders, folder);
        self.publish(Change::FolderAdded {
            folder_id: id.clone(),
        });
        id
    }

    /// Active notes whose content contains `term`, ignoring case.
    pub fn search_notes(&self, term: &str) -> Vec<Note> {
        search::filter_notes_by_content(&self.notes, term)
    }

    /// Labels whose name contains `term`, ignoring case.
    pub fn search_labels(&self, term: &str) -> Vec<Label> {
        search::filter_labels_by_name(&self.labels, term)
    }

    pub fn bookmarked_notes(&self) -> Vec<Note> {
        search::filter_bookmarked(&self.notes)
    }

    /// Active notes that carry `label_id`.
    pub fn notes_with_label(&self, label_id: &str) -> Vec<Note> {
        search::filter_by_label(&self.notes, label_id)
    }

    fn pick_color(&mut self) -> NoteColor {
        PALETTE[self.rng.random_range(0..PALETTE.len())]
    }

    fn publish(&mut self, change: Change) {
        self.revision += 1;
        self.change_log.log(self.revision, change);
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Arc<[T]> {
    items.iter().cloned().chain(std::iter::once(item)).collect()
}

fn removed_at<T: Clone>(items: &[T], pos: usize) -> (Arc<[T]>, T) {
    let mut rest = items.to_vec();
    let item = rest.remove(pos);
    (rest.into(), item)
}

/// Returns `notes` with `label_id` stripped and how many notes changed,
/// or `None` if no note referenced it.
fn without_label(notes: &[Note], label_id: &str) -> Option<(Arc<[Note]>, usize)> {
    let affected = notes.iter().filter(|n| n.has_label(label_id)).count();
    if affected == 0 {
        return None;
    }

    let scrubbed = notes
        .iter()
        .map(|n| {
            let mut n = n.clone();
            n.label_ids.retain(|l| l != label_id);
            n
        })
        .collect();
    Some((scrubbed, affected))
}
