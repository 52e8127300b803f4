//! Core library for notekeep — an in-memory note-taking store.
//!
//! The primary entry point is [`NoteStore`], which owns the notes, labels,
//! trash and folders of one running application. All mutations go through
//! `NoteStore` methods; readers take cheap [`Arc`](std::sync::Arc) snapshots.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    change::{Change, ChangeRecord},
    change_log::ChangeLog,
    config::{IdStrategy, StoreConfig},
    error::{NotekeepError, Result},
    fixtures::SampleData,
    note::{Folder, Label, Note, NoteColor, PALETTE},
    store::{NoteStore, StoreSnapshot},
};
