//! Internal domain modules for the notekeep core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod change;
pub mod change_log;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod ids;
pub mod note;
pub mod search;
pub mod store;
