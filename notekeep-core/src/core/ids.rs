//! Prefixed identifier generation for notes, labels and folders.

use crate::IdStrategy;
use uuid::Uuid;

pub const NOTE_PREFIX: &str = "n";
pub const LABEL_PREFIX: &str = "l";
pub const FOLDER_PREFIX: &str = "f";

/// Produces ids of the form `<prefix><n>` (or `<prefix>-<uuid>`).
///
/// The counter only moves forward, so deleting items never causes a
/// previously issued id to be handed out again.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    strategy: IdStrategy,
    last: u64,
}

impl IdSequence {
    /// Creates a sequence that continues after the highest `<prefix><n>` among `existing`.
    ///
    /// Ids with another prefix or a non-numeric suffix are ignored.
    pub fn seeded<'a, I>(prefix: &'static str, strategy: IdStrategy, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let last = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            prefix,
            strategy,
            last,
        }
    }

    /// Returns the next id for which `taken` is false.
    pub fn next_id<F>(&mut self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Sequential => match self.last.checked_add(1) {
                    Some(next) => {
                        self.last = next;
                        format!("{}{}", self.prefix, next)
                    }
                    // Counter exhausted; fall back to random ids.
                    None => format!("{}-{}", self.prefix, Uuid::new_v4()),
                },
                IdStrategy::Uuid => format!("{}-{}", self.prefix, Uuid::new_v4()),
            };
            if !taken(&candidate) {
                return candidate;
            }
            log::debug!("skipping id {candidate}, already in use");
        }
    }
}
