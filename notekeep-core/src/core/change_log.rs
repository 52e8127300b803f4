//! Bounded in-memory journal of published store changes.

use crate::{Change, ChangeRecord};
use std::collections::VecDeque;

/// Records every published mutation and drops the oldest once full.
#[derive(Debug, Clone)]
pub struct ChangeLog {
    keep_last: usize,
    records: VecDeque<ChangeRecord>,
}

impl ChangeLog {
    /// Creates an empty log that retains at most `keep_last` records.
    pub fn new(keep_last: usize) -> Self {
        Self {
            keep_last,
            records: VecDeque::new(),
        }
    }

    /// Appends `change` stamped with `revision` and the current time, then purges.
    pub fn log(&mut self, revision: u64, change: Change) {
        log::debug!("r{revision}: {}", change.kind());
        self.records.push_back(ChangeRecord {
            revision,
            timestamp: chrono::Utc::now(),
            change,
        });
        self.purge_if_needed();
    }

    /// Drops records from the front until at most `keep_last` remain.
    fn purge_if_needed(&mut self) {
        while self.records.len() > self.keep_last {
            self.records.pop_front();
        }
    }

    /// Returns retained records with a revision strictly greater than `revision`, oldest first.
    ///
    /// If older records were purged the result starts at the oldest one still
    /// held; compare its revision with `revision + 1` to detect a gap.
    pub fn since(&self, revision: u64) -> Vec<ChangeRecord> {
        self.records
            .iter()
            .filter(|r| r.revision > revision)
            .cloned()
            .collect()
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&ChangeRecord> {
        self.records.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_and_purge() {
        let mut log = ChangeLog::new(5);

        for i in 1..=10u64 {
            log.log(
                i,
                Change::NoteAdded {
                    note_id: format!("n{i}"),
                },
            );
        }

        let all = log.since(0);
        assert_eq!(all.len(), 5);
        assert_eq!(all.first().unwrap().revision, 6);
        assert_eq!(log.latest().unwrap().revision, 10);
    }

    #[test]
    fn test_since_filters_by_revision() {
        let mut log = ChangeLog::new(100);
        log.log(1, Change::TrashEmptied { count: 1 });
        log.log(
            2,
            Change::LabelAdded {
                label_id: "l1".to_string(),
            },
        );
        log.log(3, Change::FoldersReplaced { count: 0 });

        let newer = log.since(1);
        assert_eq!(newer.len(), 2);
        assert_eq!(newer[0].change.kind(), "LabelAdded");
        assert!(log.since(3).is_empty());
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = ChangeLog::new(1);
        assert!(log.since(0).is_empty());
        assert!(log.latest().is_none());
    }
}
