//! Linear filters over note and label slices.
//!
//! Matching is a case-insensitive substring test; there is no index. An empty
//! term matches everything. Results keep the input order.

use crate::{Label, Note};

/// Notes whose content contains `term`, ignoring case.
pub fn filter_notes_by_content(notes: &[Note], term: &str) -> Vec<Note> {
    let needle = term.to_lowercase();
    notes
        .iter()
        .filter(|n| n.content.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Labels whose name contains `term`, ignoring case.
pub fn filter_labels_by_name(labels: &[Label], term: &str) -> Vec<Label> {
    let needle = term.to_lowercase();
    labels
        .iter()
        .filter(|l| l.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn filter_bookmarked(notes: &[Note]) -> Vec<Note> {
    notes.iter().filter(|n| n.is_bookmarked).cloned().collect()
}

pub fn filter_by_label(notes: &[Note], label_id: &str) -> Vec<Note> {
    notes
        .iter()
        .filter(|n| n.has_label(label_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(id: &str, content: &str, labels: &[&str], bookmarked: bool) -> Note {
        Note {
            id: id.to_string(),
            color: None,
            label_ids: labels.iter().map(|s| s.to_string()).collect(),
            content: content.to_string(),
            updated_at: Utc::now(),
            is_bookmarked: bookmarked,
        }
    }

    #[test]
    fn test_content_search_ignores_case() {
        let notes = vec![
            note("n1", "Learn React Native", &[], false),
            note("n2", "groceries", &[], false),
            note("n3", "react basics", &[], false),
        ];
        let hits = filter_notes_by_content(&notes, "REACT");
        let ids: Vec<_> = hits.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
    }

    #[test]
    fn test_empty_term_matches_all() {
        let notes = vec![note("n1", "", &[], false), note("n2", "x", &[], false)];
        assert_eq!(filter_notes_by_content(&notes, "").len(), 2);
    }

    #[test]
    fn test_label_name_filter() {
        let labels = vec![
            Label {
                id: "l1".into(),
                name: "Team Work".into(),
            },
            Label {
                id: "l2".into(),
                name: "".into(),
            },
        ];
        let hits = filter_labels_by_name(&labels, "work");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "l1");
        assert_eq!(filter_labels_by_name(&labels, "").len(), 2);
    }

    #[test]
    fn test_bookmark_and_label_filters() {
        let notes = vec![
            note("n1", "a", &["l1"], true),
            note("n2", "b", &["l2", "l1"], false),
            note("n3", "c", &[], true),
        ];
        assert_eq!(filter_bookmarked(&notes).len(), 2);
        let tagged = filter_by_label(&notes, "l1");
        assert_eq!(tagged.len(), 2);
        assert!(filter_by_label(&notes, "l9").is_empty());
    }
}
