//! Dialog display ordering.
//!
//! The dialog list is a derived view: the collection itself is unordered and
//! this policy re-ranks it on every read. Pinned dialogs come first; within a
//! tier the dialog with the most recent message wins, and dialogs without any
//! messages sink to the bottom. Equal ranks keep their input order (the sort
//! is stable), so repeated invocations on unchanged input are identical.

use std::cmp::Ordering;

use crate::Dialog;

/// Maximum number of dialogs a user may keep pinned at once.
///
/// Enforced by the mutation dispatcher before any optimistic apply; the
/// ordering policy itself never rejects anything.
pub const MAX_PINNED_DIALOGS: usize = 10;

/// Pairwise display comparator for two dialogs
pub(crate) fn compare_dialogs(a: &Dialog, b: &Dialog) -> Ordering {
    // Pinned dialogs sort before unpinned
    b.is_pinned.cmp(&a.is_pinned).then_with(|| {
        match (a.last_message_time(), b.last_message_time()) {
            // Compare timestamps in reverse order (newest first)
            (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
            // A dialog with no messages sorts after one with any
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    })
}

/// Rank the dialog collection for display
///
/// Pure function over a borrowed slice: the collection is never mutated and
/// the result is safe to recompute on every render.
pub fn display_order(dialogs: &[Dialog]) -> Vec<&Dialog> {
    let mut view: Vec<&Dialog> = dialogs.iter().collect();
    view.sort_by(|a, b| compare_dialogs(a, b));
    view
}

/// Count currently pinned dialogs (for pin-cap validation)
pub fn pinned_count(dialogs: &[Dialog]) -> usize {
    dialogs.iter().filter(|d| d.is_pinned).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Message, Participant};

    fn dialog(id: &str, pinned: bool, last_at: Option<u64>) -> Dialog {
        let mut dialog = Dialog::new(id.to_string(), Participant::new(format!("user-{id}")));
        dialog.is_pinned = pinned;
        if let Some(at) = last_at {
            dialog.internal_add_message(Message::new_text(
                format!("{id}-m1"),
                id.to_string(),
                format!("user-{id}"),
                "hi".to_string(),
                at,
            ));
        }
        dialog
    }

    fn ids<'a>(view: &[&'a Dialog]) -> Vec<&'a str> {
        view.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_pinned_sort_first() {
        let dialogs = vec![
            dialog("a", false, Some(500)),
            dialog("b", true, Some(100)),
            dialog("c", false, Some(300)),
        ];
        // An old pinned dialog still outranks fresh unpinned ones
        assert_eq!(ids(&display_order(&dialogs)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_newest_message_first_within_tier() {
        let dialogs = vec![
            dialog("a", false, Some(100)),
            dialog("b", false, Some(300)),
            dialog("c", false, Some(200)),
        ];
        assert_eq!(ids(&display_order(&dialogs)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_empty_dialogs_sort_last() {
        let dialogs = vec![
            dialog("a", false, None),
            dialog("b", false, Some(100)),
            dialog("c", false, None),
        ];
        let view = display_order(&dialogs);
        assert_eq!(ids(&view), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_stable_under_reinvocation() {
        // Equal timestamps and two empty dialogs: no secondary key, the
        // stable sort must preserve input order across repeated calls
        let dialogs = vec![
            dialog("a", false, Some(100)),
            dialog("b", false, Some(100)),
            dialog("c", false, None),
            dialog("d", false, None),
        ];
        let first = ids(&display_order(&dialogs));
        let second = ids(&display_order(&dialogs));
        assert_eq!(first, vec!["a", "b", "c", "d"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_not_mutated() {
        let dialogs = vec![dialog("a", false, Some(100)), dialog("b", true, Some(200))];
        let _ = display_order(&dialogs);
        assert_eq!(dialogs[0].id, "a");
        assert_eq!(dialogs[1].id, "b");
    }

    #[test]
    fn test_pinned_count() {
        let dialogs = vec![
            dialog("a", true, None),
            dialog("b", false, None),
            dialog("c", true, None),
        ];
        assert_eq!(pinned_count(&dialogs), 2);
    }
}
