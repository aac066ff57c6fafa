//! The editing contract shared by every ordered collection on the config
//! document (planner notes, story moments, videos, gallery images).
//!
//! Items are identified by a stable key fixed at creation. Panels that
//! address items by position go through [`key_at`] first, so a removal
//! that shifts positions can never redirect an in-flight edit to a
//! different item.

/// Stable identity of one collection item.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

/// Edits exactly one item in place. Returns `false` when no item carries
/// the key (a no-op, not an error). The edit must leave `key()` untouched;
/// identity is fixed at creation.
pub(crate) fn update_by_key<T: Keyed>(
    items: &mut [T],
    key: &str,
    edit: impl FnOnce(&mut T),
) -> bool {
    let Some(item) = items.iter_mut().find(|i| i.key() == key) else {
        return false;
    };
    #[cfg(debug_assertions)]
    let before = item.key().to_string();
    edit(item);
    #[cfg(debug_assertions)]
    debug_assert_eq!(item.key(), before, "collection edits must not change identity");
    true
}

/// Removes exactly one item, preserving the relative order of the rest.
/// Positions of subsequent items shift down by one.
pub(crate) fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &str) -> Option<T> {
    let pos = items.iter().position(|i| i.key() == key)?;
    Some(items.remove(pos))
}

/// Position → stable key bridge for the positionally-addressed
/// collections.
pub(crate) fn key_at<T: Keyed>(items: &[T], index: usize) -> Option<String> {
    items.get(index).map(|i| i.key().to_string())
}

/// Two-step confirmation for destructive actions, in place of a blocking
/// native `confirm()` dialog.
///
/// The first request for a target arms the gate and returns `false`; a
/// second request for the same target executes (returns `true`) and
/// disarms. Any unrelated interaction must call [`ConfirmGate::disarm`].
/// The armed flag lives outside the config document and is never
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ConfirmGate {
    armed: Option<String>,
}

impl ConfirmGate {
    pub fn request(&mut self, target: &str) -> bool {
        if self.armed.as_deref() == Some(target) {
            self.armed = None;
            true
        } else {
            self.armed = Some(target.to_string());
            false
        }
    }

    pub fn is_armed(&self, target: &str) -> bool {
        self.armed.as_deref() == Some(target)
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, StoryMoment, Video};

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
            done: false,
        }
    }

    fn moment(id: &str, title: &str) -> StoryMoment {
        StoryMoment {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_then_remove_is_net_noop_on_length() {
        let mut notes: Vec<Note> = vec![];
        notes.push(note("n-1", "book the florist"));
        assert_eq!(notes.len(), 1);

        let removed = remove_by_key(&mut notes, "n-1");
        assert!(removed.is_some());
        assert_eq!(notes.len(), 0);
    }

    #[test]
    fn test_update_touches_one_field_of_one_item() {
        let mut notes = vec![note("n-1", "cake tasting"), note("n-2", "send invites")];
        let untouched = notes[1].clone();

        let hit = update_by_key(&mut notes, "n-1", |n| n.done = true);

        assert!(hit);
        assert!(notes[0].done);
        assert_eq!(notes[0].text, "cake tasting");
        assert_eq!(notes[0].id, "n-1");
        assert_eq!(notes[1], untouched);
    }

    #[test]
    fn test_update_unknown_key_is_noop() {
        let mut notes = vec![note("n-1", "cake tasting")];
        let before = notes.clone();
        assert!(!update_by_key(&mut notes, "n-9", |n| n.done = true));
        assert_eq!(notes, before);
    }

    #[test]
    fn test_update_preserves_identity_key() {
        let mut notes = vec![note("n-1", "old")];
        update_by_key(&mut notes, "n-1", |n| n.text = "new".to_string());
        assert_eq!(notes[0].id, "n-1");
    }

    #[test]
    fn test_positional_remove_shifts_later_items_down() {
        let mut story = vec![moment("s-1", "met"), moment("s-2", "engaged"), moment("s-3", "wed")];

        let key = key_at(&story, 1).expect("index 1 should resolve to a key");
        remove_by_key(&mut story, &key);

        assert_eq!(story.len(), 2);
        assert_eq!(story[0].title, "met");
        assert_eq!(story[1].title, "wed");
        // The bridge now resolves the shifted positions.
        assert_eq!(key_at(&story, 1).as_deref(), Some("s-3"));
        assert_eq!(key_at(&story, 2), None);
    }

    #[test]
    fn test_declined_gate_leaves_collection_unchanged() {
        let mut gate = ConfirmGate::default();
        let mut videos = vec![Video {
            id: "v-1".to_string(),
            title: "First dance".to_string(),
            url: "https://example.com/v1".to_string(),
        }];
        let before = videos.clone();

        // First click only arms; the caller must not mutate.
        if gate.request("v-1") {
            remove_by_key(&mut videos, "v-1");
        }
        assert_eq!(videos, before);
        assert!(gate.is_armed("v-1"));

        // Declining = doing anything else.
        gate.disarm();
        assert!(!gate.is_armed("v-1"));
        assert_eq!(videos, before);
    }

    #[test]
    fn test_confirmed_gate_executes_once() {
        let mut gate = ConfirmGate::default();
        let mut videos = vec![Video::default()];

        assert!(!gate.request(""));
        if gate.request("") {
            remove_by_key(&mut videos, "");
        }
        assert!(videos.is_empty());
        // Consumed: a later identical request arms again instead of firing.
        assert!(!gate.request(""));
    }

    #[test]
    fn test_gate_rearms_on_different_target() {
        let mut gate = ConfirmGate::default();
        assert!(!gate.request("v-1"));
        // Asking about another item moves the armed flag, it does not fire.
        assert!(!gate.request("v-2"));
        assert!(!gate.is_armed("v-1"));
        assert!(gate.is_armed("v-2"));
    }
}
