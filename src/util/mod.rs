use std::sync::atomic::{AtomicU32, Ordering};

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

// Per-session tiebreaker: two adds inside the same millisecond must not
// collide on id.
static ITEM_SEQ: AtomicU32 = AtomicU32::new(1);

pub(crate) fn item_id_from(prefix: &str, ms: i64, seq: u32) -> String {
    format!("{prefix}-{ms}-{seq}")
}

/// Machine-generated id for a new collection item, e.g. `note-1722900000000-7`.
pub(crate) fn next_item_id(prefix: &str) -> String {
    let seq = ITEM_SEQ.fetch_add(1, Ordering::SeqCst);
    item_id_from(prefix, now_ms(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_embeds_prefix_timestamp_and_sequence() {
        assert_eq!(
            item_id_from("note", 1722900000000, 7),
            "note-1722900000000-7"
        );
    }

    #[test]
    fn test_item_ids_differ_within_same_millisecond() {
        let a = item_id_from("video", 1000, 1);
        let b = item_id_from("video", 1000, 2);
        assert_ne!(a, b);
    }
}
