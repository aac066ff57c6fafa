//! Tab resolution: turns the user-ordered section list into the admin's
//! navigation tabs.
//!
//! The registry below is the contract between the admin and whatever
//! produced the section order (older saves, the organizer panel, a future
//! import). Its declaration order is the order fallback tabs appear in,
//! so reordering it is a behavior change, not a cleanup.

use crate::models::Section;

/// Display metadata for one known section kind. `label` is only the
/// default; the section's own label wins when present.
pub(crate) struct SectionMeta {
    pub kind: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub icon: &'static str,
}

pub(crate) const SECTION_REGISTRY: &[SectionMeta] = &[
    SectionMeta {
        kind: "story",
        label: "Our Story",
        short_label: "Story",
        icon: "heart",
    },
    SectionMeta {
        kind: "timeline",
        label: "Timeline",
        short_label: "Timeline",
        icon: "clock",
    },
    SectionMeta {
        kind: "events",
        label: "Events",
        short_label: "Events",
        icon: "calendar",
    },
    SectionMeta {
        kind: "palette",
        label: "Colors",
        short_label: "Colors",
        icon: "palette",
    },
    SectionMeta {
        kind: "gallery",
        label: "Photo Gallery",
        short_label: "Photos",
        icon: "image",
    },
    SectionMeta {
        kind: "registry",
        label: "Gift Registry",
        short_label: "Registry",
        icon: "gift",
    },
    SectionMeta {
        kind: "map",
        label: "Getting There",
        short_label: "Map",
        icon: "map-pin",
    },
    SectionMeta {
        kind: "weather",
        label: "Weather",
        short_label: "Weather",
        icon: "cloud-sun",
    },
    SectionMeta {
        kind: "faq",
        label: "FAQ",
        short_label: "FAQ",
        icon: "circle-help",
    },
    SectionMeta {
        kind: "guestbook",
        label: "Guestbook",
        short_label: "Guestbook",
        icon: "book-open",
    },
    SectionMeta {
        kind: "videos",
        label: "Videos",
        short_label: "Videos",
        icon: "video",
    },
];

/// Section kinds whose tab id differs from the section id. Consulted in
/// both directions; everything not listed maps to itself.
const TAB_ID_ALIASES: &[(&str, &str)] = &[("palette", "colors"), ("gallery", "images")];

pub(crate) fn tab_id_for_kind(kind: &str) -> &str {
    TAB_ID_ALIASES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, tab)| *tab)
        .unwrap_or(kind)
}

pub(crate) fn kind_for_tab_id(tab_id: &str) -> &str {
    TAB_ID_ALIASES
        .iter()
        .find(|(_, t)| *t == tab_id)
        .map(|(k, _)| *k)
        .unwrap_or(tab_id)
}

pub(crate) fn is_known_kind(kind: &str) -> bool {
    registry_meta(kind).is_some()
}

pub(crate) fn registry_meta(kind: &str) -> Option<&'static SectionMeta> {
    SECTION_REGISTRY.iter().find(|m| m.kind == kind)
}

/// Fixed system tabs. The prefix always leads the nav; the suffix always
/// closes it. Neither is derived from sections.
pub(crate) struct SystemTab {
    pub id: &'static str,
    pub label: &'static str,
    pub short_label: &'static str,
    pub icon: &'static str,
}

pub(crate) const SYSTEM_PREFIX_TABS: &[SystemTab] = &[
    SystemTab {
        id: "guests",
        label: "Guest List",
        short_label: "Guests",
        icon: "users",
    },
    SystemTab {
        id: "planner",
        label: "Planner",
        short_label: "Planner",
        icon: "list-checks",
    },
    SystemTab {
        id: "organizer",
        label: "Organizer",
        short_label: "Organize",
        icon: "layout-grid",
    },
    SystemTab {
        id: "general",
        label: "General Settings",
        short_label: "General",
        icon: "settings",
    },
];

pub(crate) const SYSTEM_SUFFIX_TABS: &[SystemTab] = &[SystemTab {
    id: "systems",
    label: "Systems",
    short_label: "Systems",
    icon: "wrench",
}];

/// One navigation entry. Derived, read-only; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tab {
    pub id: &'static str,
    pub label: String,
    pub short_label: &'static str,
    pub icon: &'static str,
}

impl SystemTab {
    fn to_tab(&self) -> Tab {
        Tab {
            id: self.id,
            label: self.label.to_string(),
            short_label: self.short_label,
            icon: self.icon,
        }
    }
}

fn section_tab(meta: &'static SectionMeta, user_label: Option<&str>) -> Tab {
    let label = match user_label.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => meta.label.to_string(),
    };
    Tab {
        id: tab_id_for_kind(meta.kind),
        label,
        short_label: meta.short_label,
        icon: meta.icon,
    }
}

/// Derives the full tab sequence from the user's section order.
///
/// Prefix tabs, then one tab per known section in user order (unknown
/// kinds dropped, duplicates collapsed to the first occurrence), then one
/// tab per registry kind the order list omitted, then the suffix. Pure:
/// same input, same output.
pub(crate) fn resolve_tabs(section_order: &[Section]) -> Vec<Tab> {
    let mut tabs: Vec<Tab> = Vec::with_capacity(
        SYSTEM_PREFIX_TABS.len() + SECTION_REGISTRY.len() + SYSTEM_SUFFIX_TABS.len(),
    );
    let mut seen_kinds: Vec<&'static str> = Vec::with_capacity(SECTION_REGISTRY.len());

    tabs.extend(SYSTEM_PREFIX_TABS.iter().map(SystemTab::to_tab));

    for section in section_order {
        let Some(meta) = registry_meta(&section.id) else {
            // The order list may reference content this build no longer
            // defines; that is stale data, not an error.
            continue;
        };
        if seen_kinds.contains(&meta.kind) {
            continue;
        }
        seen_kinds.push(meta.kind);
        tabs.push(section_tab(meta, Some(section.label.as_str())));
    }

    // Every known kind stays reachable even when the order list is stale
    // or incomplete.
    for meta in SECTION_REGISTRY {
        if seen_kinds.contains(&meta.kind) {
            continue;
        }
        seen_kinds.push(meta.kind);
        tabs.push(section_tab(meta, None));
    }

    tabs.extend(SYSTEM_SUFFIX_TABS.iter().map(SystemTab::to_tab));
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, label: &str) -> Section {
        Section {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    fn expected_len() -> usize {
        SYSTEM_PREFIX_TABS.len() + SECTION_REGISTRY.len() + SYSTEM_SUFFIX_TABS.len()
    }

    fn assert_no_duplicate_ids(tabs: &[Tab]) {
        for (i, t) in tabs.iter().enumerate() {
            assert!(
                !tabs[i + 1..].iter().any(|u| u.id == t.id),
                "duplicate tab id `{}`",
                t.id
            );
        }
    }

    #[test]
    fn test_resolver_length_is_prefix_plus_registry_plus_suffix() {
        for order in [
            vec![],
            vec![section("story", "How we met")],
            SECTION_REGISTRY
                .iter()
                .map(|m| section(m.kind, ""))
                .collect::<Vec<_>>(),
        ] {
            let tabs = resolve_tabs(&order);
            assert_eq!(tabs.len(), expected_len());
            assert_no_duplicate_ids(&tabs);
        }
    }

    #[test]
    fn test_prefix_and_suffix_frame_the_sequence() {
        let tabs = resolve_tabs(&[section("faq", "")]);
        let ids: Vec<&str> = tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids[..4], ["guests", "planner", "organizer", "general"]);
        assert_eq!(ids.last(), Some(&"systems"));
    }

    #[test]
    fn test_palette_and_gallery_resolve_to_renamed_tab_ids() {
        let tabs = resolve_tabs(&[section("palette", "Our palette"), section("gallery", "")]);
        assert!(tabs.iter().any(|t| t.id == "colors"));
        assert!(tabs.iter().any(|t| t.id == "images"));
        assert!(!tabs.iter().any(|t| t.id == "palette"));
        assert!(!tabs.iter().any(|t| t.id == "gallery"));
    }

    #[test]
    fn test_alias_table_maps_both_directions() {
        assert_eq!(tab_id_for_kind("palette"), "colors");
        assert_eq!(tab_id_for_kind("gallery"), "images");
        assert_eq!(kind_for_tab_id("colors"), "palette");
        assert_eq!(kind_for_tab_id("images"), "gallery");
        // Identity everywhere else.
        assert_eq!(tab_id_for_kind("faq"), "faq");
        assert_eq!(kind_for_tab_id("faq"), "faq");
    }

    #[test]
    fn test_user_label_wins_over_registry_default() {
        let tabs = resolve_tabs(&[section("story", "How we met")]);
        let story = tabs.iter().find(|t| t.id == "story").expect("story tab");
        assert_eq!(story.label, "How we met");
        // Short label and icon stay registry-owned.
        assert_eq!(story.short_label, "Story");
        assert_eq!(story.icon, "heart");
    }

    #[test]
    fn test_blank_user_label_falls_back_to_registry_default() {
        let tabs = resolve_tabs(&[section("story", "   ")]);
        let story = tabs.iter().find(|t| t.id == "story").expect("story tab");
        assert_eq!(story.label, "Our Story");
    }

    #[test]
    fn test_unknown_kinds_are_dropped_without_error() {
        let tabs = resolve_tabs(&[section("spotify-playlist", "Tunes"), section("faq", "")]);
        assert_eq!(tabs.len(), expected_len());
        assert!(!tabs.iter().any(|t| t.label == "Tunes"));
    }

    #[test]
    fn test_omitted_kind_still_gets_a_tab_after_ordered_ones() {
        // Order list without `faq`.
        let order: Vec<Section> = SECTION_REGISTRY
            .iter()
            .filter(|m| m.kind != "faq")
            .map(|m| section(m.kind, ""))
            .collect();
        let tabs = resolve_tabs(&order);

        let faq_pos = tabs.iter().position(|t| t.id == "faq").expect("faq tab");
        let last_ordered_pos = tabs
            .iter()
            .position(|t| t.id == tab_id_for_kind(order.last().unwrap().id.as_str()))
            .unwrap();
        let suffix_pos = tabs.iter().position(|t| t.id == "systems").unwrap();

        assert!(faq_pos > last_ordered_pos);
        assert!(faq_pos < suffix_pos);
    }

    #[test]
    fn test_missing_kinds_appear_in_registry_declaration_order() {
        let tabs = resolve_tabs(&[]);
        let derived: Vec<&str> = tabs
            .iter()
            .map(|t| t.id)
            .filter(|id| {
                !SYSTEM_PREFIX_TABS.iter().any(|s| s.id == *id)
                    && !SYSTEM_SUFFIX_TABS.iter().any(|s| s.id == *id)
            })
            .collect();
        let registry_order: Vec<&str> = SECTION_REGISTRY
            .iter()
            .map(|m| tab_id_for_kind(m.kind))
            .collect();
        assert_eq!(derived, registry_order);
    }

    #[test]
    fn test_duplicate_sections_collapse_to_first_occurrence() {
        let tabs = resolve_tabs(&[
            section("story", "First label"),
            section("story", "Second label"),
        ]);
        assert_eq!(tabs.len(), expected_len());
        assert_no_duplicate_ids(&tabs);
        let story = tabs.iter().find(|t| t.id == "story").unwrap();
        assert_eq!(story.label, "First label");
    }

    #[test]
    fn test_resolver_is_pure() {
        let order = vec![
            section("gallery", "Snaps"),
            section("story", ""),
            section("bogus", "x"),
        ];
        assert_eq!(resolve_tabs(&order), resolve_tabs(&order));
    }
}
