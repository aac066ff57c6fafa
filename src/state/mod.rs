use crate::collections::{self, ConfirmGate};
use crate::models::{GalleryImage, Note, SiteConfig, StoryMoment, Video};
use crate::storage;
use crate::util::next_item_id;
use leptos::prelude::*;

/// Confirm-gate target for the whole-document reset on the systems panel.
pub(crate) const RESET_TARGET: &str = "__reset_document";

pub(crate) const DEFAULT_TAB: &str = "guests";

/// Session state. The config document is the single source of truth;
/// `active_tab` and the confirm gate are the only state outside it, and
/// neither is persisted.
#[derive(Clone, Copy)]
pub(crate) struct AdminState {
    pub config: RwSignal<SiteConfig>,
    pub active_tab: RwSignal<&'static str>,
    pending_confirm: RwSignal<ConfirmGate>,
}

#[derive(Clone, Copy)]
pub(crate) struct AdminContext(pub AdminState);

impl AdminState {
    pub fn load() -> Self {
        Self {
            config: RwSignal::new(storage::load_config_or_starter()),
            active_tab: RwSignal::new(DEFAULT_TAB),
            pending_confirm: RwSignal::new(ConfirmGate::default()),
        }
    }

    /// Every mutation funnels through here: exactly one document update,
    /// one save, and any armed confirmation is dropped (a mutation is "any
    /// other interaction" as far as the gate is concerned).
    pub fn update_config(&self, edit: impl FnOnce(&mut SiteConfig)) {
        self.pending_confirm.update(|g| g.disarm());
        self.config.update(edit);
        storage::save_config(&self.config.get_untracked());
    }

    pub fn set_active_tab(&self, id: &'static str) {
        self.pending_confirm.update(|g| g.disarm());
        self.active_tab.set(id);
    }

    // ── planner notes (addressed by id) ─────────────────────────────────

    pub fn add_note(&self) {
        let note = Note {
            id: next_item_id("note"),
            ..Default::default()
        };
        self.update_config(|c| c.notes.push(note));
    }

    pub fn update_note(&self, id: &str, edit: impl FnOnce(&mut Note)) {
        self.update_config(|c| {
            collections::update_by_key(&mut c.notes, id, edit);
        });
    }

    pub fn remove_note(&self, id: &str) {
        self.update_config(|c| {
            collections::remove_by_key(&mut c.notes, id);
        });
    }

    // ── story moments (addressed by position) ───────────────────────────

    pub fn add_story_moment(&self) {
        let moment = StoryMoment {
            id: next_item_id("story"),
            ..Default::default()
        };
        self.update_config(|c| c.story.push(moment));
    }

    pub fn update_story_at(&self, index: usize, edit: impl FnOnce(&mut StoryMoment)) {
        self.update_config(|c| {
            // Resolve the position to the item's stable key before
            // touching anything, so a shifted list can't retarget the
            // edit.
            let Some(key) = collections::key_at(&c.story, index) else {
                return;
            };
            collections::update_by_key(&mut c.story, &key, edit);
        });
    }

    pub fn remove_story_at(&self, index: usize) {
        self.update_config(|c| {
            let Some(key) = collections::key_at(&c.story, index) else {
                return;
            };
            collections::remove_by_key(&mut c.story, &key);
        });
    }

    /// Current position of a story moment, for callers that hold its
    /// stable id (the rendered rows) but speak the positional contract.
    pub fn story_index(&self, id: &str) -> Option<usize> {
        self.config
            .with_untracked(|c| c.story.iter().position(|m| m.id == id))
    }

    // ── videos (addressed by id, removal confirm-gated) ─────────────────

    pub fn add_video(&self) {
        let video = Video {
            id: next_item_id("video"),
            ..Default::default()
        };
        self.update_config(|c| c.videos.push(video));
    }

    pub fn update_video(&self, id: &str, edit: impl FnOnce(&mut Video)) {
        self.update_config(|c| {
            collections::update_by_key(&mut c.videos, id, edit);
        });
    }

    /// Two-step removal. The first call arms and returns `false`; a second
    /// call for the same video removes it and returns `true`. Anything
    /// else in between disarms, and the video stays.
    pub fn remove_video(&self, id: &str) -> bool {
        let fire = self
            .pending_confirm
            .try_update(|g| g.request(id))
            .unwrap_or(false);
        if fire {
            self.update_config(|c| {
                collections::remove_by_key(&mut c.videos, id);
            });
        }
        fire
    }

    pub fn video_delete_armed(&self, id: &str) -> bool {
        self.pending_confirm.with(|g| g.is_armed(id))
    }

    // ── gallery images (addressed by position) ──────────────────────────

    pub fn add_gallery_image(&self) {
        let image = GalleryImage {
            id: next_item_id("img"),
            ..Default::default()
        };
        self.update_config(|c| c.gallery_images.push(image));
    }

    pub fn update_gallery_at(&self, index: usize, edit: impl FnOnce(&mut GalleryImage)) {
        self.update_config(|c| {
            let Some(key) = collections::key_at(&c.gallery_images, index) else {
                return;
            };
            collections::update_by_key(&mut c.gallery_images, &key, edit);
        });
    }

    pub fn remove_gallery_at(&self, index: usize) {
        self.update_config(|c| {
            let Some(key) = collections::key_at(&c.gallery_images, index) else {
                return;
            };
            collections::remove_by_key(&mut c.gallery_images, &key);
        });
    }

    pub fn gallery_index(&self, id: &str) -> Option<usize> {
        self.config
            .with_untracked(|c| c.gallery_images.iter().position(|i| i.id == id))
    }

    // ── document reset (confirm-gated) ──────────────────────────────────

    pub fn reset_config(&self) -> bool {
        let fire = self
            .pending_confirm
            .try_update(|g| g.request(RESET_TARGET))
            .unwrap_or(false);
        if fire {
            storage::clear_config();
            self.config.set(SiteConfig::starter());
        }
        fire
    }

    pub fn reset_armed(&self) -> bool {
        self.pending_confirm.with(|g| g.is_armed(RESET_TARGET))
    }
}
