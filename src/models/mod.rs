use crate::collections::Keyed;
use serde::{Deserialize, Serialize};

/// One user-arranged content block of the published site.
///
/// `id` is the section kind (a key of the tab registry); `label` is the
/// couple's display text for it and may be anything, including empty.
/// Order inside `SiteConfig::sections` is the order on the site.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: String::new(),
        }
    }
}

/// Planner to-do item.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: String,
    pub text: String,
    pub done: bool,
}

/// One milestone of the couple's story. Addressed by position from the
/// outside; `id` is the internal stable identity.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StoryMoment {
    pub id: String,
    pub year: String,
    pub title: String,
    pub text: String,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Gallery entry. Addressed by position from the outside, like story
/// moments.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GalleryImage {
    pub id: String,
    pub url: String,
    pub caption: String,
}

impl Keyed for Note {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for StoryMoment {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Video {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for GalleryImage {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RsvpSettings {
    pub enabled: bool,
    pub deadline: String,
    pub contact_email: String,
    pub allow_plus_ones: bool,
}

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum TemperatureUnits {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Configuration of the weather widget only. Fetching the forecast is the
/// published site's job, not the admin's.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct WeatherSettings {
    pub enabled: bool,
    pub location: String,
    pub api_key: String,
    #[serde(default)]
    pub units: TemperatureUnits,
}

/// The whole site configuration. One instance per editing session; every
/// panel mutates this document through `AdminState` and nothing else.
///
/// Collections carry `#[serde(default)]` so documents saved before a
/// collection existed still load (absent list == empty list).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SiteConfig {
    pub couple_names: String,
    pub wedding_date: String,
    pub venue_name: String,
    pub venue_address: String,
    pub welcome_message: String,
    pub hero_image_url: String,

    pub ceremony_time: String,
    pub reception_time: String,
    pub dress_code: String,
    pub timeline_intro: String,

    pub primary_color: String,
    pub accent_color: String,

    pub registry_url: String,
    pub registry_note: String,
    pub map_embed_url: String,

    pub faq_intro: String,
    pub guestbook_enabled: bool,
    pub guestbook_prompt: String,

    #[serde(default)]
    pub rsvp: RsvpSettings,
    #[serde(default)]
    pub weather: WeatherSettings,

    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub story: Vec<StoryMoment>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,
}

impl SiteConfig {
    /// First-run document: every known section, unlabeled (the tab
    /// registry supplies display defaults), in the order a new site shows
    /// them.
    pub fn starter() -> Self {
        Self {
            couple_names: "Two names".to_string(),
            welcome_message: "We're getting married!".to_string(),
            primary_color: "#7c6f5a".to_string(),
            accent_color: "#c9a26b".to_string(),
            sections: [
                "story", "events", "timeline", "gallery", "palette", "registry", "map", "faq",
                "weather", "guestbook", "videos",
            ]
            .into_iter()
            .map(Section::new)
            .collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_without_collections_parses_as_empty_collections() {
        // Documents saved by older builds may lack any of the lists.
        let json = r#"{
            "couple_names": "A & B",
            "wedding_date": "2026-09-12",
            "venue_name": "",
            "venue_address": "",
            "welcome_message": "",
            "hero_image_url": "",
            "ceremony_time": "",
            "reception_time": "",
            "dress_code": "",
            "timeline_intro": "",
            "primary_color": "",
            "accent_color": "",
            "registry_url": "",
            "registry_note": "",
            "map_embed_url": "",
            "faq_intro": "",
            "guestbook_enabled": false,
            "guestbook_prompt": ""
        }"#;
        let parsed: SiteConfig = serde_json::from_str(json).expect("old document should parse");
        assert!(parsed.sections.is_empty());
        assert!(parsed.notes.is_empty());
        assert!(parsed.story.is_empty());
        assert!(parsed.videos.is_empty());
        assert!(parsed.gallery_images.is_empty());
        assert_eq!(parsed.weather.units, TemperatureUnits::Celsius);
    }

    #[test]
    fn test_starter_document_roundtrips() {
        let starter = SiteConfig::starter();
        let json = serde_json::to_string(&starter).expect("starter should serialize");
        let back: SiteConfig = serde_json::from_str(&json).expect("starter should parse back");
        assert_eq!(back, starter);
    }

    #[test]
    fn test_starter_sections_are_all_registry_known() {
        let starter = SiteConfig::starter();
        for s in &starter.sections {
            assert!(
                crate::tabs::is_known_kind(&s.id),
                "starter section `{}` is not in the tab registry",
                s.id
            );
        }
    }

    #[test]
    fn test_temperature_units_serialize_lowercase() {
        let v = serde_json::to_value(TemperatureUnits::Fahrenheit).expect("should serialize");
        assert_eq!(v, "fahrenheit");
        assert_eq!(TemperatureUnits::Celsius.to_string(), "celsius");
    }
}
