//! Synthesis voice catalog entry.
use crate::voice_id::VoiceId;
use serde::Serialize;
use strum::Display;

/// Gender of a synthesis voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum VoiceGender {
    Male,
    Female,
    Neutral,
}

/// A named synthesis persona. Immutable, sourced from the static catalog.
///
/// `tags` constrain where the voice applies: composite language-accent
/// tags such as `"en-us"` plus speech-type tags such as `"narration"`.
/// A voice is a candidate for a selection when its tag set contains both
/// the selection's composite tag and its speech-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    pub id: VoiceId,
    pub name: &'static str,
    pub gender: VoiceGender,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub preview_text: &'static str,
}

impl Voice {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        gender: VoiceGender,
        description: &'static str,
        tags: &'static [&'static str],
        preview_text: &'static str,
    ) -> Self {
        Self {
            id: VoiceId::new(id),
            name,
            gender,
            description,
            tags,
            preview_text,
        }
    }

    /// Whether this voice carries the given applicability tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}
