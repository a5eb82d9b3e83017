//! Selection state and catalog filters.
//!
//! `accents_for` and `voices_for` derive the valid option sets from the
//! catalog; `Selection` holds the mutable session state and keeps itself
//! consistent with those sets after every mutation.

use crate::catalog;
use voice_studio_domain::{Accent, AccentId, LanguageId, SpeechTypeId, Voice, VoiceId};

/// Text preloaded into a fresh session.
pub const DEFAULT_TEXT: &str = "Hello world! Welcome to the Gemini Text to Speech studio. \
     Here you can generate natural sounding audio in a variety of languages and voices.";

/// Accents belonging to `language`, in catalog order.
pub fn accents_for(language: LanguageId) -> Vec<&'static Accent> {
    catalog::ACCENTS
        .iter()
        .filter(|a| a.language == language)
        .collect()
}

/// Voices applicable to the given language, accent, and speech style,
/// in catalog order.
///
/// A voice qualifies when its tag set contains both the composite
/// `"{language}-{accent}"` tag and the speech-type tag.
pub fn voices_for(
    language: LanguageId,
    accent: AccentId,
    speech_type: SpeechTypeId,
) -> Vec<&'static Voice> {
    let composite = format!("{}-{}", language.as_str(), accent.as_str());
    catalog::VOICES
        .iter()
        .filter(|v| v.has_tag(&composite) && v.has_tag(speech_type.as_str()))
        .collect()
}

/// Mutable session state: the user's current language, accent, speech
/// style, voice, and text.
///
/// Invariants, restored after every mutation:
/// - the accent belongs to the language's accent set whenever that set is
///   non-empty, and is `None` otherwise;
/// - the voice belongs to the candidate set implied by
///   (language, accent, speech type) whenever that set is non-empty, and
///   is `None` otherwise.
#[derive(Debug, Clone)]
pub struct Selection {
    language: LanguageId,
    accent: Option<AccentId>,
    speech_type: SpeechTypeId,
    voice: Option<VoiceId>,
    text: String,
}

impl Selection {
    /// A fresh session: first language, its first accent, the default
    /// speech style, the first candidate voice, and the stock greeting.
    pub fn from_catalog_defaults() -> Self {
        let mut selection = Self {
            language: catalog::LANGUAGES[0].id,
            accent: None,
            speech_type: catalog::default_speech_type().id,
            voice: None,
            text: DEFAULT_TEXT.to_owned(),
        };
        selection.reconcile();
        selection
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn accent(&self) -> Option<AccentId> {
        self.accent
    }

    pub fn speech_type(&self) -> SpeechTypeId {
        self.speech_type
    }

    pub fn voice(&self) -> Option<VoiceId> {
        self.voice
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current voice candidates, in catalog order. Empty while no accent
    /// is selectable.
    pub fn candidates(&self) -> Vec<&'static Voice> {
        match self.accent {
            Some(accent) => voices_for(self.language, accent, self.speech_type),
            None => Vec::new(),
        }
    }

    pub fn set_language(&mut self, language: LanguageId) {
        self.language = language;
        self.reconcile();
    }

    pub fn set_accent(&mut self, accent: AccentId) {
        self.accent = Some(accent);
        self.reconcile();
    }

    pub fn set_speech_type(&mut self, speech_type: SpeechTypeId) {
        self.speech_type = speech_type;
        self.reconcile_voice();
    }

    /// Pick a voice out of the current candidate set. Returns `false`
    /// (leaving the selection untouched) when the voice is not a
    /// candidate.
    pub fn select_voice(&mut self, voice: VoiceId) -> bool {
        if self.candidates().iter().any(|v| v.id == voice) {
            self.voice = Some(voice);
            true
        } else {
            false
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn reconcile(&mut self) {
        let accents = accents_for(self.language);
        if !self.accent.is_some_and(|a| accents.iter().any(|x| x.id == a)) {
            self.accent = accents.first().map(|a| a.id);
        }
        self.reconcile_voice();
    }

    fn reconcile_voice(&mut self) {
        let candidates = self.candidates();
        if !self
            .voice
            .is_some_and(|v| candidates.iter().any(|x| x.id == v))
        {
            self.voice = candidates.first().map(|v| v.id);
        }
    }
}
