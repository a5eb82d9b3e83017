//! Static studio catalog: languages, accents, speech styles, and voices.
//!
//! All tables are immutable and ordered; filters and selectors preserve
//! catalog order everywhere. The first speech type is the designated
//! default style.

use voice_studio_domain::{
    Accent, Language, SpeechType, SpeechTypeId, Voice, VoiceGender, VoiceId,
};

pub const LANGUAGES: &[Language] = &[
    Language::new("en", "English"),
    Language::new("es", "Spanish"),
    Language::new("fr", "French"),
];

pub const ACCENTS: &[Accent] = &[
    Accent::new("us", "United States", "en"),
    Accent::new("gb", "Great Britain", "en"),
    Accent::new("es", "Spain", "es"),
    Accent::new("mx", "Mexico", "es"),
    Accent::new("fr", "France", "fr"),
    Accent::new("ca", "Canada", "fr"),
];

pub const SPEECH_TYPES: &[SpeechType] = &[
    SpeechType::new("narration", "Narration"),
    SpeechType::new("commercial", "Commercial"),
    SpeechType::new("conversational", "Conversational"),
    SpeechType::new("news", "News Anchor"),
    SpeechType::new("assistant", "AI Assistant"),
];

pub const VOICES: &[Voice] = &[
    Voice::new(
        "Zephyr",
        "Zephyr",
        VoiceGender::Male,
        "A warm, friendly, and approachable voice.",
        &["en-us", "conversational", "narration", "assistant"],
        "Hello, this is Zephyr. How can I help you today?",
    ),
    Voice::new(
        "Kore",
        "Kore",
        VoiceGender::Female,
        "A clear, crisp, and professional voice.",
        &["en-us", "en-gb", "news", "commercial", "narration"],
        "This is Kore, bringing you the latest updates.",
    ),
    Voice::new(
        "Puck",
        "Puck",
        VoiceGender::Male,
        "An energetic and youthful voice, full of character.",
        &["en-us", "commercial", "conversational"],
        "Hey there! Puck here, ready for an adventure!",
    ),
    Voice::new(
        "Charon",
        "Charon",
        VoiceGender::Male,
        "A deep, authoritative, and cinematic voice.",
        &["en-us", "en-gb", "narration", "commercial"],
        "I am Charon. Prepare for a journey into sound.",
    ),
    Voice::new(
        "Fenrir",
        "Fenrir",
        VoiceGender::Male,
        "A powerful and resonant voice.",
        &["en-us", "narration", "commercial"],
        "Fenrir speaking. Let my voice guide you.",
    ),
    Voice::new(
        "es-voice-1",
        "Mateo",
        VoiceGender::Male,
        "A warm and friendly Spanish voice.",
        &["es-es", "es-mx", "narration", "conversational"],
        "Hola, soy Mateo. \u{bf}En qu\u{e9} puedo ayudarte hoy?",
    ),
    Voice::new(
        "fr-voice-1",
        "Chlo\u{e9}",
        VoiceGender::Female,
        "An elegant and clear French voice.",
        &["fr-fr", "fr-ca", "commercial", "narration"],
        "Bonjour, je suis Chlo\u{e9}. Bienvenue dans notre studio.",
    ),
];

/// Look up a voice by identifier.
pub fn voice(id: VoiceId) -> Option<&'static Voice> {
    VOICES.iter().find(|v| v.id == id)
}

/// Look up a speech type by its raw identifier string.
///
/// Used to validate identifiers coming back from the classification call.
pub fn speech_type(id: &str) -> Option<&'static SpeechType> {
    SPEECH_TYPES.iter().find(|t| t.id.as_str() == id)
}

/// The fallback speech style (first catalog entry).
pub fn default_speech_type() -> &'static SpeechType {
    &SPEECH_TYPES[0]
}

/// Identifiers of every speech style, in catalog order.
pub fn speech_type_ids() -> impl Iterator<Item = SpeechTypeId> {
    SPEECH_TYPES.iter().map(|t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_accent_belongs_to_a_catalog_language() {
        for accent in ACCENTS {
            assert!(
                LANGUAGES.iter().any(|l| l.id == accent.language),
                "accent {} references unknown language {}",
                accent.id,
                accent.language
            );
        }
    }

    #[test]
    fn every_voice_carries_at_least_one_speech_type_tag() {
        for voice in VOICES {
            assert!(
                SPEECH_TYPES.iter().any(|t| voice.has_tag(t.id.as_str())),
                "voice {} has no speech-type tag",
                voice.id
            );
        }
    }

    #[test]
    fn default_speech_type_is_narration() {
        assert_eq!(default_speech_type().id.as_str(), "narration");
    }

    #[test]
    fn voice_lookup_roundtrips() {
        let kore = voice(VoiceId::new("Kore")).expect("Kore in catalog");
        assert_eq!(kore.name, "Kore");
        assert!(voice(VoiceId::new("nope")).is_none());
    }
}
