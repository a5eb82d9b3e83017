//! End-to-end behavior of the studio facade with substituted seams.

mod common;

use common::{MockOutput, MockService, drain, payload};
use std::time::Duration;
use tokio::time::advance;
use voice_studio::{
    AccentId, ChannelStatus, LanguageId, SpeechTypeId, Studio, StudioBuilder, VoiceId,
};

const LONG_TEXT: &str = "A quiet harbor town wakes slowly under the first light of day.";

fn builder() -> (StudioBuilder, std::sync::Arc<MockService>, std::sync::Arc<MockOutput>) {
    let service = MockService::new();
    let output = MockOutput::new();
    let builder = Studio::builder()
        .speech_service(service.clone())
        .audio_output(output.clone());
    (builder, service, output)
}

#[tokio::test]
async fn defaults_generate_and_stop_roundtrip() {
    let (builder, service, output) = builder();
    let studio = builder.build().expect("build studio");

    let snapshot = studio.snapshot();
    assert_eq!(snapshot.language.as_str(), "en");
    assert_eq!(snapshot.voice.map(|v| v.as_str()), Some("Zephyr"));
    assert_eq!(snapshot.main_status, ChannelStatus::Idle);

    service.push_ready(Ok(payload()));
    studio.generate().await;
    assert_eq!(studio.snapshot().main_status, ChannelStatus::Playing);
    assert_eq!(output.audible_count(), 1);

    studio.stop();
    let snapshot = studio.snapshot();
    assert_eq!(snapshot.main_status, ChannelStatus::Idle);
    assert_eq!(output.audible_count(), 0);
}

#[tokio::test]
async fn snapshot_tracks_the_previewing_voice() {
    let (builder, service, _output) = builder();
    let studio = builder.build().expect("build studio");

    service.push_ready(Ok(payload()));
    studio.preview(VoiceId::new("Kore")).await;

    let snapshot = studio.snapshot();
    assert_eq!(snapshot.preview_voice.map(|v| v.as_str()), Some("Kore"));
    assert_eq!(snapshot.preview_status, ChannelStatus::Playing);
    assert_eq!(snapshot.main_status, ChannelStatus::Idle);
}

#[tokio::test]
async fn preview_of_an_unknown_voice_is_ignored() {
    let (builder, service, _output) = builder();
    let studio = builder.build().expect("build studio");

    studio.preview(VoiceId::new("NotInCatalog")).await;
    assert_eq!(service.synth_count(), 0);
    assert_eq!(studio.snapshot().preview_voice, None);
}

#[tokio::test]
async fn generate_is_inert_without_a_candidate_voice() {
    let (builder, service, _output) = builder();
    let studio = builder.build().expect("build studio");

    // French offers no assistant-style voices, so the voice clears.
    studio.set_language(LanguageId::new("fr"));
    studio.set_speech_type(SpeechTypeId::new("assistant"));
    assert_eq!(studio.snapshot().voice, None);

    studio.generate().await;
    assert_eq!(service.synth_count(), 0);
    assert_eq!(studio.snapshot().main_status, ChannelStatus::Idle);
}

#[tokio::test]
async fn selection_surfaces_follow_the_catalog() {
    let (builder, _service, _output) = builder();
    let studio = builder.build().expect("build studio");

    studio.set_language(LanguageId::new("es"));
    let accents: Vec<_> = studio.accents().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(accents, vec!["es", "mx"]);

    studio.set_accent(AccentId::new("mx"));
    let voices: Vec<_> = studio.voices().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(voices, vec!["es-voice-1"]);
    assert!(studio.select_voice(VoiceId::new("es-voice-1")));
    assert!(!studio.select_voice(VoiceId::new("Kore")));
}

#[tokio::test(start_paused = true)]
async fn typing_drives_speech_type_detection_through_the_facade() {
    let (builder, service, _output) = builder();
    let studio = builder.build().expect("build studio");
    service.set_classification(Ok("narration".into()));

    studio.set_text(LONG_TEXT);
    drain().await;
    advance(Duration::from_millis(1600)).await;
    drain().await;

    assert_eq!(service.classify_count(), 1);
    assert_eq!(service.classified_texts(), vec![LONG_TEXT.to_owned()]);
    assert_eq!(studio.snapshot().speech_type.as_str(), "narration");
}
