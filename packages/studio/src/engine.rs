//! Studio engine: the facade tying catalog, selection, detection, and
//! playback coordination together.

use crate::catalog;
use crate::client::{ClientConfig, GeminiClient, SpeechService};
use crate::coordinator::Coordinator;
use crate::detect::TypeDetector;
use crate::playback::{AudioOutput, RodioOutput};
use crate::selection::{Selection, accents_for};
use crate::state::ChannelStatus;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use voice_studio_domain::{
    Accent, AccentId, LanguageId, SpeechTypeId, StudioError, Voice, VoiceId,
};

/// Point-in-time view of everything a frontend renders.
#[derive(Debug, Clone, Serialize)]
pub struct StudioSnapshot {
    pub language: LanguageId,
    pub accent: Option<AccentId>,
    pub speech_type: SpeechTypeId,
    pub voice: Option<VoiceId>,
    pub text: String,
    pub main_status: ChannelStatus,
    pub preview_voice: Option<VoiceId>,
    pub preview_status: ChannelStatus,
    pub error: Option<&'static str>,
}

/// The studio engine.
///
/// Selection mutations are synchronous; `preview` and `generate` drive the
/// playback coordinator and may be spawned for fire-and-forget use.
pub struct Studio {
    selection: Arc<Mutex<Selection>>,
    coordinator: Coordinator,
    detector: TypeDetector,
}

impl Studio {
    pub fn builder() -> StudioBuilder {
        StudioBuilder::default()
    }

    // -- selection -------------------------------------------------------

    pub fn set_language(&self, language: LanguageId) {
        self.selection.lock().set_language(language);
    }

    pub fn set_accent(&self, accent: AccentId) {
        self.selection.lock().set_accent(accent);
    }

    pub fn set_speech_type(&self, speech_type: SpeechTypeId) {
        self.selection.lock().set_speech_type(speech_type);
    }

    /// Pick a voice out of the current candidates. Returns `false` when
    /// the voice is not a candidate.
    pub fn select_voice(&self, voice: VoiceId) -> bool {
        self.selection.lock().select_voice(voice)
    }

    /// Replace the text to synthesize and (re)arm the speech-type
    /// auto-detection timer.
    pub fn set_text(&self, text: impl Into<String>) {
        self.selection.lock().set_text(text);
        self.detector.text_changed();
    }

    /// Accents selectable under the current language, in catalog order.
    pub fn accents(&self) -> Vec<&'static Accent> {
        accents_for(self.selection.lock().language())
    }

    /// Voice candidates for the current selection, in catalog order.
    pub fn voices(&self) -> Vec<&'static Voice> {
        self.selection.lock().candidates()
    }

    // -- playback --------------------------------------------------------

    /// Preview a catalog voice with its sample text (toggles off when that
    /// voice is already audibly previewing).
    pub async fn preview(&self, voice: VoiceId) {
        match catalog::voice(voice) {
            Some(voice) => self.coordinator.start_preview(voice).await,
            None => warn!(voice = voice.as_str(), "preview of unknown voice ignored"),
        }
    }

    /// Synthesize and play the current text with the selected voice.
    pub async fn generate(&self) {
        let (text, voice) = {
            let selection = self.selection.lock();
            (selection.text().to_owned(), selection.voice())
        };
        self.coordinator.start_main(&text, voice).await;
    }

    /// Stop all playback.
    pub fn stop(&self) {
        self.coordinator.stop_all();
    }

    pub fn snapshot(&self) -> StudioSnapshot {
        let (language, accent, speech_type, voice, text) = {
            let selection = self.selection.lock();
            (
                selection.language(),
                selection.accent(),
                selection.speech_type(),
                selection.voice(),
                selection.text().to_owned(),
            )
        };
        let preview_voice = self.coordinator.preview_voice();
        let preview_status = preview_voice
            .map(|v| self.coordinator.preview_status(v))
            .unwrap_or(ChannelStatus::Idle);
        StudioSnapshot {
            language,
            accent,
            speech_type,
            voice,
            text,
            main_status: self.coordinator.main_status(),
            preview_voice,
            preview_status,
            error: self.coordinator.error(),
        }
    }
}

/// Builder for configuring the studio engine.
#[derive(Default)]
pub struct StudioBuilder {
    api_key: Option<String>,
    config: Option<ClientConfig>,
    service: Option<Arc<dyn SpeechService>>,
    output: Option<Arc<dyn AudioOutput>>,
}

impl StudioBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Substitute the remote speech service (used by tests and alternative
    /// backends). Overrides `api_key`/`client_config`.
    pub fn speech_service(mut self, service: Arc<dyn SpeechService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Substitute the audio output (used by tests and headless hosts).
    pub fn audio_output(mut self, output: Arc<dyn AudioOutput>) -> Self {
        self.output = Some(output);
        self
    }

    /// Build the engine. Without an explicit service this constructs a
    /// [`GeminiClient`], reading the API key from the environment when
    /// none was given; without an explicit output it opens the default
    /// audio device.
    pub fn build(self) -> Result<Studio, StudioError> {
        let service: Arc<dyn SpeechService> = match self.service {
            Some(service) => service,
            None => {
                let config = self.config.unwrap_or_default();
                let client = match self.api_key {
                    Some(key) => GeminiClient::new_with_config(key, config)?,
                    None => GeminiClient::from_env_with_config(config)?,
                };
                Arc::new(client)
            }
        };
        let output: Arc<dyn AudioOutput> = match self.output {
            Some(output) => output,
            None => Arc::new(RodioOutput::open_default()?),
        };

        let selection = Arc::new(Mutex::new(Selection::from_catalog_defaults()));
        Ok(Studio {
            coordinator: Coordinator::new(Arc::clone(&service), output),
            detector: TypeDetector::new(service, Arc::clone(&selection)),
            selection,
        })
    }
}
