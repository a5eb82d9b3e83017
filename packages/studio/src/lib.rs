//! # Voice Studio
//!
//! Text-to-speech studio engine for the Gemini speech API: catalog-driven
//! voice selection, debounced speech-style auto-detection, and coordinated
//! playback with exactly one audible source at a time across the preview
//! and main channels.
//!
//! # Usage
//!
//! ```no_run
//! use voice_studio::Studio;
//! use voice_studio_domain::VoiceId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voice_studio_domain::StudioError> {
//!     let studio = Studio::builder().build()?; // key from GEMINI_API_KEY
//!
//!     studio.set_text("A quiet harbor town wakes slowly under the first light of day.");
//!     studio.preview(VoiceId::new("Charon")).await;
//!     studio.generate().await;
//!
//!     println!("{:?}", studio.snapshot());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod coordinator;
pub mod detect;
pub mod endpoints;
pub mod engine;
pub mod playback;
pub mod selection;
pub mod state;

pub use client::{ClientConfig, GeminiClient, SpeechService};
pub use coordinator::{Coordinator, GENERATION_FAILED, PREVIEW_FAILED};
pub use detect::TypeDetector;
pub use endpoints::synthesize::AudioPayload;
pub use engine::{Studio, StudioBuilder, StudioSnapshot};
pub use playback::{AudioOutput, Playback, PlaybackHandle, RodioOutput};
pub use selection::{Selection, accents_for, voices_for};
pub use state::{ActiveSlot, ChannelPhase, ChannelStatus};

pub use voice_studio_domain::{
    Accent, AccentId, Language, LanguageId, SpeechType, SpeechTypeId, StudioError, Voice,
    VoiceGender, VoiceId,
};
