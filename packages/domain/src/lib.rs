//! # Voice Studio Domain
//!
//! Shared domain objects and types for the voice-studio engine.
//!
//! This crate contains the immutable catalog entity types and the unified
//! error type that are shared between the studio engine and any frontend
//! built on top of it.

pub mod accent;
pub mod language;
pub mod speech_type;
pub mod studio_error;
pub mod voice;
pub mod voice_id;

pub use accent::{Accent, AccentId};
pub use language::{Language, LanguageId};
pub use speech_type::{SpeechType, SpeechTypeId};
pub use studio_error::StudioError;
pub use voice::{Voice, VoiceGender};
pub use voice_id::VoiceId;
