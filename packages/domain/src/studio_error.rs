//! Unified error for all studio operations.
use thiserror::Error;

/// Top-level error covering configuration, synthesis, and playback.
///
/// `Classification` is always recovered silently by callers; the other
/// variants reset the affected playback channel and surface a message.
#[derive(Debug, Clone, Error)]
pub enum StudioError {
    /// Missing or unusable credentials. Fatal to any remote call.
    #[error("configuration: {0}")]
    Configuration(String),
    /// Synthesis call failed (network, empty or malformed response).
    #[error("synthesis: {0}")]
    Synthesis(String),
    /// Speech-type classification failed. Never surfaced to the user.
    #[error("classification: {0}")]
    Classification(String),
    /// Returned audio payload could not be decoded.
    #[error("audio decode: {0}")]
    Decode(String),
    /// Audio device or sink failure.
    #[error("playback: {0}")]
    Playback(String),
}
