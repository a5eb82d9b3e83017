//! Opaque voice identifier (catalog slug).
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VoiceId(pub &'static str);

impl VoiceId {
    /// Create a new voice identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Get the underlying identifier string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
