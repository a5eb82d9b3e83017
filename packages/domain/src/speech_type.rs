//! Speech style catalog entry (narration, commercial, ...).
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpeechTypeId(pub &'static str);

impl SpeechTypeId {
    /// Create a new speech-type identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Get the underlying identifier string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SpeechTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A speech style offered by the studio catalog. Immutable.
///
/// The first entry of the catalog is the designated default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeechType {
    pub id: SpeechTypeId,
    pub name: &'static str,
}

impl SpeechType {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id: SpeechTypeId::new(id),
            name,
        }
    }
}
