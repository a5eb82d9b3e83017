//! Accent / region catalog entry, owned by a language.
use crate::language::LanguageId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccentId(pub &'static str);

impl AccentId {
    /// Create a new accent identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Get the underlying identifier string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AccentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An accent offered by the studio catalog. Immutable.
///
/// `language` is the owning language; an accent is only selectable while
/// its language is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub id: AccentId,
    pub name: &'static str,
    pub language: LanguageId,
}

impl Accent {
    pub const fn new(id: &'static str, name: &'static str, language: &'static str) -> Self {
        Self {
            id: AccentId::new(id),
            name,
            language: LanguageId::new(language),
        }
    }
}
