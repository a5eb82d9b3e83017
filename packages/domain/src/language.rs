//! Language catalog entry (e.g. "en" / English).
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageId(pub &'static str);

impl LanguageId {
    /// Create a new language identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Get the underlying identifier string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A language offered by the studio catalog. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub id: LanguageId,
    pub name: &'static str,
}

impl Language {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id: LanguageId::new(id),
            name,
        }
    }
}
