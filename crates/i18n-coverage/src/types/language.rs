use std::fmt;

use serde::Serialize;

/// A language discovered as an immediate subdirectory of the locales root.
///
/// The name is the directory name as-is (e.g. `"en"`, `"pt-BR"`). It is not
/// validated against any locale registry.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a language from its directory name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The directory name of this language.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
