use std::collections::BTreeMap;
use std::path::Path;

use crate::scanner::{Document, ScanWarning};
use crate::types::{KeySet, Language};

/// The keys collected from a locales tree.
///
/// Holds one [`KeySet`] per language plus the common set, which is the union
/// of all of them. Every key recorded for a language is recorded in the
/// common set at the same time, so each language set is always a subset of
/// the common set.
#[derive(Debug, Clone, Default)]
pub struct KeyCollection {
    /// Languages in discovery order.
    languages: Vec<Language>,
    keys: BTreeMap<Language, KeySet>,
    common: KeySet,
    files_scanned: usize,
    warnings: Vec<ScanWarning>,
}

impl KeyCollection {
    /// Create a collection with an empty key set for each language.
    pub fn new(languages: Vec<Language>) -> Self {
        let keys = languages
            .iter()
            .map(|language| (language.clone(), KeySet::new()))
            .collect();
        Self {
            languages,
            keys,
            ..Self::default()
        }
    }

    /// Record the document read from `path` under `language`.
    ///
    /// Object documents contribute their top-level keys. Other documents
    /// contribute nothing and are remembered as a warning.
    pub fn add_document(&mut self, language: &Language, path: &Path, document: Document) {
        self.files_scanned += 1;
        match document {
            Document::Object(keys) => self.add_keys(language, keys),
            Document::Other(kind) => self.warnings.push(ScanWarning::NonObjectDocument {
                path: path.to_path_buf(),
                kind,
            }),
        }
    }

    /// Add keys to `language` and to the common set.
    ///
    /// A language not passed to [`KeyCollection::new`] is appended to the
    /// language list.
    pub fn add_keys<I, S>(&mut self, language: &Language, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.keys.contains_key(language) {
            self.languages.push(language.clone());
        }
        let set = self.keys.entry(language.clone()).or_default();
        for key in keys {
            let key = key.into();
            self.common.insert(key.clone());
            set.insert(key);
        }
    }

    /// Languages in discovery order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The keys collected for `language`.
    pub fn keys(&self, language: &Language) -> Option<&KeySet> {
        self.keys.get(language)
    }

    /// The union of the keys of every language.
    pub fn common(&self) -> &KeySet {
        &self.common
    }

    /// Iterate languages and their key sets in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&Language, &KeySet)> {
        self.languages
            .iter()
            .filter_map(|language| self.keys.get(language).map(|keys| (language, keys)))
    }

    /// Number of translation files read.
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Non-fatal conditions found while scanning.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }
}
