use std::fs;
use std::path::PathBuf;

use bon::Builder;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::scanner::{KeyCollection, ScanError, discover_languages, parse_document};
use crate::types::Language;

/// Scans a locales root into a [`KeyCollection`].
///
/// # Example
///
/// ```no_run
/// use i18n_coverage::Scanner;
///
/// let scanner = Scanner::builder().root("public/locales").build();
/// let collection = scanner.scan().unwrap();
/// println!("{} keys in total", collection.common().len());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(PathBuf, into))]
pub struct Scanner {
    /// Directory holding one subdirectory per language.
    root: PathBuf,

    /// Follow symlinked directories while walking a language tree.
    #[builder(default)]
    follow_links: bool,
}

impl Scanner {
    /// Create a scanner for `root` with default options.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::builder().root(root).build()
    }

    /// Discover languages, then read every file under each of them.
    ///
    /// Stops at the first listing, read or parse failure; nothing collected
    /// before the failure is returned.
    pub fn scan(&self) -> Result<KeyCollection, ScanError> {
        let languages = discover_languages(&self.root)?;
        let mut collection = KeyCollection::new(languages.clone());
        for language in &languages {
            self.scan_language(language, &mut collection)?;
        }
        Ok(collection)
    }

    fn scan_language(
        &self,
        language: &Language,
        collection: &mut KeyCollection,
    ) -> Result<(), ScanError> {
        let dir = self.root.join(language.as_str());
        let walker = WalkDir::new(&dir).follow_links(self.follow_links);

        for entry in walker {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: dir.clone(),
                source,
            })?;
            if !is_translation_file(&entry) {
                continue;
            }

            let path = entry.path();
            let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let document = parse_document(path, &content)?;
            debug!(%language, path = %path.display(), "scanned translation file");
            collection.add_document(language, path, document);
        }

        Ok(())
    }
}

/// Regular files, including symlinks that resolve to one.
fn is_translation_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
