use std::fs;
use std::path::Path;

use tracing::debug;

use crate::scanner::ScanError;
use crate::types::Language;

/// List the languages under `root`.
///
/// Every immediate subdirectory of `root` is a language; plain files at the
/// root are ignored and the listing is not recursive. Symlinks to
/// directories count as directories. Languages are returned sorted by name.
pub fn discover_languages(root: &Path) -> Result<Vec<Language>, ScanError> {
    let list_error = |source| ScanError::ListRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut languages = Vec::new();
    for entry in fs::read_dir(root).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if !entry.path().is_dir() {
            continue;
        }
        let language = Language::new(entry.file_name().to_string_lossy().into_owned());
        debug!(%language, "discovered language");
        languages.push(language);
    }

    languages.sort();
    Ok(languages)
}
