use std::fmt;

use serde::Serialize;

use crate::report::CoverageError;
use crate::scanner::KeyCollection;
use crate::types::Language;

/// Coverage of a single language against the common key set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCoverage {
    /// Language directory name.
    pub language: Language,
    /// Number of distinct keys defined by this language.
    pub keys: usize,
    /// Number of distinct keys across all languages.
    pub total: usize,
    /// Coverage rounded to the nearest whole percent.
    pub percent: u32,
    /// Keys other languages define but this one does not, sorted.
    pub missing: Vec<String>,
}

impl LanguageCoverage {
    /// Fraction of the common key set this language defines, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.keys as f64 / self.total as f64
    }

    /// Whether the language defines every common key.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Coverage of every language, in discovery order.
///
/// The [`fmt::Display`] implementation renders the plain report:
///
/// ```text
/// Coverage:
/// en	100%
/// fr	50%
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoverageReport {
    languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    /// Compute `|keys(L)| / |common|` for every language of `collection`.
    ///
    /// Fails when the common set is empty, which covers both an empty
    /// locales root and a tree whose files define no keys at all.
    pub fn from_collection(collection: &KeyCollection) -> Result<Self, CoverageError> {
        let common = collection.common();
        if common.is_empty() {
            return Err(CoverageError::NoKeys {
                languages: collection.languages().len(),
            });
        }

        let total = common.len();
        let languages = collection
            .iter()
            .map(|(language, keys)| LanguageCoverage {
                language: language.clone(),
                keys: keys.len(),
                total,
                percent: round_percent(keys.len(), total),
                missing: common.missing_from(keys),
            })
            .collect();

        Ok(Self { languages })
    }

    /// Per-language coverage in discovery order.
    pub fn languages(&self) -> &[LanguageCoverage] {
        &self.languages
    }

    /// Whether every language defines every common key.
    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(LanguageCoverage::is_complete)
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coverage:")?;
        for coverage in &self.languages {
            writeln!(f, "{}\t{}%", coverage.language, coverage.percent)?;
        }
        Ok(())
    }
}

/// `part / total` as a whole percentage, rounding halves to even.
///
/// The ratio is scaled after dividing, so `29 / 200` lands just below 14.5
/// and prints as 14. `total` must be non-zero.
pub fn round_percent(part: usize, total: usize) -> u32 {
    (part as f64 / total as f64 * 100.0).round_ties_even() as u32
}
