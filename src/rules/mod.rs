//! Rule tables and thresholds driving the analyzer.
//!
//! A [`RuleSet`] is built once (from the built-in defaults or a YAML file)
//! and never mutated afterwards. Analyzers hold it behind an `Arc`, so one
//! set can serve any number of concurrent callers.

mod config;
mod defaults;

pub use config::{discover_config, Config, DEFAULT_CONFIG_NAMES, DEFAULT_TEMPLATE};
pub use defaults::COMPLEX_WORDS;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detect::FindingKind;

static STANDARD: Lazy<Arc<RuleSet>> = Lazy::new(|| Arc::new(RuleSet::default()));

/// A wordy term and the plain word that should replace it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComplexWord {
    pub complex: String,
    pub simple: String,
}

/// Per-check switches. Every check is on unless turned off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Checks {
    pub cliche_phrases: bool,
    pub repetitive_starts: bool,
    pub overly_formal: bool,
    pub list_heavy: bool,
    pub long_sentences: bool,
    pub low_density: bool,
    pub generic_language: bool,
    pub hedging: bool,
    pub word_complexity: bool,
}

impl Default for Checks {
    fn default() -> Self {
        Self {
            cliche_phrases: true,
            repetitive_starts: true,
            overly_formal: true,
            list_heavy: true,
            long_sentences: true,
            low_density: true,
            generic_language: true,
            hedging: true,
            word_complexity: true,
        }
    }
}

impl Checks {
    pub fn is_enabled(&self, kind: FindingKind) -> bool {
        match kind {
            FindingKind::ClichePhrases => self.cliche_phrases,
            FindingKind::RepetitiveStarts => self.repetitive_starts,
            FindingKind::OverlyFormal => self.overly_formal,
            FindingKind::ListHeavy => self.list_heavy,
            FindingKind::LongSentences => self.long_sentences,
            FindingKind::LowDensity => self.low_density,
            FindingKind::GenericLanguage => self.generic_language,
            FindingKind::Hedging => self.hedging,
            FindingKind::WordComplexity => self.word_complexity,
        }
    }
}

/// Phrase lists and thresholds for one analyzer.
///
/// Missing fields in a YAML file fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RuleSet {
    pub cliche_phrases: Vec<String>,
    pub formality_markers: Vec<String>,
    pub generic_phrases: Vec<String>,
    pub hedging_words: Vec<String>,
    pub complex_words: Vec<ComplexWord>,

    /// A start word must appear this many times to count as repetitive
    pub repetition_min_count: usize,
    /// Start words shorter than this are ignored (0 keeps everything)
    pub min_start_word_len: usize,
    pub formality_min_matches: usize,
    /// Average words per sentence above which sentences count as long
    pub avg_sentence_length_max: f64,
    /// Unique/total word ratio below which text counts as padded
    pub min_lexical_density: f64,
    /// Bullet or numbered lines allowed before the text counts as list-heavy
    pub max_list_lines: usize,
    pub generic_min_matches: usize,
    pub hedging_min_matches: usize,
    pub complex_min_matches: usize,

    pub checks: Checks,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            cliche_phrases: owned(defaults::CLICHE_PHRASES),
            formality_markers: owned(defaults::FORMALITY_MARKERS),
            generic_phrases: owned(defaults::GENERIC_PHRASES),
            hedging_words: owned(defaults::HEDGING_WORDS),
            complex_words: defaults::COMPLEX_WORDS
                .entries()
                .map(|(complex, simple)| ComplexWord {
                    complex: complex.to_string(),
                    simple: simple.to_string(),
                })
                .collect(),
            repetition_min_count: defaults::REPETITION_MIN_COUNT,
            min_start_word_len: defaults::MIN_START_WORD_LEN,
            formality_min_matches: defaults::FORMALITY_MIN_MATCHES,
            avg_sentence_length_max: defaults::AVG_SENTENCE_LENGTH_MAX,
            min_lexical_density: defaults::MIN_LEXICAL_DENSITY,
            max_list_lines: defaults::MAX_LIST_LINES,
            generic_min_matches: defaults::GENERIC_MIN_MATCHES,
            hedging_min_matches: defaults::HEDGING_MIN_MATCHES,
            complex_min_matches: defaults::COMPLEX_MIN_MATCHES,
            checks: Checks::default(),
        }
    }
}

impl RuleSet {
    /// The process-wide built-in rule set, built on first use.
    pub fn standard() -> Arc<RuleSet> {
        Arc::clone(&STANDARD)
    }

    /// Parse a rule set from a YAML file.
    pub fn parse_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse a rule set from YAML and normalize it.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let rules: RuleSet = serde_yaml::from_str(content)?;
        Ok(rules.normalized())
    }

    /// Lowercase and trim every entry, dropping repeats.
    ///
    /// Matching runs against lowercased text, so an uppercase entry would
    /// never match.
    pub fn normalized(mut self) -> Self {
        self.cliche_phrases = normalize_list(self.cliche_phrases);
        self.formality_markers = normalize_list(self.formality_markers);
        self.generic_phrases = normalize_list(self.generic_phrases);
        self.hedging_words = normalize_list(self.hedging_words);

        let mut seen = std::collections::HashSet::new();
        self.complex_words = self
            .complex_words
            .into_iter()
            .map(|w| ComplexWord {
                complex: w.complex.trim().to_lowercase(),
                simple: w.simple.trim().to_string(),
            })
            .filter(|w| seen.insert(w.complex.clone()))
            .collect();
        self
    }
}

fn normalize_list(list: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Problems that make a rule set unusable.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("{list} contains an empty entry")]
    EmptyEntry { list: &'static str },

    #[error("{name} must be at least 1, a zero threshold flags every text")]
    ZeroThreshold { name: &'static str },

    #[error("min_lexical_density must be between 0 and 1, got {0}")]
    DensityOutOfRange(f64),

    #[error("avg_sentence_length_max must be a positive number, got {0}")]
    InvalidSentenceLength(f64),
}

/// Validate a rule set for correctness.
pub fn validate(rules: &RuleSet) -> Result<(), RuleError> {
    let lists: [(&'static str, &[String]); 4] = [
        ("cliche_phrases", &rules.cliche_phrases),
        ("formality_markers", &rules.formality_markers),
        ("generic_phrases", &rules.generic_phrases),
        ("hedging_words", &rules.hedging_words),
    ];
    for (list, entries) in lists {
        if entries.iter().any(|e| e.trim().is_empty()) {
            return Err(RuleError::EmptyEntry { list });
        }
    }
    if rules.complex_words.iter().any(|w| w.complex.trim().is_empty()) {
        return Err(RuleError::EmptyEntry {
            list: "complex_words",
        });
    }

    let thresholds = [
        ("repetition_min_count", rules.repetition_min_count),
        ("formality_min_matches", rules.formality_min_matches),
        ("generic_min_matches", rules.generic_min_matches),
        ("hedging_min_matches", rules.hedging_min_matches),
        ("complex_min_matches", rules.complex_min_matches),
    ];
    for (name, value) in thresholds {
        if value == 0 {
            return Err(RuleError::ZeroThreshold { name });
        }
    }

    if !(0.0..=1.0).contains(&rules.min_lexical_density) {
        return Err(RuleError::DensityOutOfRange(rules.min_lexical_density));
    }
    if !rules.avg_sentence_length_max.is_finite() || rules.avg_sentence_length_max <= 0.0 {
        return Err(RuleError::InvalidSentenceLength(
            rules.avg_sentence_length_max,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let rules = RuleSet::default();
        assert!(validate(&rules).is_ok());
        assert_eq!(rules.repetition_min_count, 3);
        assert_eq!(rules.formality_min_matches, 2);
        assert_eq!(rules.avg_sentence_length_max, 25.0);
        assert_eq!(rules.min_lexical_density, 0.40);
        assert_eq!(rules.max_list_lines, 5);
        assert_eq!(rules.generic_min_matches, 3);
        assert_eq!(rules.complex_words[0].complex, "utilize");
        assert_eq!(rules.complex_words[0].simple, "use");
    }

    #[test]
    fn test_default_phrase_lists_do_not_overlap() {
        let rules = RuleSet::default();
        for word in &rules.complex_words {
            assert!(
                !rules.cliche_phrases.contains(&word.complex),
                "{} is in both lists",
                word.complex
            );
        }
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(Arc::ptr_eq(&RuleSet::standard(), &RuleSet::standard()));
        assert_eq!(*RuleSet::standard(), RuleSet::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
formality_min_matches: 4
cliche_phrases:
  - "Synergy"
  - "synergy "
  - "moving forward"
checks:
  hedging: false
"#;
        let rules = RuleSet::from_yaml(yaml).unwrap();
        assert_eq!(rules.formality_min_matches, 4);
        assert_eq!(rules.cliche_phrases, vec!["synergy", "moving forward"]);
        assert_eq!(rules.repetition_min_count, 3);
        assert_eq!(rules.formality_markers, RuleSet::default().formality_markers);
        assert!(!rules.checks.hedging);
        assert!(rules.checks.cliche_phrases);
    }

    #[test]
    fn test_parse_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("rules.yaml");
        std::fs::write(&path, "max_list_lines: 12\nhedging_words: [\"Kind Of\"]\n").unwrap();

        let rules = RuleSet::parse_file(&path).unwrap();
        assert_eq!(rules.max_list_lines, 12);
        assert_eq!(rules.hedging_words, vec!["kind of"]);
        assert!(validate(&rules).is_ok());

        assert!(RuleSet::parse_file(temp.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let rules = RuleSet {
            repetition_min_count: 0,
            ..Default::default()
        };
        assert_eq!(
            validate(&rules),
            Err(RuleError::ZeroThreshold {
                name: "repetition_min_count"
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_density_and_length() {
        let rules = RuleSet {
            min_lexical_density: 1.5,
            ..Default::default()
        };
        assert!(matches!(validate(&rules), Err(RuleError::DensityOutOfRange(_))));

        let rules = RuleSet {
            avg_sentence_length_max: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            validate(&rules),
            Err(RuleError::InvalidSentenceLength(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_entry() {
        let mut rules = RuleSet::default();
        rules.generic_phrases.push("  ".to_string());
        assert_eq!(
            validate(&rules),
            Err(RuleError::EmptyEntry {
                list: "generic_phrases"
            })
        );
    }
}
