//! Core types for analysis results.

use serde::{Deserialize, Serialize};

/// Summary used when at least one finding was emitted.
pub const SUMMARY_SLOP: &str = "AI slop detected. Revise the text to sound more human and natural.";

/// Summary used when the text came back clean.
pub const SUMMARY_CLEAN: &str = "No obvious AI slop detected. Text appears human-like.";

/// Severity levels for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// The fixed set of issue categories the analyzer can report.
///
/// Declaration order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    #[serde(rename = "cliche_phrases")]
    ClichePhrases,
    #[serde(rename = "repetitive_starts")]
    RepetitiveStarts,
    #[serde(rename = "overly_formal")]
    OverlyFormal,
    #[serde(rename = "list_heavy")]
    ListHeavy,
    #[serde(rename = "long_sentences")]
    LongSentences,
    #[serde(rename = "low_density")]
    LowDensity,
    #[serde(rename = "generic_language")]
    GenericLanguage,
    #[serde(rename = "hedging")]
    Hedging,
    #[serde(rename = "word_complexity")]
    WordComplexity,
}

impl FindingKind {
    /// Every kind, in pipeline order.
    pub const ALL: [FindingKind; 9] = [
        FindingKind::ClichePhrases,
        FindingKind::RepetitiveStarts,
        FindingKind::OverlyFormal,
        FindingKind::ListHeavy,
        FindingKind::LongSentences,
        FindingKind::LowDensity,
        FindingKind::GenericLanguage,
        FindingKind::Hedging,
        FindingKind::WordComplexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::ClichePhrases => "cliche_phrases",
            FindingKind::RepetitiveStarts => "repetitive_starts",
            FindingKind::OverlyFormal => "overly_formal",
            FindingKind::ListHeavy => "list_heavy",
            FindingKind::LongSentences => "long_sentences",
            FindingKind::LowDensity => "low_density",
            FindingKind::GenericLanguage => "generic_language",
            FindingKind::Hedging => "hedging",
            FindingKind::WordComplexity => "word_complexity",
        }
    }

    /// Category heading used in tool-protocol output.
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::ClichePhrases => "Tone",
            FindingKind::RepetitiveStarts => "Repetition",
            FindingKind::OverlyFormal => "Formality",
            FindingKind::ListHeavy => "Structure",
            FindingKind::LongSentences => "Verbosity",
            FindingKind::LowDensity => "Density",
            FindingKind::GenericLanguage => "Bias",
            FindingKind::Hedging => "Hedging",
            FindingKind::WordComplexity => "Word Complexity",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::WordComplexity => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected issue category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
    /// The matched items (phrases, words, or rendered metrics).
    #[serde(default)]
    pub matches: Vec<String>,
    pub severity: Severity,
}

impl Finding {
    pub fn new(kind: FindingKind, message: String, matches: Vec<String>) -> Self {
        Self {
            kind,
            message,
            matches,
            severity: kind.severity(),
        }
    }
}

/// Whole-text measurements gathered while analyzing.
///
/// Ratios are `None` when their denominator is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub avg_sentence_length: Option<f64>,
    pub lexical_density: Option<f64>,
    pub bullet_lines: usize,
    pub numbered_lines: usize,
}

/// Output of a single analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub has_slop: bool,
    pub findings: Vec<Finding>,
    pub summary: String,
    pub stats: TextStats,
}

impl AnalysisResult {
    /// Assemble a result; `has_slop` and `summary` follow from `findings`.
    pub fn new(findings: Vec<Finding>, stats: TextStats) -> Self {
        let has_slop = !findings.is_empty();
        let summary = if has_slop { SUMMARY_SLOP } else { SUMMARY_CLEAN };
        Self {
            has_slop,
            findings,
            summary: summary.to_string(),
            stats,
        }
    }

    /// Look up the finding of a given kind, if emitted.
    pub fn finding(&self, kind: FindingKind) -> Option<&Finding> {
        self.findings.iter().find(|f| f.kind == kind)
    }

    /// Finding messages in pipeline order.
    pub fn messages(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.message.clone()).collect()
    }
}
