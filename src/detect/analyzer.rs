//! The slop analyzer: runs every check over a text in a fixed order.

use std::sync::Arc;

use crate::rules::RuleSet;

use super::{phrases, stats, structure, text};
use super::{AnalysisResult, Finding, FindingKind};

/// Stateless text analyzer bound to one immutable rule set.
///
/// Cloning is cheap and clones share the same rules.
#[derive(Debug, Clone)]
pub struct SlopAnalyzer {
    rules: Arc<RuleSet>,
}

impl Default for SlopAnalyzer {
    fn default() -> Self {
        Self::standard()
    }
}

impl SlopAnalyzer {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Analyzer over the built-in rule set.
    pub fn standard() -> Self {
        Self::new(RuleSet::standard())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Analyze `raw` and return its findings in pipeline order.
    ///
    /// Defined for every input: empty or whitespace-only text yields a clean
    /// result. Rejecting empty input is the caller's job.
    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        let rules = self.rules.as_ref();
        let lower = raw.to_lowercase();
        let sentences = text::split_sentences(raw);
        let starts = text::sentence_starts(&sentences);
        let stats = stats::measure(raw, sentences.len());

        let mut findings: Vec<Finding> = Vec::new();
        for kind in FindingKind::ALL {
            if !rules.checks.is_enabled(kind) {
                continue;
            }
            let finding = match kind {
                FindingKind::ClichePhrases => phrases::detect_cliches(&lower, rules),
                FindingKind::RepetitiveStarts => {
                    structure::detect_repetitive_starts(&starts, rules)
                }
                FindingKind::OverlyFormal => phrases::detect_formality(&lower, rules),
                FindingKind::ListHeavy => {
                    structure::detect_list_heavy(stats.bullet_lines, stats.numbered_lines, rules)
                }
                FindingKind::LongSentences => stats::detect_long_sentences(&stats, rules),
                FindingKind::LowDensity => stats::detect_low_density(&stats, rules),
                FindingKind::GenericLanguage => phrases::detect_generic_language(&lower, rules),
                FindingKind::Hedging => phrases::detect_hedging(&lower, rules),
                FindingKind::WordComplexity => phrases::detect_complex_words(&lower, rules),
            };
            findings.extend(finding);
        }

        AnalysisResult::new(findings, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{SUMMARY_CLEAN, SUMMARY_SLOP};

    fn kinds(result: &AnalysisResult) -> Vec<FindingKind> {
        result.findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_empty_text_is_clean() {
        let analyzer = SlopAnalyzer::standard();
        for input in ["", "   ", "\n\t\n", "...!?"] {
            let result = analyzer.analyze(input);
            assert!(!result.has_slop, "input {:?}", input);
            assert!(result.findings.is_empty());
            assert_eq!(result.summary, SUMMARY_CLEAN);
        }
    }

    #[test]
    fn test_standard_analyzers_share_rules() {
        let a = SlopAnalyzer::standard();
        let b = SlopAnalyzer::default();
        assert!(std::ptr::eq(a.rules(), b.rules()));
        assert_eq!(a.rules(), &RuleSet::default());
    }

    #[test]
    fn test_plain_sentence_is_clean() {
        let result = SlopAnalyzer::standard().analyze("The cat sat on the mat.");
        assert!(!result.has_slop, "unexpected findings: {:?}", result.findings);
    }

    #[test]
    fn test_findings_follow_pipeline_order() {
        let text = "Moreover we leverage it. Moreover we utilize it. Furthermore we do. \
                    Moreover it is typically, usually and often fine.";
        let result = SlopAnalyzer::standard().analyze(text);
        assert_eq!(
            kinds(&result),
            vec![
                FindingKind::ClichePhrases,
                FindingKind::RepetitiveStarts,
                FindingKind::OverlyFormal,
                FindingKind::GenericLanguage,
                FindingKind::WordComplexity,
            ]
        );
        assert_eq!(result.summary, SUMMARY_SLOP);
    }

    #[test]
    fn test_wordy_term_is_reported_once() {
        let result = SlopAnalyzer::standard().analyze("We utilize tools to facilitate work.");
        assert_eq!(kinds(&result), vec![FindingKind::WordComplexity]);
        assert_eq!(result.findings[0].matches, vec!["utilize", "facilitate"]);
    }

    #[test]
    fn test_disabled_check_is_skipped() {
        let mut rules = RuleSet::default();
        rules.checks.cliche_phrases = false;
        let analyzer = SlopAnalyzer::new(Arc::new(rules));
        let result = analyzer.analyze("A robust plan.");
        assert!(result.finding(FindingKind::ClichePhrases).is_none());
    }

    #[test]
    fn test_custom_rules_are_used() {
        let rules = RuleSet {
            cliche_phrases: vec!["moving forward".to_string()],
            ..Default::default()
        };
        let analyzer = SlopAnalyzer::new(Arc::new(rules));
        let result = analyzer.analyze("Moving forward, a robust plan.");
        let finding = result.finding(FindingKind::ClichePhrases).unwrap();
        assert_eq!(finding.matches, vec!["moving forward"]);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let analyzer = SlopAnalyzer::standard();
        let text = "We delve into it. We delve into it. We delve into it.";
        let first = serde_json::to_string(&analyzer.analyze(text)).unwrap();
        for _ in 0..5 {
            assert_eq!(serde_json::to_string(&analyzer.analyze(text)).unwrap(), first);
        }
    }
}
