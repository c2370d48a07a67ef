//! Scoring and grading for analysis results.
//!
//! Calculates a slop score (0-100) from the findings of one text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::detect::{AnalysisResult, Finding, FindingKind, Severity};

/// Point weights for each finding kind.
pub mod points {
    pub const CLICHE_PER_PHRASE: i32 = 4; // scales with matched phrases
    pub const CLICHE_MAX: i32 = 40;
    pub const REPETITIVE_STARTS: i32 = 8;
    pub const OVERLY_FORMAL: i32 = 5;
    pub const LIST_HEAVY: i32 = 5;
    pub const LONG_SENTENCES: i32 = 8;
    pub const LOW_DENSITY: i32 = 10;
    pub const GENERIC_LANGUAGE: i32 = 5;
    pub const HEDGING: i32 = 5;
    pub const WORD_COMPLEXITY: i32 = 3; // info
}

/// Default threshold when neither the config nor the CLI sets one.
pub const DEFAULT_THRESHOLD: i32 = 25;

/// Grade thresholds.
pub mod grades {
    pub const A_MAX: i32 = 10;
    pub const B_MAX: i32 = 25;
    pub const C_MAX: i32 = 50;
    pub const D_MAX: i32 = 75;
}

/// The calculated slop score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlopScore {
    /// Score from 0-100, higher = more slop
    pub score: i32,
    /// Letter grade: "A" (0-10), "B" (11-25), "C" (26-50), "D" (51-75), "F" (76-100)
    pub grade: String,
    /// Points by finding kind
    pub breakdown: BTreeMap<String, i32>,
    /// Whether the check passed (score <= threshold)
    pub passed: bool,
    pub threshold: i32,
}

impl SlopScore {
    /// Get the total points before capping at 100.
    pub fn total_points(&self) -> i32 {
        self.breakdown.values().sum()
    }
}

/// Points contributed by a single finding.
pub fn points_for(finding: &Finding) -> i32 {
    match finding.kind {
        FindingKind::ClichePhrases => {
            let matched = finding.matches.len().max(1) as i32;
            (matched * points::CLICHE_PER_PHRASE).min(points::CLICHE_MAX)
        }
        FindingKind::RepetitiveStarts => points::REPETITIVE_STARTS,
        FindingKind::OverlyFormal => points::OVERLY_FORMAL,
        FindingKind::ListHeavy => points::LIST_HEAVY,
        FindingKind::LongSentences => points::LONG_SENTENCES,
        FindingKind::LowDensity => points::LOW_DENSITY,
        FindingKind::GenericLanguage => points::GENERIC_LANGUAGE,
        FindingKind::Hedging => points::HEDGING,
        FindingKind::WordComplexity => points::WORD_COMPLEXITY,
    }
}

/// Determine the letter grade from a score.
fn calculate_grade(score: i32) -> String {
    match score {
        s if s <= grades::A_MAX => "A".to_string(),
        s if s <= grades::B_MAX => "B".to_string(),
        s if s <= grades::C_MAX => "C".to_string(),
        s if s <= grades::D_MAX => "D".to_string(),
        _ => "F".to_string(),
    }
}

/// Calculate the slop score against `threshold`.
/// Info findings are tracked in the breakdown but don't affect pass/fail.
pub fn calculate(result: &AnalysisResult, threshold: i32) -> SlopScore {
    let mut breakdown: BTreeMap<String, i32> = BTreeMap::new();
    let mut scoring_points = 0;

    for finding in &result.findings {
        let points = points_for(finding);
        *breakdown.entry(finding.kind.as_str().to_string()).or_insert(0) += points;

        if finding.severity == Severity::Warning {
            scoring_points += points;
        }
    }

    let score = scoring_points.min(100);

    SlopScore {
        score,
        grade: calculate_grade(score),
        breakdown,
        passed: score <= threshold,
        threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::TextStats;

    fn make_finding(kind: FindingKind, matches: usize) -> Finding {
        Finding::new(
            kind,
            "test".to_string(),
            (0..matches).map(|i| format!("m{}", i)).collect(),
        )
    }

    fn result_of(findings: Vec<Finding>) -> AnalysisResult {
        AnalysisResult::new(findings, TextStats::default())
    }

    #[test]
    fn test_clean_text_scores_zero() {
        let score = calculate(&result_of(vec![]), DEFAULT_THRESHOLD);
        assert_eq!(score.score, 0);
        assert_eq!(score.grade, "A");
        assert!(score.passed);
        assert!(score.breakdown.is_empty());
    }

    #[test]
    fn test_info_findings_do_not_count() {
        let result = result_of(vec![
            make_finding(FindingKind::LowDensity, 1),     // 10 pts (warning)
            make_finding(FindingKind::WordComplexity, 2), // 3 pts (info)
        ]);
        let score = calculate(&result, DEFAULT_THRESHOLD);
        assert_eq!(score.score, 10);
        assert_eq!(score.breakdown.get("word_complexity"), Some(&3));
        assert_eq!(score.total_points(), 13);
    }

    #[test]
    fn test_cliche_points_scale_and_cap() {
        assert_eq!(points_for(&make_finding(FindingKind::ClichePhrases, 1)), 4);
        assert_eq!(points_for(&make_finding(FindingKind::ClichePhrases, 5)), 20);
        assert_eq!(points_for(&make_finding(FindingKind::ClichePhrases, 22)), 40);
    }

    #[test]
    fn test_score_exceeds_threshold() {
        let result = result_of(vec![
            make_finding(FindingKind::ClichePhrases, 5), // 20
            make_finding(FindingKind::LowDensity, 1),    // 10
        ]);
        let score = calculate(&result, DEFAULT_THRESHOLD);
        assert_eq!(score.score, 30);
        assert_eq!(score.grade, "C");
        assert!(!score.passed);

        let lenient = calculate(&result, 40);
        assert!(lenient.passed);
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(calculate_grade(0), "A");
        assert_eq!(calculate_grade(10), "A");
        assert_eq!(calculate_grade(11), "B");
        assert_eq!(calculate_grade(25), "B");
        assert_eq!(calculate_grade(26), "C");
        assert_eq!(calculate_grade(50), "C");
        assert_eq!(calculate_grade(51), "D");
        assert_eq!(calculate_grade(75), "D");
        assert_eq!(calculate_grade(76), "F");
        assert_eq!(calculate_grade(100), "F");
    }
}
