//! Phrase-list checks.
//!
//! All of these run plain substring containment against text that the
//! caller has already lowercased. Matches come back in rule-list order.

use crate::rules::{ComplexWord, RuleSet};

use super::{Finding, FindingKind};

/// Entries of `phrases` contained in `lower`, in list order.
pub fn find_phrases<'a>(lower: &str, phrases: &'a [String]) -> Vec<&'a str> {
    phrases
        .iter()
        .filter(|p| !p.is_empty() && lower.contains(p.as_str()))
        .map(|p| p.as_str())
        .collect()
}

fn list_finding(kind: FindingKind, prefix: &str, matches: Vec<&str>) -> Finding {
    let message = format!("{}: {}", prefix, matches.join(", "));
    Finding::new(
        kind,
        message,
        matches.into_iter().map(str::to_string).collect(),
    )
}

/// Any single cliché is enough to report.
pub fn detect_cliches(lower: &str, rules: &RuleSet) -> Option<Finding> {
    let found = find_phrases(lower, &rules.cliche_phrases);
    if found.is_empty() {
        return None;
    }
    Some(list_finding(FindingKind::ClichePhrases, "AI cliché phrases", found))
}

pub fn detect_formality(lower: &str, rules: &RuleSet) -> Option<Finding> {
    let found = find_phrases(lower, &rules.formality_markers);
    if found.is_empty() || found.len() < rules.formality_min_matches {
        return None;
    }
    Some(list_finding(FindingKind::OverlyFormal, "Overly formal", found))
}

pub fn detect_generic_language(lower: &str, rules: &RuleSet) -> Option<Finding> {
    let found = find_phrases(lower, &rules.generic_phrases);
    if found.is_empty() || found.len() < rules.generic_min_matches {
        return None;
    }
    Some(list_finding(
        FindingKind::GenericLanguage,
        "Over-standardized language",
        found,
    ))
}

pub fn detect_hedging(lower: &str, rules: &RuleSet) -> Option<Finding> {
    let found = find_phrases(lower, &rules.hedging_words);
    if found.is_empty() || found.len() < rules.hedging_min_matches {
        return None;
    }
    Some(list_finding(FindingKind::Hedging, "Excessive hedging", found))
}

/// Report inflated words alongside their plain replacement.
pub fn detect_complex_words(lower: &str, rules: &RuleSet) -> Option<Finding> {
    let found: Vec<&ComplexWord> = rules
        .complex_words
        .iter()
        .filter(|w| !w.complex.is_empty() && lower.contains(w.complex.as_str()))
        .collect();
    if found.is_empty() || found.len() < rules.complex_min_matches {
        return None;
    }

    let rendered: Vec<String> = found
        .iter()
        .map(|w| format!("\"{}\" → \"{}\"", w.complex, w.simple))
        .collect();
    Some(Finding::new(
        FindingKind::WordComplexity,
        format!("Unnecessarily complex words: {}", rendered.join(", ")),
        found.iter().map(|w| w.complex.clone()).collect(),
    ))
}
