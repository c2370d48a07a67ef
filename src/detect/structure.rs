//! Structural checks: formulaic sentence openers and list-heavy layout.

use std::collections::HashMap;

use crate::rules::RuleSet;

use super::{Finding, FindingKind};

/// Start words used at least `repetition_min_count` times, in the order
/// they first appeared.
pub fn repeated_starts(starts: &[String], rules: &RuleSet) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for word in starts {
        if word.chars().count() < rules.min_start_word_len {
            continue;
        }
        let count = counts.entry(word.as_str()).or_insert(0);
        if *count == 0 {
            order.push(word.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter(|w| counts.get(w).copied().unwrap_or(0) >= rules.repetition_min_count)
        .map(str::to_string)
        .collect()
}

pub fn detect_repetitive_starts(starts: &[String], rules: &RuleSet) -> Option<Finding> {
    let repeated = repeated_starts(starts, rules);
    if repeated.is_empty() {
        return None;
    }
    Some(Finding::new(
        FindingKind::RepetitiveStarts,
        format!("Repetitive sentence starts: {}", repeated.join(", ")),
        repeated,
    ))
}

/// Flag text where either kind of list line exceeds `max_list_lines`.
pub fn detect_list_heavy(bullets: usize, numbered: usize, rules: &RuleSet) -> Option<Finding> {
    if bullets <= rules.max_list_lines && numbered <= rules.max_list_lines {
        return None;
    }
    Some(Finding::new(
        FindingKind::ListHeavy,
        format!(
            "List-heavy structure: {} bullets, {} numbered items",
            bullets, numbered
        ),
        vec![format!("bullets={}", bullets), format!("numbered={}", numbered)],
    ))
}
