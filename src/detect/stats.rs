//! Whole-text statistics and the checks built on them.

use std::collections::HashSet;

use crate::rules::RuleSet;

use super::text;
use super::{Finding, FindingKind, TextStats};

/// Measure word, sentence and list-line counts for `raw`.
pub fn measure(raw: &str, sentence_count: usize) -> TextStats {
    let words: Vec<&str> = text::words(raw).collect();
    let word_count = words.len();

    let avg_sentence_length = if sentence_count > 0 {
        Some(word_count as f64 / sentence_count as f64)
    } else {
        None
    };

    let lexical_density = if word_count > 0 {
        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Some(unique.len() as f64 / word_count as f64)
    } else {
        None
    };

    TextStats {
        words: word_count,
        sentences: sentence_count,
        avg_sentence_length,
        lexical_density,
        bullet_lines: text::count_bullet_lines(raw),
        numbered_lines: text::count_numbered_lines(raw),
    }
}

pub fn detect_long_sentences(stats: &TextStats, rules: &RuleSet) -> Option<Finding> {
    let avg = stats.avg_sentence_length?;
    if avg <= rules.avg_sentence_length_max {
        return None;
    }
    let rendered = format!("{:.1}", avg);
    Some(Finding::new(
        FindingKind::LongSentences,
        format!("Long sentences: average {} words (aim for 15-20)", rendered),
        vec![rendered],
    ))
}

pub fn detect_low_density(stats: &TextStats, rules: &RuleSet) -> Option<Finding> {
    let density = stats.lexical_density?;
    if density >= rules.min_lexical_density {
        return None;
    }
    let percent = (density * 100.0).round() as u32;
    Some(Finding::new(
        FindingKind::LowDensity,
        format!("Low information density: {}% unique words", percent),
        vec![format!("{}%", percent)],
    ))
}
