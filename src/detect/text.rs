//! Tokenizing primitives shared by the checks.
//!
//! Every count in the analyzer goes through these routines so the
//! boundary rules live in one place:
//!
//! - words are runs of non-whitespace; leading/trailing whitespace yields no
//!   empty tokens
//! - sentences are split on runs of `.`, `!`, `?`; segments that are empty
//!   after trimming are dropped
//! - a bullet line starts (after optional whitespace) with `-`, `•` or `*`
//! - a numbered line starts (after optional whitespace) with digits then `.`

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BULLET_LINE: Regex = Regex::new(r"^\s*[-•*]").unwrap();
    static ref NUMBERED_LINE: Regex = Regex::new(r"^\s*[0-9]+\.").unwrap();
}

fn is_sentence_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Whitespace-separated tokens.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split text into sentences.
///
/// Consecutive delimiters act as one split point. Returned slices are
/// untrimmed but never blank.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_delimiter)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// First token of a sentence, lowercased.
pub fn start_word(sentence: &str) -> Option<String> {
    sentence.split_whitespace().next().map(|w| w.to_lowercase())
}

/// Lowercased first word of every sentence, in order.
pub fn sentence_starts(sentences: &[&str]) -> Vec<String> {
    sentences.iter().filter_map(|s| start_word(s)).collect()
}

pub fn is_bullet_line(line: &str) -> bool {
    BULLET_LINE.is_match(line)
}

pub fn is_numbered_line(line: &str) -> bool {
    NUMBERED_LINE.is_match(line)
}

pub fn count_bullet_lines(text: &str) -> usize {
    text.lines().filter(|l| is_bullet_line(l)).count()
}

pub fn count_numbered_lines(text: &str) -> usize {
    text.lines().filter(|l| is_numbered_line(l)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_ignore_surrounding_whitespace() {
        assert_eq!(words("  hello   world \n").count(), 2);
        assert_eq!(words("").count(), 0);
        assert_eq!(words(" \t\n ").count(), 0);
    }

    #[test]
    fn test_split_sentences_collapses_delimiter_runs() {
        let sentences = split_sentences("Wait... what?! Really. ");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Wait");
        assert_eq!(sentences[1].trim(), "what");
        assert_eq!(sentences[2].trim(), "Really");
    }

    #[test]
    fn test_split_sentences_without_delimiter() {
        assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("...!?").is_empty());
    }

    #[test]
    fn test_sentence_starts_lowercase_first_token() {
        let sentences = split_sentences("The cat sat. THE dog ran!  the bird flew?");
        let starts = sentence_starts(&sentences);
        assert_eq!(starts, vec!["the", "the", "the"]);
    }

    #[test]
    fn test_start_word_keeps_punctuation() {
        assert_eq!(start_word("  Additionally, we"), Some("additionally,".to_string()));
        assert_eq!(start_word("   "), None);
    }

    #[test]
    fn test_bullet_lines() {
        assert!(is_bullet_line("- item"));
        assert!(is_bullet_line("   * item"));
        assert!(is_bullet_line("\t• item"));
        assert!(!is_bullet_line("item - with dash"));
        assert!(!is_bullet_line("1. numbered"));

        let text = "- a\n  - b\nplain\n* c\n";
        assert_eq!(count_bullet_lines(text), 3);
    }

    #[test]
    fn test_numbered_lines() {
        assert!(is_numbered_line("1. first"));
        assert!(is_numbered_line("  42.answer"));
        assert!(!is_numbered_line("1) first"));
        assert!(!is_numbered_line("step 1. first"));
        assert!(!is_numbered_line(". nothing"));

        let text = "1. a\n2. b\n\n10. c\nnot a list";
        assert_eq!(count_numbered_lines(text), 3);
    }
}
