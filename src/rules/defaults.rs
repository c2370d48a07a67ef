//! Built-in rule tables.

use phf::phf_ordered_map;

/// Phrases that read as AI boilerplate. Order is reporting order.
///
/// Wordy terms with a plain replacement belong in [`COMPLEX_WORDS`] instead.
pub const CLICHE_PHRASES: &[&str] = &[
    "delve into",
    "it's important to note",
    "it's worth noting",
    "in today's digital age",
    "dive deep",
    "game changer",
    "unlock the potential",
    "landscape",
    "leverage",
    "cutting-edge",
    "paradigm shift",
    "robust",
    "seamless",
    "holistic",
    "synergy",
    "ecosystem",
    "journey",
    "revolutionize",
    "transform",
    "empower",
];

pub const FORMALITY_MARKERS: &[&str] = &[
    "furthermore",
    "moreover",
    "thus",
    "hence",
    "whereby",
    "wherein",
    "heretofore",
    "aforementioned",
    "notwithstanding",
];

/// Hedge words that flatten text into over-standardized advice.
pub const GENERIC_PHRASES: &[&str] = &["in general", "typically", "usually", "often", "sometimes"];

pub const HEDGING_WORDS: &[&str] = &[
    "perhaps",
    "possibly",
    "might",
    "could potentially",
    "somewhat",
    "fairly",
    "relatively",
    "generally",
];

/// Inflated words mapped to their plain replacement.
pub static COMPLEX_WORDS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "utilize" => "use",
    "facilitate" => "help",
    "demonstrate" => "show",
    "indicate" => "show",
    "commence" => "start",
};

pub const REPETITION_MIN_COUNT: usize = 3;
pub const FORMALITY_MIN_MATCHES: usize = 2;
pub const AVG_SENTENCE_LENGTH_MAX: f64 = 25.0;
pub const MIN_LEXICAL_DENSITY: f64 = 0.40;
pub const MAX_LIST_LINES: usize = 5;
pub const GENERIC_MIN_MATCHES: usize = 3;
pub const HEDGING_MIN_MATCHES: usize = 3;
pub const COMPLEX_MIN_MATCHES: usize = 1;
/// Zero keeps short start words such as "the" in the repetition count.
pub const MIN_START_WORD_LEN: usize = 0;
