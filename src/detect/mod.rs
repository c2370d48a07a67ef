//! Detection of AI-sounding patterns in prose.

mod analyzer;
mod phrases;
mod stats;
mod structure;
pub mod text;
mod types;

pub use analyzer::SlopAnalyzer;
pub use phrases::find_phrases;
pub use structure::repeated_starts;
pub use types::{
    AnalysisResult, Finding, FindingKind, Severity, TextStats, SUMMARY_CLEAN, SUMMARY_SLOP,
};
