//! Output formatting for analysis results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//! - Markdown: the text rendering returned by the `check_for_slop` tool

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{AnalysisResult, Finding, Severity, TextStats};
use crate::score::SlopScore;

/// Heading of the markdown rendering.
pub const MARKDOWN_HEADING: &str = "# AI Slop Analysis";

const RECOMMENDATION: &str = "## Recommendation\nRevise the text to sound more human and natural.";

/// One analyzed input with its score.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    /// File path, or `<stdin>`
    pub path: String,
    pub result: AnalysisResult,
    pub score: SlopScore,
}

// =============================================================================
// Wire format shared by the HTTP endpoint
// =============================================================================

/// Body of a successful `POST /api/check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub has_slop: bool,
    pub findings: Vec<String>,
    pub message: String,
}

impl From<&AnalysisResult> for CheckResponse {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            has_slop: result.has_slop,
            findings: result.messages(),
            message: result.summary.clone(),
        }
    }
}

// =============================================================================
// Markdown
// =============================================================================

/// Render a result as markdown, one bullet per finding.
pub fn render_markdown(result: &AnalysisResult) -> String {
    if !result.has_slop {
        return result.summary.clone();
    }

    let lines: Vec<String> = result
        .findings
        .iter()
        .map(|f| format!("- **{}**: {}", f.kind.label(), f.message))
        .collect();

    format!(
        "{}\n\n{}\n\n{}",
        MARKDOWN_HEADING,
        lines.join("\n"),
        RECOMMENDATION
    )
}

/// Write markdown for every input, separated by the input name.
pub fn write_markdown(analyses: &[FileAnalysis]) {
    for (i, a) in analyses.iter().enumerate() {
        if analyses.len() > 1 {
            if i > 0 {
                println!();
            }
            println!("<!-- {} -->", a.path);
        }
        println!("{}", render_markdown(&a.result));
    }
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub threshold: i32,
    pub passed: bool,
    pub files_analyzed: usize,
    pub files: Vec<JsonFileReport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFileReport {
    pub path: String,
    #[serde(rename = "hasSlop")]
    pub has_slop: bool,
    pub findings: Vec<Finding>,
    pub message: String,
    pub score: i32,
    pub grade: String,
    pub passed: bool,
    pub stats: TextStats,
}

impl From<&FileAnalysis> for JsonFileReport {
    fn from(a: &FileAnalysis) -> Self {
        Self {
            path: a.path.clone(),
            has_slop: a.result.has_slop,
            findings: a.result.findings.clone(),
            message: a.result.summary.clone(),
            score: a.score.score,
            grade: a.score.grade.clone(),
            passed: a.score.passed,
            stats: a.result.stats.clone(),
        }
    }
}

pub fn build_json_report(analyses: &[FileAnalysis], threshold: i32) -> JsonReport {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        threshold,
        passed: analyses.iter().all(|a| a.score.passed),
        files_analyzed: analyses.len(),
        files: analyses.iter().map(JsonFileReport::from).collect(),
    }
}

/// Write results in JSON format.
pub fn write_json(analyses: &[FileAnalysis], threshold: i32) -> anyhow::Result<()> {
    let report = build_json_report(analyses, threshold);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(analyses: &[FileAnalysis], threshold: i32) {
    println!();
    print!("  ");
    print!("{}", "talkhuman".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    for a in analyses {
        write_file_result(a);
        println!();
    }

    write_final_status(analyses, threshold);
    println!();
}

fn write_file_result(a: &FileAnalysis) {
    if a.score.passed {
        print!("  {} ", "✓".green());
    } else {
        print!("  {} ", "✗".red());
    }
    print!("{}", a.path.blue());
    print!("  Slop: ");
    write_colored_score(a.score.score);
    print!("  Grade: ");
    write_colored_grade(&a.score.grade);
    println!();

    let stats = &a.result.stats;
    let avg = stats
        .avg_sentence_length
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "    {}",
        format!(
            "{} words, {} sentences, avg {} words/sentence",
            stats.words, stats.sentences, avg
        )
        .dimmed()
    );

    if a.result.findings.is_empty() {
        println!("    {}", a.result.summary.dimmed());
        return;
    }

    for f in &a.result.findings {
        write_severity_tag(&f.severity);
        print!("{:<20}", f.kind.as_str().dimmed());
        println!("{}", f.message);
    }
}

fn write_colored_score(s: i32) {
    match s {
        s if s <= 10 => print!("{}", s.to_string().green().bold()),
        s if s <= 25 => print!("{}", s.to_string().green()),
        s if s <= 50 => print!("{}", s.to_string().yellow()),
        s if s <= 75 => print!("{}", s.to_string().yellow().bold()),
        _ => print!("{}", s.to_string().red()),
    }
}

fn write_colored_grade(grade: &str) {
    match grade {
        "A" => print!("{}", grade.green().bold()),
        "B" => print!("{}", grade.green()),
        "C" => print!("{}", grade.yellow()),
        "D" => print!("{}", grade.yellow().bold()),
        _ => print!("{}", grade.red()),
    }
}

fn write_severity_tag(severity: &Severity) {
    match severity {
        Severity::Warning => print!("    {} ", "WARN".yellow()),
        Severity::Info => print!("    {} ", "INFO".blue()),
    }
}

fn write_final_status(analyses: &[FileAnalysis], threshold: i32) {
    let failed = analyses.iter().filter(|a| !a.score.passed).count();

    print!("  {}", format!("Threshold: {}", threshold).dimmed());
    print!("  Files: {}", analyses.len());
    print!("  ");
    if failed == 0 {
        print!("{}", "PASSED".green());
    } else {
        print!("{}", format!("FAILED ({})", failed).red());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::SlopAnalyzer;
    use crate::score;

    fn analysis(path: &str, text: &str) -> FileAnalysis {
        let result = SlopAnalyzer::standard().analyze(text);
        let score = score::calculate(&result, score::DEFAULT_THRESHOLD);
        FileAnalysis {
            path: path.to_string(),
            result,
            score,
        }
    }

    #[test]
    fn test_markdown_clean() {
        let a = analysis("clean.md", "The cat sat on the mat.");
        assert_eq!(
            render_markdown(&a.result),
            "No obvious AI slop detected. Text appears human-like."
        );
    }

    #[test]
    fn test_markdown_with_findings() {
        let a = analysis("slop.md", "We leverage a robust ecosystem.");
        let md = render_markdown(&a.result);
        assert!(md.starts_with(MARKDOWN_HEADING));
        assert!(md.contains("- **Tone**: AI cliché phrases: leverage, robust, ecosystem"));
        assert!(md.ends_with("Revise the text to sound more human and natural."));
    }

    #[test]
    fn test_check_response_shape() {
        let a = analysis("slop.md", "We leverage it.");
        let json = serde_json::to_value(CheckResponse::from(&a.result)).unwrap();
        assert_eq!(json["hasSlop"], true);
        assert_eq!(json["findings"][0], "AI cliché phrases: leverage");
        assert_eq!(
            json["message"],
            "AI slop detected. Revise the text to sound more human and natural."
        );
    }

    #[test]
    fn test_json_report_aggregates_pass_state() {
        let clean = analysis("a.md", "The cat sat on the mat.");
        let report = build_json_report(&[clean], 25);
        assert!(report.passed);
        assert_eq!(report.files_analyzed, 1);
        assert_eq!(report.files[0].grade, "A");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][0]["hasSlop"], false);
        assert_eq!(json["files"][0]["stats"]["words"], 6);
    }
}
