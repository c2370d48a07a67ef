//! Command-line interface for talkhuman.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use crate::detect::SlopAnalyzer;
use crate::error::validate_text;
use crate::guide::{self, ExampleCategory};
use crate::mcp::{self, McpInterface};
use crate::report::{self, FileAnalysis};
use crate::rules::{discover_config, Config, DEFAULT_CONFIG_NAMES, DEFAULT_TEMPLATE};
use crate::score;
use crate::server::{self, AppState};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Display name for text read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

const FORMATS: &[&str] = &["pretty", "json", "markdown"];

/// Detect AI slop in prose.
///
/// talkhuman flags the patterns that make text read as machine-written:
/// stock phrases, repetitive sentence openers, stiff formality, list-heavy
/// structure, long sentences and low information density. It also serves
/// a human-writing guide to LLM clients over HTTP and MCP.
#[derive(Parser)]
#[command(name = "talkhuman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check text files (or stdin) for AI slop
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
    /// Serve the analyzer and the MCP tools over HTTP
    Serve(ServeArgs),
    /// Run an MCP server on stdin/stdout
    Mcp(McpArgs),
    /// Print the human-writing guide
    Rules(RulesArgs),
    /// Print examples of slop to avoid
    Examples(ExamplesArgs),
    /// Write the default rule file
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Files or directories to check (reads stdin when empty)
    pub paths: Vec<PathBuf>,

    /// Read text from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: pretty, json, or markdown
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Maximum acceptable slop score (exit non-zero if exceeded)
    #[arg(short, long)]
    pub threshold: Option<i32>,

    /// Path to a rules YAML file (default: auto-discover)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}

/// Arguments for the serve command.
#[derive(Parser)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "TALKHUMAN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TALKHUMAN_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to a rules YAML file (default: auto-discover)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}

/// Arguments for the mcp command.
#[derive(Parser)]
pub struct McpArgs {
    /// Path to a rules YAML file (default: auto-discover)
    #[arg(short, long)]
    pub rules: Option<PathBuf>,
}

/// Arguments for the rules command.
#[derive(Parser)]
pub struct RulesArgs {
    /// What you are writing (e.g. "casual email")
    #[arg(short, long)]
    pub context: Option<String>,
}

/// Arguments for the examples command.
#[derive(Parser)]
pub struct ExamplesArgs {
    /// Category: phrases, structure, tone, or all
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "talkhuman.yaml")]
    pub output: PathBuf,
}

/// Load the explicit rules file, a discovered one, or the built-in defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(),
    };

    let config = match &path {
        Some(p) => {
            let config = Config::parse_file(p)
                .map_err(|e| anyhow::anyhow!("parsing {}: {}", p.display(), e))?;
            tracing::debug!(path = %p.display(), "Loaded rules");
            config
        }
        None => Config::default(),
    };

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid rules: {}", e))?;
    Ok(config)
}

fn build_analyzer(config: Config) -> Arc<SlopAnalyzer> {
    Arc::new(SlopAnalyzer::new(Arc::new(config.rules)))
}

/// Collect text files under `root`.
fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let extensions = config.scan_extensions();
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories
            if e.file_type().is_dir() && e.depth() > 0 && name.starts_with('.') {
                return false;
            }
            // Skip dependency and build output directories
            !(e.file_type().is_dir()
                && (name == "node_modules" || name == "target" || name == "vendor"))
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        if extensions.contains(&ext) && !config.is_path_excluded(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn analyze_text(analyzer: &SlopAnalyzer, path: String, text: &str, threshold: i32) -> FileAnalysis {
    let result = analyzer.analyze(text);
    let score = score::calculate(&result, threshold);
    FileAnalysis {
        path,
        result,
        score,
    }
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    // Validate format
    if !FORMATS.contains(&args.format.as_str()) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'json', or 'markdown'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match load_config(args.rules.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let threshold = args
        .threshold
        .or(config.threshold)
        .unwrap_or(score::DEFAULT_THRESHOLD);
    if !(0..=100).contains(&threshold) {
        eprintln!("Error: threshold must be between 0 and 100, got {}", threshold);
        return Ok(EXIT_ERROR);
    }

    let analyzer = SlopAnalyzer::new(Arc::new(config.rules.clone()));

    let analyses = if args.stdin || args.paths.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        let text = match validate_text(Some(&buf)) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        };
        vec![analyze_text(&analyzer, STDIN_NAME.to_string(), text, threshold)]
    } else {
        let mut files = Vec::new();
        for path in &args.paths {
            let metadata = match std::fs::metadata(path) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("Error: cannot access path {:?}: {}", path, e);
                    return Ok(EXIT_ERROR);
                }
            };
            if metadata.is_dir() {
                files.extend(collect_files(path, &config)?);
            } else {
                files.push(path.clone());
            }
        }

        if files.is_empty() {
            eprintln!("Warning: no files to check");
            return Ok(EXIT_SUCCESS);
        }

        let mut analyses = files
            .par_iter()
            .map(|path| -> anyhow::Result<FileAnalysis> {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
                Ok(analyze_text(
                    &analyzer,
                    path.to_string_lossy().to_string(),
                    &text,
                    threshold,
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        analyses.sort_by(|a, b| a.path.cmp(&b.path));
        analyses
    };

    match args.format.as_str() {
        "json" => report::write_json(&analyses, threshold)?,
        "markdown" => report::write_markdown(&analyses),
        _ => report::write_pretty(&analyses, threshold),
    }

    if analyses.iter().all(|a| a.score.passed) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the serve command.
pub fn run_serve(args: &ServeArgs) -> anyhow::Result<i32> {
    let config = load_config(args.rules.as_deref())?;
    let state = AppState::new(build_analyzer(config));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(&args.host, args.port, state))?;

    Ok(EXIT_SUCCESS)
}

/// Run the mcp command.
pub fn run_mcp(args: &McpArgs) -> anyhow::Result<i32> {
    let config = load_config(args.rules.as_deref())?;
    let interface = McpInterface::new(build_analyzer(config));
    mcp::serve_stdio(&interface)?;
    Ok(EXIT_SUCCESS)
}

/// Run the rules command.
pub fn run_rules(args: &RulesArgs) -> anyhow::Result<i32> {
    println!("{}", guide::writing_rules(args.context.as_deref()));
    Ok(EXIT_SUCCESS)
}

/// Run the examples command.
pub fn run_examples(args: &ExamplesArgs) -> anyhow::Result<i32> {
    let category = match args.category.parse::<ExampleCategory>() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    print!("{}", guide::slop_examples(category));
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write rules: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to tune phrase lists and thresholds", args.output.display());
    if DEFAULT_CONFIG_NAMES.iter().any(|n| args.output == Path::new(n)) {
        println!("  2. Run: talkhuman check docs/");
    } else {
        println!(
            "  2. Run: talkhuman check docs/ --rules {}",
            args.output.display()
        );
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from([
            "talkhuman", "check", "a.md", "docs", "--format", "json", "--threshold", "10",
        ])
        .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.paths.len(), 2);
                assert_eq!(args.format, "json");
                assert_eq!(args.threshold, Some(10));
                assert!(!args.stdin);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_cli_parses_serve_defaults() {
        let cli = Cli::try_parse_from(["talkhuman", "serve", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, 8080),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_collect_files_filters_extensions_and_excludes() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("drafts")).unwrap();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::write(root.join("post.md"), "text").unwrap();
        std::fs::write(root.join("notes.TXT"), "text").unwrap();
        std::fs::write(root.join("main.rs"), "fn main() {}").unwrap();
        std::fs::write(root.join("drafts/wip.md"), "text").unwrap();
        std::fs::write(root.join(".git/readme.md"), "text").unwrap();

        let config = Config {
            excluded_paths: vec!["**/drafts/**".to_string()],
            ..Config::default()
        };
        let mut files = collect_files(root, &config).unwrap();
        files.sort();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["notes.TXT", "post.md"]);
    }

    #[test]
    fn test_load_explicit_rules() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.yaml");
        std::fs::write(&path, "threshold: 40\nrules:\n  max_list_lines: 9\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.threshold, Some(40));
        assert_eq!(config.rules.max_list_lines, 9);
    }

    #[test]
    fn test_load_invalid_rules() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.yaml");
        std::fs::write(&path, "rules:\n  min_lexical_density: 3.0\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("talkhuman.yaml");

        let args = InitArgs {
            output: output.clone(),
        };
        assert_eq!(run_init(&args).unwrap(), EXIT_SUCCESS);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), DEFAULT_TEMPLATE);
        assert_eq!(run_init(&args).unwrap(), EXIT_ERROR);
    }
}
