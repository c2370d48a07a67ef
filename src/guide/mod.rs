//! Static writing guidance served alongside the analyzer.
//!
//! Nothing here analyzes text; these are the documents returned by the
//! rules and examples endpoints and tools.

use serde::{Deserialize, Serialize};

/// The full human-writing guide, served verbatim.
pub const WRITING_RULES: &str = include_str!("writing_rules.md");

const PHRASE_EXAMPLES: &str = r#"## Overused AI Phrases

Never use:
- "delve into" → use "explore" or "examine"
- "leverage" → use "use"
- "utilize" → use "use"
- "it's important to note that" → just state it
- "in today's digital age" → be specific or omit
- "game changer" → be specific about impact
- "robust" → use concrete descriptors
- "seamless" → describe actual experience
- "ecosystem" → unless discussing biology

"#;

const STRUCTURE_EXAMPLES: &str = r#"## Structural Patterns to Avoid

❌ Don't:
- Start every sentence the same way
- Use "Firstly, Secondly, Thirdly" unless truly needed
- Make everything a bulleted list
- Begin with "Certainly!" or "Absolutely!"
- End with summary of what you just said

✅ Do:
- Vary sentence structure naturally
- Mix short and long sentences
- Use paragraphs for flow, lists when truly helpful
- Get straight to the point

"#;

const TONE_EXAMPLES: &str = r#"## Tone Issues

❌ Too AI-like:
"It's worth noting that one should carefully consider..."

✅ Human-like:
"Consider..."

❌ Over-hedging:
"This might potentially be somewhat useful in certain scenarios..."

✅ Direct:
"This is useful when..."

"#;

const GOLDEN_TEST: &str = r#"## The Golden Test

Ask yourself: "Would a human actually write this?"
If it sounds like corporate jargon or a press release, revise it.
"#;

/// Example sections that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleCategory {
    Phrases,
    Structure,
    Tone,
    #[default]
    All,
}

impl ExampleCategory {
    pub const NAMES: [&'static str; 4] = ["phrases", "structure", "tone", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleCategory::Phrases => "phrases",
            ExampleCategory::Structure => "structure",
            ExampleCategory::Tone => "tone",
            ExampleCategory::All => "all",
        }
    }

    fn includes(&self, section: ExampleCategory) -> bool {
        *self == ExampleCategory::All || *self == section
    }
}

impl std::fmt::Display for ExampleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExampleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "phrases" => Ok(ExampleCategory::Phrases),
            "structure" => Ok(ExampleCategory::Structure),
            "tone" => Ok(ExampleCategory::Tone),
            "all" | "" => Ok(ExampleCategory::All),
            other => Err(format!(
                "unknown category {:?}, expected one of: {}",
                other,
                ExampleCategory::NAMES.join(", ")
            )),
        }
    }
}

/// The writing guide, with a context section appended when one is given.
pub fn writing_rules(context: Option<&str>) -> String {
    let mut rules = WRITING_RULES.to_string();
    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        rules.push_str(&format!(
            "\n\n## Context-Specific Guidance\n\nYou are writing: {}\n\n\
             Adapt these rules to fit this context while maintaining human-like writing.",
            context
        ));
    }
    rules
}

/// Examples of slop patterns for one category (or all of them).
pub fn slop_examples(category: ExampleCategory) -> String {
    let mut out = String::from("# AI Slop Examples to Avoid\n\n");
    if category.includes(ExampleCategory::Phrases) {
        out.push_str(PHRASE_EXAMPLES);
    }
    if category.includes(ExampleCategory::Structure) {
        out.push_str(STRUCTURE_EXAMPLES);
    }
    if category.includes(ExampleCategory::Tone) {
        out.push_str(TONE_EXAMPLES);
    }
    if category == ExampleCategory::All {
        out.push_str(GOLDEN_TEST);
    }
    out
}
