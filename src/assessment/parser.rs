//! Turns the LLM's line-oriented recommendation text into structured data.
//!
//! The prompts ask for:
//!
//! ```text
//! Focus Area 1: <name>
//! Reasoning: <text>
//! ```
//!
//! Anything that does not follow the format is ignored, so a model that
//! ignores the instructions yields empty results rather than an error.

use std::collections::HashMap;

const ITEM_PREFIX: &str = "Focus Area";
const REASONING_PREFIX: &str = "Reasoning";

/// One recommended item with its reasoning, if the model gave one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecommendation {
    pub name: String,
    pub reasoning: Option<String>,
}

/// Everything after the first colon, trimmed.
fn after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, rest)| rest.trim())
}

/// Item names from `Focus Area N: <name>` lines, in order.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.starts_with(ITEM_PREFIX))
        .filter_map(after_colon)
        .map(str::to_string)
        .collect()
}

/// Reasoning text keyed by the item it follows.
pub fn parse_reasoning(text: &str) -> HashMap<String, String> {
    let mut reasoning = HashMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.starts_with(ITEM_PREFIX) {
            if let Some(name) = after_colon(line) {
                current = Some(name.to_string());
            }
        } else if line.starts_with(REASONING_PREFIX) {
            if let (Some(text), Some(item)) = (after_colon(line), current.as_deref()) {
                if !item.is_empty() {
                    reasoning.insert(item.to_string(), text.to_string());
                }
            }
        }
    }

    reasoning
}

/// Items paired with their reasoning, in listing order.
pub fn parse_recommendations(text: &str) -> Vec<ParsedRecommendation> {
    let reasoning = parse_reasoning(text);
    parse_list(text)
        .into_iter()
        .map(|name| {
            let reasoning = reasoning.get(&name).cloned();
            ParsedRecommendation { name, reasoning }
        })
        .collect()
}
