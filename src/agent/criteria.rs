// Evaluation criteria extraction
//
// Primary path asks the backend for a comma-separated criteria line and uses
// the tokens verbatim. When the response has no comma (backend malfunction,
// single-criterion answer) or the call fails, falls back to keyword
// extraction from the problem statement itself.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generators::Generator;

use super::prompts;

/// Baseline criteria prepended when the problem statement yields too few
/// keywords of its own.
pub const BASELINE_CRITERIA: [&str; 3] = ["relevance", "completeness", "clarity"];

const STOP_WORDS: [&str; 15] = [
    "the", "a", "an", "in", "on", "at", "to", "for", "with", "by", "as", "of", "and", "or", "but",
];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Derive the run's evaluation criteria, one backend call at most.
pub async fn extract_criteria(generator: &dyn Generator, problem: &str) -> Vec<String> {
    let prompt = prompts::criteria_prompt(problem);

    match generator.generate(&prompt).await {
        Ok(text) if text.contains(',') => text
            .split(',')
            .map(|token| token.trim().to_string())
            .collect(),
        Ok(_) => {
            tracing::warn!("Criteria response had no comma; falling back to keyword extraction");
            fallback_criteria(problem)
        }
        Err(e) => {
            tracing::warn!("Criteria generation failed ({e:#}); falling back to keyword extraction");
            fallback_criteria(problem)
        }
    }
}

/// Keyword fallback: lower-cased words of the problem statement minus stop
/// words and short tokens, in scan order, duplicates kept.
pub fn fallback_criteria(problem: &str) -> Vec<String> {
    let mut tokens: Vec<String> = WORD_RE
        .find_iter(problem)
        .map(|m| m.as_str().to_lowercase())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()) && word.len() > 3)
        .collect();

    if tokens.len() < 3 {
        let mut criteria: Vec<String> =
            BASELINE_CRITERIA.iter().map(|c| c.to_string()).collect();
        criteria.append(&mut tokens);
        criteria
    } else {
        tokens.truncate(5);
        tokens
    }
}
