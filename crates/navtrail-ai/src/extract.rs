//! Structured output extraction.
//!
//! Models are asked to answer with bare JSON but routinely wrap it in a
//! Markdown fence or surround it with prose. These helpers locate the JSON
//! payload and deserialize it.

use serde::de::DeserializeOwned;

use crate::error::AiError;

/// Locate the JSON payload inside a completion.
///
/// Preference order: the first fenced code block whose body is JSON
/// (optionally tagged `json`), then the span from the first `{` or `[` to
/// the last matching closer.
pub fn json_candidate(text: &str) -> Option<&str> {
    fenced_json(text).or_else(|| outer_span(text))
}

/// Deserialize the JSON payload of a completion into `T`.
///
/// A fenced candidate that fails to deserialize does not end the search;
/// the outer span is tried next.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Result<T, AiError> {
    let mut last_error = None;
    for candidate in [fenced_json(text), outer_span(text)].into_iter().flatten() {
        match serde_json::from_str(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    Err(match last_error {
        Some(e) => AiError::SchemaViolation(format!("{e}. Response: {}", truncate(text, 200))),
        None => AiError::SchemaViolation("no JSON found in response".to_string()),
    })
}

fn fenced_json(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(open) = rest.find("```") {
        let after = &rest[open + 3..];
        let close = after.find("```")?;
        let inner = strip_json_tag(&after[..close]).trim();
        if inner.starts_with(['{', '[']) {
            return Some(inner);
        }
        // Not JSON (a shell snippet, say); keep looking past it.
        rest = &after[close + 3..];
    }
    None
}

/// Drop a leading `json` info string, with or without a newline after it.
fn strip_json_tag(block: &str) -> &str {
    let block = block.trim_start();
    match block.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &block[4..],
        _ => block,
    }
}

fn outer_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let close = if text[start..].starts_with('{') { '}' } else { ']' };
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Cut `text` to at most `max` characters on a char boundary.
pub fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
