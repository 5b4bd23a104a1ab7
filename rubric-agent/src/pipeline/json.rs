//! Decoding JSON replies from generation backends.

use serde::de::DeserializeOwned;

use crate::error::AgentError;

/// Finds the JSON payload in a reply.
///
/// Takes the body of the first ``` fence (language tag dropped) wherever it sits in
/// the reply; without a fence, the span from the first `{` to the last `}`.
/// Otherwise the trimmed reply.
pub fn extract_json_from_response(content: &str) -> &str {
    let content = content.trim();
    if let Some(start) = content.find("```") {
        let after = &content[start + 3..];
        let body = match after.split_once('\n') {
            Some((tag, rest)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => rest,
            _ => after,
        };
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }
    match (content.find('{'), content.rfind('}')) {
        (Some(open), Some(close)) if open < close => &content[open..=close],
        _ => content,
    }
}

/// Parses an LLM reply into `T`. Malformed output is a generation failure.
pub fn parse_llm_json<T: DeserializeOwned>(step: &str, raw_content: &str) -> Result<T, AgentError> {
    serde_json::from_str(extract_json_from_response(raw_content)).map_err(|e| {
        AgentError::Generation(format!(
            "{} output parse error: {}; raw: {}",
            step, e, raw_content
        ))
    })
}
