//! Extracting JSON from raw model responses.
//!
//! Model responses often wrap JSON in markdown code fences or mix it with
//! explanatory text. This module pulls the JSON payload out of common
//! response shapes before parsing.

use muse_error::{JsonError, MuseResult};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Strategies, in order:
/// 1. Markdown code fences: ```json ... ```
/// 2. The first balanced `{ ... }` or `[ ... ]` structure, whichever
///    opens earlier in the response.
///
/// # Errors
///
/// Returns an error if no JSON structure is found in the response.
///
/// # Examples
///
/// ```
/// use muse_flow::extract_json;
///
/// let response = "Here you go:\n```json\n{\"stanza\": \"text\"}\n```\n";
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("stanza"));
/// ```
pub fn extract_json(response: &str) -> MuseResult<String> {
    if let Some(json) = extract_from_code_fence(response) {
        return Ok(json);
    }

    let brace_pos = response.find('{');
    let bracket_pos = response.find('[');

    let candidates: &[(char, char)] = match (brace_pos, bracket_pos) {
        (Some(b), Some(k)) if k < b => &[('[', ']'), ('{', '}')],
        (None, Some(_)) => &[('[', ']')],
        _ => &[('{', '}'), ('[', ']')],
    };

    for (open, close) in candidates {
        if let Some(json) = extract_balanced(response, *open, *close) {
            return Ok(json);
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );

    Err(JsonError::new(format!(
        "no JSON found in response (length: {})",
        response.len()
    ))
    .into())
}

/// Extract content from a ```json code fence.
///
/// A missing closing fence usually means a truncated response; the content
/// from the opening fence onward is returned in that case.
fn extract_from_code_fence(response: &str) -> Option<String> {
    let start = response.find("```json")?;
    let content_start = start + "```json".len();
    match response[content_start..].find("```") {
        Some(end) => Some(response[content_start..content_start + end].trim().to_string()),
        None => Some(response[content_start..].trim().to_string()),
    }
}

/// Extract the first balanced delimiter pair, tracking string literals so
/// braces inside JSON strings do not unbalance the scan.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in response[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(response[start..start + index + ch.len_utf8()].to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_code_fence() {
        let response = "Sure!\n```json\n{\"verse\": \"line one\"}\n```\nAnything else?";
        assert_eq!(extract_json(response).unwrap(), "{\"verse\": \"line one\"}");
    }

    #[test]
    fn extracts_bare_object() {
        let response = "The result is {\"summary\": \"fine\"} as requested.";
        assert_eq!(extract_json(response).unwrap(), "{\"summary\": \"fine\"}");
    }

    #[test]
    fn braces_inside_strings_stay_balanced() {
        let response = r#"{"plot": "Act {one} begins"}"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn prefers_array_when_it_opens_first() {
        let response = r#"[{"title": "A"}, {"title": "B"}]"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn reports_missing_json() {
        assert!(extract_json("no structured data here").is_err());
    }

    #[test]
    fn truncated_fence_returns_remainder() {
        let response = "```json\n{\"stanza\": \"unfinished";
        assert_eq!(extract_json(response).unwrap(), "{\"stanza\": \"unfinished");
    }
}
