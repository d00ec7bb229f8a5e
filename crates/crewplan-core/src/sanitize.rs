//! Best-effort extraction of a JSON object from model output.

/// Extracts the JSON object embedded in `text`.
///
/// Returns the span from the first `{` to the last `}` inclusive. When no such
/// span exists, strips surrounding code fences and whitespace instead. The
/// result is not guaranteed to parse: stray braces in surrounding prose end up
/// inside the span.
///
/// # Examples
///
/// ```rust
/// use crewplan_core::sanitize::extract_json_object;
///
/// let raw = "Sure! Here is the plan:\n```json\n{\"summary\": \"ok\"}\n```";
/// assert_eq!(extract_json_object(raw), "{\"summary\": \"ok\"}");
/// ```
pub fn extract_json_object(text: &str) -> String {
    if let (Some(first), Some(last)) = (text.find('{'), text.rfind('}'))
        && first < last
    {
        return text[first..=last].to_string();
    }

    strip_code_fence(text).to_string()
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map(|rest| rest.strip_suffix("```").unwrap_or(rest))
        .unwrap_or(trimmed);
    body.trim()
}
