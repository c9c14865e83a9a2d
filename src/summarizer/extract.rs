//! Recover `{summary, keywords}` from a model's free-form reply.
//!
//! Models often wrap the JSON in a Markdown fence or add a sentence before or
//! after it. The reply is cut to the span between the first `{` and the last
//! `}` and that span is decoded. This is deliberately not a JSON-in-text
//! scanner: prose after the payload that itself contains a `}` will break it.

use super::Summary;
use super::error::ParseError;

/// Extract the summary payload from a raw model reply
///
/// # Errors
///
/// [`ParseError::MissingObject`] when the reply has no `{ ... }` span, and
/// [`ParseError::Json`] when the span is not a valid payload object.
pub fn extract_summary(raw: &str) -> Result<Summary, ParseError> {
    let span = object_span(raw.trim()).ok_or(ParseError::MissingObject)?;
    Ok(serde_json::from_str(span)?)
}

fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
