/// Longest preview, in characters, embedded in a prompt
pub const MAX_PROMPT_PREVIEW_CHARS: usize = 6000;

/// Build the instruction sent to a model for one file
///
/// The preview is cut to [`MAX_PROMPT_PREVIEW_CHARS`] whatever the caller's read limit.
pub fn build_prompt(filename: &str, preview: &str) -> String {
    let preview = truncate_chars(preview, MAX_PROMPT_PREVIEW_CHARS);
    format!(
        "File: {filename}\n\
         Return ONLY:\n\
         {{\"summary\":\"summary in 1-2 sentences, 40-80 words, no line breaks\",\"keywords\":[\"5-10 lowercase keywords\"]}}\n\
         Text:\n\
         {preview}"
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
