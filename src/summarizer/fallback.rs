use super::{Deadline, SummarizeError, Summarizer, Summary};

/// Number of leading words kept as the summary
pub const FALLBACK_WORDS: usize = 50;

/// Keywords attached to every fallback summary
pub const FALLBACK_KEYWORDS: [&str; 2] = ["texto", "sin-llm"];

/// Summarizer used when no backend is configured
///
/// The summary is the first [`FALLBACK_WORDS`] whitespace-separated words of
/// the preview joined by single spaces. It never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSummarizer;

impl FallbackSummarizer {
    pub fn summarize_preview(&self, preview: &str) -> Summary {
        let summary = preview.split_whitespace().take(FALLBACK_WORDS).collect::<Vec<_>>().join(" ");
        Summary { summary, keywords: FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect() }
    }
}

impl Summarizer for FallbackSummarizer {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn summarize(
        &self,
        _deadline: Deadline,
        _model: &str,
        _filename: &str,
        preview: &str,
    ) -> Result<Summary, SummarizeError> {
        Ok(self.summarize_preview(preview))
    }
}
