//! Summarization backends
//!
//! Every backend implements [`Summarizer`]: given a file's relative name and a
//! bounded preview, produce a [`Summary`] before a [`Deadline`] expires.
//!
//! - [`FallbackSummarizer`] - no network; first words of the preview
//! - [`ChatCompletionClient`] - OpenAI-compatible chat completions
//! - [`LocalGenerateClient`] - local generate endpoint (Ollama)
//!
//! [`Backend`] selects one of the three from a [`BackendConfig`]. The network
//! backends share [`prompt::build_prompt`] and [`extract::extract_summary`].

pub mod chat;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod generate;
pub mod prompt;

use std::time::{Duration, Instant};

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

pub use chat::ChatCompletionClient;
pub use error::{ParseError, SummarizeError};
pub use extract::extract_summary;
pub use fallback::FallbackSummarizer;
pub use generate::LocalGenerateClient;
pub use prompt::build_prompt;

use crate::config::{BackendConfig, Provider};

/// Summary text and keywords for one file
///
/// Missing or `null` fields decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Point in time by which a summarization call must finish
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
    budget: Duration,
}

impl Deadline {
    /// Deadline `budget` from now
    pub fn after(budget: Duration) -> Self {
        Self { expires_at: Instant::now() + budget, budget }
    }

    /// Time left, or `None` once expired
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at.checked_duration_since(Instant::now()).filter(|left| !left.is_zero())
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

/// Produce a summary and keywords for a file preview within a deadline
pub trait Summarizer {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    fn summarize(
        &self,
        deadline: Deadline,
        model: &str,
        filename: &str,
        preview: &str,
    ) -> Result<Summary, SummarizeError>;
}

/// The backend chosen by configuration
#[derive(Debug, Clone)]
pub enum Backend {
    Fallback(FallbackSummarizer),
    ChatCompletion(ChatCompletionClient),
    LocalGenerate(LocalGenerateClient),
}

impl Backend {
    /// Select and construct the backend for `config`
    ///
    /// The chat-completion provider without a credential degrades to the
    /// fallback so a run still yields a complete index.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let backend = match config.provider {
            Provider::None => Backend::Fallback(FallbackSummarizer),
            Provider::Ollama => Backend::LocalGenerate(LocalGenerateClient::new(&config.ollama_base)?),
            Provider::OpenAi => match config.api_key() {
                Some(key) => Backend::ChatCompletion(ChatCompletionClient::new(&config.openai_base, key)?),
                None => {
                    warn!("LLM_API_KEY is empty; index will be built without summaries or keywords");
                    Backend::Fallback(FallbackSummarizer)
                }
            },
        };
        Ok(backend)
    }

    /// Model identifier recorded in the index for this backend
    pub fn effective_model<'a>(&self, configured: &'a str) -> &'a str {
        match self {
            Backend::LocalGenerate(_) => LocalGenerateClient::resolve_model(configured),
            Backend::Fallback(_) | Backend::ChatCompletion(_) => configured,
        }
    }

    fn inner(&self) -> &dyn Summarizer {
        match self {
            Backend::Fallback(s) => s,
            Backend::ChatCompletion(s) => s,
            Backend::LocalGenerate(s) => s,
        }
    }
}

impl Summarizer for Backend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn summarize(
        &self,
        deadline: Deadline,
        model: &str,
        filename: &str,
        preview: &str,
    ) -> Result<Summary, SummarizeError> {
        self.inner().summarize(deadline, model, filename, preview)
    }
}

/// Consume the body of a response, failing on a non-2xx status
///
/// A non-2xx status is reported even when its body cannot be read. The
/// response is dropped before returning on every path.
pub(crate) fn read_success_body(
    response: reqwest::blocking::Response,
    deadline: Deadline,
) -> Result<String, SummarizeError> {
    let status = response.status();
    if !status.is_success() {
        let body = match response.text() {
            Ok(body) => body.trim().to_string(),
            Err(e) => format!("<unreadable body: {}>", e),
        };
        return Err(SummarizeError::Http { status: status.as_u16(), body });
    }
    response.text().map_err(|e| SummarizeError::from_transport(e, deadline.budget()))
}
