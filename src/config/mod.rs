//! Run configuration
//!
//! A [`Config`] is built once at startup by the CLI layer and handed down by
//! reference. Nothing below the CLI reads process environment.

pub mod extensions;

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

pub use extensions::ExtensionSet;

/// Default preview limit per file (64 KiB)
pub const DEFAULT_MAX_BYTES: u64 = 64 * 1024;

/// Default per-file summarization deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_INCLUDE: &str = ".txt,.md,.log,.rst,.json,.yaml,.yml,.toml,.go,.py,.js,.ts";

pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com";
pub const DEFAULT_OLLAMA_BASE: &str = "http://localhost:11434";

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LOCAL_MODEL: &str = "llama3.1:8b";

/// Summarization provider as named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    /// OpenAI-compatible chat completions
    #[value(name = "openai")]
    OpenAi,
    /// Local Ollama-style generate endpoint
    #[value(name = "ollama")]
    Ollama,
    /// No backend: first words of the file as summary
    #[value(name = "none")]
    None,
}

impl Provider {
    /// Model used when none is configured
    pub fn default_model(self) -> &'static str {
        match self {
            Provider::OpenAi | Provider::None => DEFAULT_CHAT_MODEL,
            Provider::Ollama => DEFAULT_LOCAL_MODEL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Ollama => "ollama",
            Provider::None => "none",
        }
    }
}

/// What to visit and how much of each file to read
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub include: ExtensionSet,
    pub max_bytes: u64,
    /// Budget for a single file's summarization call
    pub timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include: ExtensionSet::parse(DEFAULT_INCLUDE),
            max_bytes: DEFAULT_MAX_BYTES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Connection parameters for the summarization backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub provider: Provider,
    pub model: String,
    pub api_key: Option<String>,
    pub openai_base: String,
    pub ollama_base: String,
}

impl BackendConfig {
    /// Config for `provider` with its default model and endpoints
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            model: provider.default_model().to_string(),
            api_key: None,
            openai_base: DEFAULT_OPENAI_BASE.to_string(),
            ollama_base: DEFAULT_OLLAMA_BASE.to_string(),
        }
    }

    /// Credential, if one is set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }
}

/// Everything one indexing run needs
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub output: PathBuf,
    pub scan: ScanOptions,
    pub backend: BackendConfig,
}
