use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{
    BackendConfig, Config, DEFAULT_INCLUDE, DEFAULT_MAX_BYTES, DEFAULT_OLLAMA_BASE,
    DEFAULT_OPENAI_BASE, DEFAULT_TIMEOUT_SECS, ExtensionSet, Provider, ScanOptions,
};
use crate::index_storage::write_index;
use crate::indexer::build_index;
use crate::summarizer::{Backend, Summarizer};

#[derive(Parser, Debug)]
#[command(name = "llm-file-indexer")]
#[command(version)]
#[command(about = "Build a JSON index of text files with LLM summaries and keywords", long_about = None)]
pub struct Cli {
    /// Directory to index
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Output JSON file
    #[arg(long, default_value = "index.json")]
    pub out: PathBuf,

    /// Maximum bytes read from each file
    #[arg(long = "max", value_name = "BYTES", default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: u64,

    /// Comma-separated text extensions
    #[arg(long, default_value = DEFAULT_INCLUDE)]
    pub include: String,

    /// Per-file timeout for the LLM call
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Summarization provider: openai, ollama or none
    #[arg(long, env = "LLM_PROVIDER", value_parser = parse_provider, default_value = "openai")]
    pub provider: Provider,

    /// Model identifier (defaults per provider)
    #[arg(long, env = "LLM_MODEL")]
    pub model: Option<String>,

    /// API key for the chat-completion provider
    #[arg(long, env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completion endpoint
    #[arg(long, env = "OPENAI_BASE", default_value = DEFAULT_OPENAI_BASE)]
    pub openai_base: String,

    /// Base URL of the local generate endpoint
    #[arg(long, env = "OLLAMA_BASE", default_value = DEFAULT_OLLAMA_BASE)]
    pub ollama_base: String,

    /// Log per-file progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve flags and environment into a run configuration
    pub fn into_config(self) -> Config {
        let model = self
            .model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| self.provider.default_model().to_string());

        Config {
            root: self.dir,
            output: self.out,
            scan: ScanOptions {
                include: ExtensionSet::parse(&self.include),
                max_bytes: self.max_bytes,
                timeout: Duration::from_secs(self.timeout_secs),
            },
            backend: BackendConfig {
                provider: self.provider,
                model,
                api_key: self.api_key,
                openai_base: non_blank_or(self.openai_base, DEFAULT_OPENAI_BASE),
                ollama_base: non_blank_or(self.ollama_base, DEFAULT_OLLAMA_BASE),
            },
        }
    }
}

/// Case-insensitive provider name; blank means the default provider
fn parse_provider(value: &str) -> Result<Provider, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Provider::OpenAi);
    }
    Provider::from_str(value, true)
        .map_err(|_| format!("unknown provider '{}' (expected openai, ollama or none)", value))
}

fn non_blank_or(value: String, default: &str) -> String {
    if value.trim().is_empty() { default.to_string() } else { value }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.into_config();
    let count = index_directory(&config)?;

    println!("Wrote {} items to {}", count, config.output.display());
    Ok(())
}

/// Build the index for `config` and write it; returns the item count
pub fn index_directory(config: &Config) -> Result<usize> {
    let backend = Backend::from_config(&config.backend)?;
    let model = backend.effective_model(&config.backend.model);
    info!(
        "Indexing {} with {} backend (provider {})",
        config.root.display(),
        backend.name(),
        config.backend.provider.as_str()
    );

    let index = build_index(&config.root, &config.scan, &backend, model)?;
    write_index(&config.output, &index)?;

    Ok(index.items.len())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
