//! LLM File Indexer - Build a searchable JSON index of text files
//!
//! This library walks a directory tree and records, for every file whose
//! extension is in an allow-set, its size, modification time and a short
//! summary with keywords. It supports:
//!
//! - Pluggable summarization backends (OpenAI-compatible chat, local generate, none)
//! - Robust extraction of the `{summary, keywords}` payload from chatty model output
//! - Per-file fault isolation: a failing file or backend call never aborts the run
//! - Atomic index writes (temp file + rename)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use llm_file_indexer::{FallbackSummarizer, ScanOptions, build_index, write_index};
//!
//! let index = build_index(Path::new("notes"), &ScanOptions::default(), &FallbackSummarizer, "none")?;
//! write_index(Path::new("index.json"), &index)?;
//! println!("Indexed {} files", index.items.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod summarizer;
pub mod utils;

// Re-export commonly used types
pub use config::{BackendConfig, Config, ExtensionSet, Provider, ScanOptions};
pub use index_storage::write_index;
pub use indexer::build_index;
pub use models::{Index, IndexItem};
pub use summarizer::{Backend, FallbackSummarizer, Summarizer, Summary, extract_summary};
