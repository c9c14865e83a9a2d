//! Index builder: walk, filter, preview, summarize, aggregate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanOptions;
use crate::indexer::preview::{PreviewError, read_preview};
use crate::models::{Index, IndexItem};
use crate::summarizer::{Deadline, Summarizer};
use crate::utils::relative_slash_path;

/// Build the index for every matching file under `root`
///
/// `root` is made absolute (without resolving symlinks) and recorded in the
/// index along with `model` and the generation time.
///
/// # Errors
///
/// Returns an error only if `root` cannot be made absolute. Per-file failures
/// are recorded on their items; see [`collect_items`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use llm_file_indexer::config::ScanOptions;
/// use llm_file_indexer::indexer::build_index;
/// use llm_file_indexer::summarizer::FallbackSummarizer;
///
/// let index = build_index(Path::new("docs"), &ScanOptions::default(), &FallbackSummarizer, "none")?;
/// println!("Indexed {} files", index.items.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_index(
    root: &Path,
    options: &ScanOptions,
    summarizer: &dyn Summarizer,
    model: &str,
) -> Result<Index> {
    let root = absolute_root(root)?;
    if !root.is_dir() {
        warn!("Root {} is not a readable directory; the index will be empty", root.display());
    }
    if options.include.is_empty() {
        warn!("No extensions to include; the index will be empty");
    } else {
        debug!(
            "Including {} extensions: {}",
            options.include.len(),
            options.include.iter().collect::<Vec<_>>().join(",")
        );
    }

    let items = collect_items(&root, options, summarizer, model);
    let index = Index::new(root, model, items);

    info!(
        "Indexed {} files ({} failed) with {} backend, model {}",
        index.items.len(),
        index.failed_count(),
        summarizer.name(),
        index.model
    );

    Ok(index)
}

/// Walk `root` depth-first and produce one item per matching regular file
///
/// Directories, non-regular files (FIFOs, sockets, devices, links to
/// directories), non-matching extensions and entries the walk cannot read
/// contribute nothing. Files are visited in file-name order within each
/// directory, one at a time.
pub fn collect_items(
    root: &Path,
    options: &ScanOptions,
    summarizer: &dyn Summarizer,
    model: &str,
) -> Vec<IndexItem> {
    let mut items = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() || !options.include.matches(entry.path()) {
            continue;
        }

        let Some(item) = index_file(root, entry.path(), options, summarizer, model) else {
            continue;
        };
        if let Some(error) = &item.error {
            warn!("{}: {}", item.path, error);
        }
        items.push(item);
    }

    items
}

/// Run the per-file stages; the first failing stage ends processing of this file
///
/// Returns `None` when `path` resolves to something other than a regular file.
fn index_file(
    root: &Path,
    path: &Path,
    options: &ScanOptions,
    summarizer: &dyn Summarizer,
    model: &str,
) -> Option<IndexItem> {
    let rel = relative_slash_path(root, path);
    debug!("Indexing {}", rel);
    let mut item = IndexItem::new(rel.as_str());

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => return Some(item.fail(format!("stat {}: {}", rel, e))),
    };
    if !metadata.is_file() {
        debug!("Skipping {}: not a regular file", rel);
        return None;
    }
    item.size = metadata.len();
    item.mod_time = metadata.modified().ok().map(DateTime::<Utc>::from);

    let preview = match read_preview(path, options.max_bytes) {
        Ok(preview) => preview,
        Err(PreviewError::Open(e)) => return Some(item.fail(format!("open {}: {}", rel, e))),
        Err(PreviewError::Read(e)) => return Some(item.fail(format!("read {}: {}", rel, e))),
    };

    let deadline = Deadline::after(options.timeout);
    let item = match summarizer.summarize(deadline, model, &rel, &preview) {
        Ok(summary) => {
            item.summary = summary.summary;
            item.keywords = summary.keywords;
            item
        }
        Err(e) => item.fail(format!("summarization failed: {}", e)),
    };
    Some(item)
}

fn absolute_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root)
        .with_context(|| format!("Failed to resolve root directory: {}", root.display()))
}
