//! Index persistence: atomic write via temp file + rename

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Index;

const TEMP_SUFFIX: &str = ".tmp";

/// Sibling temporary path used while writing `path`
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Write `index` to `path` atomically
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created or written, or
/// the rename fails. The temporary file is removed and `path` is left as it
/// was.
pub fn write_index(path: &Path, index: &Index) -> Result<()> {
    let temp = temp_path(path);

    if let Err(e) = write_temp(&temp, index) {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(e).with_context(|| {
            format!("Failed to rename {} to {}", temp.display(), path.display())
        });
    }

    debug!("Wrote index to {}", path.display());
    Ok(())
}

/// The file handle is closed before this returns
fn write_temp(temp: &Path, index: &Index) -> Result<()> {
    let file = File::create(temp)
        .with_context(|| format!("Failed to create temp file: {}", temp.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, index).context("Failed to serialize index")?;
    writer.write_all(b"\n").context("Failed to write index temp file")?;
    let file = writer.into_inner().context("Failed to flush index temp file")?;
    file.sync_all().context("Failed to sync index temp file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::models::IndexItem;

    fn sample_index() -> Index {
        let mut item = IndexItem::new("a.txt");
        item.size = 11;
        item.summary = "hello world".to_string();
        item.keywords = vec!["texto".to_string(), "sin-llm".to_string()];
        Index::new(PathBuf::from("/data"), "gpt-4o-mini", vec![item])
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(temp_path(Path::new("/out/index.json")), PathBuf::from("/out/index.json.tmp"));
    }

    #[test]
    fn test_write_index_round_trip() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out = dir.path().join("index.json");
        let index = sample_index();

        write_index(&out, &index).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("{\n  \"dir\""));
        assert!(content.ends_with("}\n"));
        let loaded: Index = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, index);
        assert!(!temp_path(&out).exists());
    }

    #[test]
    fn test_write_index_replaces_previous() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out = dir.path().join("index.json");
        fs::write(&out, "old").unwrap();

        write_index(&out, &sample_index()).unwrap();
        assert_ne!(fs::read_to_string(&out).unwrap(), "old");
    }

    #[test]
    fn test_failed_write_leaves_previous_index_untouched() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out = dir.path().join("index.json");
        fs::write(&out, "previous index").unwrap();
        // A directory squatting on the temp path makes the create fail
        fs::create_dir(temp_path(&out)).unwrap();

        let result = write_index(&out, &sample_index());
        assert!(result.is_err());
        assert_eq!(fs::read(&out).unwrap(), b"previous index");
    }

    #[test]
    fn test_missing_parent_directory_fails() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out = dir.path().join("missing").join("index.json");

        let err = write_index(&out, &sample_index()).unwrap_err();
        assert!(err.to_string().contains("Failed to create temp file"));
    }
}
