//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for directory trees to index
pub struct SourceDirBuilder {
    temp_dir: TempDir,
}

impl SourceDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file at `rel` (slash-separated), creating parent directories
    pub fn with_file(self, rel: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.temp_dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Add an empty directory at `rel`
    pub fn with_dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(rel)).expect("Failed to create dir");
        self
    }

    /// Add a symlink at `rel` pointing to `target` (relative to the root)
    #[cfg(unix)]
    pub fn with_symlink(self, rel: &str, target: &str) -> Self {
        let root = self.temp_dir.path();
        std::os::unix::fs::symlink(root.join(target), root.join(rel))
            .expect("Failed to create symlink");
        self
    }

    /// Add a named pipe at `rel`
    #[cfg(unix)]
    pub fn with_fifo(self, rel: &str) -> Self {
        let path = self.temp_dir.path().join(rel);
        let c_path = std::ffi::CString::new(path.to_string_lossy().as_bytes())
            .expect("Path contains NUL");
        // SAFETY: `c_path` is a valid NUL-terminated path that outlives the call
        let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o644) };
        assert_eq!(rc, 0, "Failed to create FIFO at {}", path.display());
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SourceDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Separate temp directory for output files
pub struct OutputDir {
    temp_dir: TempDir,
}

impl OutputDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn index_path(&self) -> PathBuf {
        self.temp_dir.path().join("index.json")
    }

    pub fn read_json(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.index_path()).expect("Failed to read index");
        serde_json::from_str(&content).expect("Index is not valid JSON")
    }
}

impl Default for OutputDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat-completion response whose reply content is `content`
pub fn chat_reply(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
}

/// Local-generate response whose reply text is `content`
pub fn generate_reply(content: &str) -> serde_json::Value {
    serde_json::json!({ "model": "llama3.1:8b", "response": content, "done": true })
}
