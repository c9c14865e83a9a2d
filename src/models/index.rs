use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub dir: PathBuf,
    pub generated: DateTime<Utc>,
    pub model: String,
    pub items: Vec<IndexItem>,
}

impl Index {
    /// Wrap the collected items with run metadata, stamped now
    pub fn new(dir: PathBuf, model: impl Into<String>, items: Vec<IndexItem>) -> Self {
        Self { dir, generated: Utc::now(), model: model.into(), items }
    }

    /// Number of items that recorded an error
    pub fn failed_count(&self) -> usize {
        self.items.iter().filter(|item| item.error.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexItem {
    pub path: String,
    pub size: u64,
    /// `None` when the file could not be stat-ed
    pub mod_time: Option<DateTime<Utc>>,
    pub summary: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IndexItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size: 0,
            mod_time: None,
            summary: String::new(),
            keywords: Vec::new(),
            error: None,
        }
    }

    /// Record a failure; any summary data is discarded so the item is never a mix
    pub fn fail(mut self, error: impl Into<String>) -> Self {
        self.summary.clear();
        self.keywords.clear();
        self.error = Some(error.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
