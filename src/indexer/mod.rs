//! Directory traversal and index aggregation
//!
//! # Error Handling Strategy
//!
//! Every matched file yields exactly one item, whatever happens to it:
//!
//! - **Traversal errors**: unreadable directory entries are logged and skipped; they
//!   never abort the walk and never produce an item.
//!
//! - **File-level errors**: stat, open and read failures are recorded on that file's
//!   item and processing moves on to the next file.
//!
//! - **Backend errors**: transport, HTTP, envelope and payload failures are recorded
//!   on the item, which keeps the size and modification time already captured.
//!
//! - **Summary reporting**: a closing log line gives item and failure counts.
//!
//! Only the final index write can fail a run; see [`crate::index_storage`].

pub mod builder;
pub mod preview;

pub use builder::{build_index, collect_items};
pub use preview::read_preview;
