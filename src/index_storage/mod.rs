//! Index persistence
//!
//! The index is written as indented JSON to `<out>.tmp` beside the destination
//! and renamed over it, so readers never observe a partial file and a failed
//! write leaves any previous index untouched.

pub mod persistence;

pub use persistence::{temp_path, write_index};
