//! Data models for the persisted index.
//!
//! - [`Index`] - One run: root directory, generation time, model and items
//! - [`IndexItem`] - One matched file, either summarized or carrying an error
//!
//! Field names and the omission of `error` on success are the on-disk format
//! consumed downstream.

pub mod index;

pub use index::{Index, IndexItem};
