pub mod paths;

pub use paths::{dotted_extension, relative_slash_path};
