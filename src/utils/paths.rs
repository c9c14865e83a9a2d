use std::path::{Component, Path};

/// Returns `path` relative to `root`, joined with `/` regardless of the host separator
///
/// Paths outside `root` are returned whole, still slash-joined.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use llm_file_indexer::utils::relative_slash_path;
///
/// let rel = relative_slash_path(Path::new("/data"), Path::new("/data/notes/a.txt"));
/// assert_eq!(rel, "notes/a.txt");
/// ```
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    if parts.is_empty() { ".".to_string() } else { parts.join("/") }
}

/// Returns the file name suffix starting at its final `.`, lowercased
///
/// A leading-dot name such as `.bashrc` is its own extension; a name without
/// any dot has none.
pub fn dotted_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let dot = name.rfind('.')?;
    Some(name[dot..].to_lowercase())
}
