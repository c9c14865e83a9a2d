use std::collections::BTreeSet;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use crate::utils::dotted_extension;

/// Case-insensitive set of file extensions, stored as `.ext`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Parse a comma-separated list such as `".txt, md,.LOG"`
    ///
    /// Blank entries are ignored and a missing leading dot is added.
    pub fn parse(csv: &str) -> Self {
        let extensions = csv
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                let ext = ext.to_lowercase();
                if ext.starts_with('.') { ext } else { format!(".{}", ext) }
            })
            .collect();
        Self { extensions }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether the file name of `path` ends in one of the allowed extensions
    pub fn matches(&self, path: &Path) -> bool {
        dotted_extension(path).is_some_and(|ext| self.extensions.contains(&ext))
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl FromStr for ExtensionSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
