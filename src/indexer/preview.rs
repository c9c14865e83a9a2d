use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Stage of a preview read that failed
#[derive(Debug)]
pub enum PreviewError {
    Open(io::Error),
    Read(io::Error),
}

/// Read at most `max_bytes` from the start of `path`, decoded lossily as UTF-8
///
/// Content past the limit is silently left unread. The file handle is closed
/// before returning on every path.
pub fn read_preview(path: &Path, max_bytes: u64) -> Result<String, PreviewError> {
    let file = File::open(path).map_err(PreviewError::Open)?;
    let mut buffer = Vec::new();
    file.take(max_bytes).read_to_end(&mut buffer).map_err(PreviewError::Read)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_reads_whole_small_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello world").unwrap();

        assert_eq!(read_preview(&path, 1024).unwrap(), "hello world");
    }

    #[test]
    fn test_truncates_at_limit() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("big.log");
        fs::write(&path, "0123456789").unwrap();

        assert_eq!(read_preview(&path, 4).unwrap(), "0123");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("bytes.txt");
        fs::write(&path, [b'o', b'k', 0xFF, b'!']).unwrap();

        assert_eq!(read_preview(&path, 1024).unwrap(), "ok\u{FFFD}!");
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let result = read_preview(&dir.path().join("missing.txt"), 1024);
        assert!(matches!(result, Err(PreviewError::Open(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let result = read_preview(dir.path(), 1024);
        assert!(matches!(result, Err(PreviewError::Read(_))));
    }
}
