//! URL list loading from the newline-delimited input file.

use crate::SweepError;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Read the ordered URL list from `path`.
///
/// Each line is trimmed; blank lines and `#` comments are skipped. A missing
/// or unreadable file is fatal and aborts the run before any capture starts.
pub async fn read_urls(path: &Path) -> Result<Vec<String>, SweepError> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SweepError::InputNotFound(path.display().to_string())
        } else {
            SweepError::IoError(e.to_string())
        }
    })?;

    let urls = parse_url_lines(&content);
    debug!("Parsed {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Split file content into URL entries, preserving input order.
pub fn parse_url_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_preserves_order() {
        let urls = parse_url_lines("https://a.example\nhttps://b.example\nhttps://c.example\n");
        assert_eq!(
            urls,
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let urls = parse_url_lines("https://a.example\n\n# staging only\n  \nhttps://b.example");
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let urls = parse_url_lines("  https://a.example  \r\nhttps://b.example\r\n");
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[tokio::test]
    async fn test_read_urls_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://example.com").unwrap();
        writeln!(file, "https://example.org/path").unwrap();

        let urls = read_urls(file.path()).await.unwrap();
        assert_eq!(urls, vec!["https://example.com", "https://example.org/path"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_urls(&dir.path().join("urls")).await.unwrap_err();
        assert!(matches!(err, SweepError::InputNotFound(_)));
        assert!(err.is_fatal());
    }
}
