//! Tab-delimited input reading
//!
//! The input file is tab-delimited text with no header row; the first
//! field of each line is treated as a page URL. Rows are returned in file
//! order, trimmed. Blank lines are skipped.

use crate::Result;
use std::fs::File;
use std::path::Path;

/// Reads the input file and returns the URL column, in row order.
///
/// # Arguments
///
/// * `path` - Path to the tab-delimited input file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row cannot be read.
pub fn read_input_rows(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let url = record.get(0).unwrap_or("").trim();
        if url.is_empty() {
            continue;
        }
        rows.push(url.to_string());
    }

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_input_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_single_column() {
        let file = create_input_file("https://en.wikipedia.org/wiki/A\nhttps://en.wikipedia.org/wiki/B\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(
            rows,
            vec![
                "https://en.wikipedia.org/wiki/A",
                "https://en.wikipedia.org/wiki/B"
            ]
        );
    }

    #[test]
    fn test_extra_columns_ignored() {
        let file = create_input_file("https://example.com/page\tSome Label\tmore\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(rows, vec!["https://example.com/page"]);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let file = create_input_file("  https://example.com/page  \tlabel\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(rows, vec!["https://example.com/page"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = create_input_file("https://example.com/a\n\nhttps://example.com/b\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let file = create_input_file("https://a.example\nhttps://b.example\nhttps://c.example\n");
        let rows = read_input_rows(file.path()).unwrap();
        assert_eq!(rows[0], "https://a.example");
        assert_eq!(rows[2], "https://c.example");
    }

    #[test]
    fn test_empty_file() {
        let file = create_input_file("");
        let rows = read_input_rows(file.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = read_input_rows(Path::new("/nonexistent/urls.tsv"));
        assert!(result.is_err());
    }
}
