//! Name extraction from CSV exports (class lists, LMS downloads).
//!
//! Only the first column matters. Quoting is not interpreted: a line is cut
//! at its first comma, so `"Doe, Jane"` yields `"Doe`.

use crate::core::error::DomainError;
use std::path::Path;

/// Extract one name per line from the first comma-delimited field.
///
/// Accepts `\n` and `\r\n` line endings. Fails when no names remain.
pub fn parse_csv_names(content: &str) -> Result<Vec<String>, DomainError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DomainError::ImportParseFailure(e.to_string()))?;
        if let Some(name) = record.get(0).map(str::trim)
            && !name.is_empty()
        {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(DomainError::ImportParseFailure("no names found".into()));
    }
    Ok(names)
}

/// Whether a file looks like a CSV export, judged by its extension.
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_field_only() {
        let names = parse_csv_names("Alice,10A,alice@example.com\nBob,10B\n").unwrap();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let names = parse_csv_names("Alice\r\n\r\n  Bob  ,x\r\n,orphan\r\nCarol").unwrap();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_quotes_are_not_interpreted() {
        let names = parse_csv_names("\"Doe, Jane\",A").unwrap();
        assert_eq!(names, vec!["\"Doe"]);
    }

    #[test]
    fn test_no_names_is_an_error() {
        let err = parse_csv_names("\n , \n,,\n").unwrap_err();
        assert_eq!(err, DomainError::ImportParseFailure("no names found".into()));
        assert!(parse_csv_names("").is_err());
    }

    #[test]
    fn test_is_csv_path() {
        assert!(is_csv_path(Path::new("class.csv")));
        assert!(is_csv_path(Path::new("/tmp/EXPORT.CSV")));
        assert!(!is_csv_path(Path::new("names.txt")));
        assert!(!is_csv_path(Path::new("csv")));
    }
}
