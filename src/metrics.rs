//! Plaintext metrics file helpers.
//! The format is one `name value` pair per line; blank lines and `#` comments
//! are skipped. A file that has never been written reads as an empty map.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metrics file unreadable: {0}")]
    Read(String),
    #[error("metrics file unwritable: {0}")]
    Write(String),
    #[error("line {0} is not a `name value` pair: {1}")]
    Malformed(usize, String),
}

/// Loads every metric from the file, keyed by name.
pub fn load(path: &Path) -> Result<BTreeMap<String, f64>, MetricsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(e) => return Err(MetricsError::Read(format!("{e}"))),
    };

    let mut metrics = BTreeMap::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let (name, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => (name, value),
            _ => return Err(MetricsError::Malformed(idx + 1, raw.to_string())),
        };
        let value: f64 = value
            .parse()
            .map_err(|_| MetricsError::Malformed(idx + 1, raw.to_string()))?;
        metrics.insert(name.to_string(), value);
    }
    Ok(metrics)
}

/// Fetches a single named metric, if present.
pub fn fetch(path: &Path, name: &str) -> Result<Option<f64>, MetricsError> {
    Ok(load(path)?.get(name).copied())
}

/// Rewrites the metrics file, one `name value` line per metric, sorted by
/// name so rewrites are diffable.
pub fn store(path: &Path, metrics: &BTreeMap<String, f64>) -> Result<(), MetricsError> {
    let mut content = String::new();
    for (name, value) in metrics {
        content.push_str(name);
        content.push(' ');
        content.push_str(&value.to_string());
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| MetricsError::Write(format!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::{fetch, load, store, MetricsError};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("tempdir should be creatable");
        let metrics = load(&dir.path().join("metrics")).expect("load should succeed");
        assert!(metrics.is_empty());
    }

    #[test]
    fn stores_and_reloads_metrics() {
        let dir = tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("metrics");

        let mut metrics = BTreeMap::new();
        metrics.insert("requests".to_string(), 42.0);
        metrics.insert("error_rate".to_string(), 0.25);
        store(&path, &metrics).expect("store should succeed");

        let reloaded = load(&path).expect("load should succeed");
        assert_eq!(reloaded, metrics);
        assert_eq!(fetch(&path, "requests").expect("fetch should succeed"), Some(42.0));
        assert_eq!(fetch(&path, "absent").expect("fetch should succeed"), None);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let dir = tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("metrics");
        std::fs::write(&path, "# build counters\n\nbuilds 3\n").expect("write should succeed");

        let metrics = load(&path).expect("load should succeed");
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.get("builds"), Some(&3.0));
    }

    #[test]
    fn malformed_lines_report_their_line_number() {
        let dir = tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("metrics");
        std::fs::write(&path, "cpu 1.5\nbogus\n").expect("write should succeed");

        let err = load(&path).expect_err("load should fail");
        match err {
            MetricsError::Malformed(line, content) => {
                assert_eq!(line, 2);
                assert_eq!(content, "bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
