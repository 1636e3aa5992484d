//! Companion-file dedup utility
//!
//! An independent batch transform over a second CSV keyed by the same `id`
//! field: drop duplicate rows keeping the first occurrence per id, report
//! which ids in the known contiguous range are absent, and rewrite the file
//! deduplicated. Shares no state with the statistics engine.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Summary of one dedup pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupReport {
    /// Rows kept after removing duplicates (header excluded)
    pub kept: usize,
    /// Duplicate rows dropped
    pub removed: usize,
    /// Ids in `[1, max_id]` with no row at all, ascending
    pub missing_ids: Vec<u32>,
}

/// Deduplicate `path` in place and report missing ids in `[1, max_id]`
pub fn dedup_file(path: &Path, max_id: u32) -> Result<DedupReport> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut lines = contents.lines();
    let header = lines
        .next()
        .context("File is empty; expected a header line")?;

    let mut seen_ids: HashSet<u32> = HashSet::new();
    let mut kept_lines: Vec<&str> = Vec::new();
    let mut removed = 0usize;
    for (lineno, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let id_field = line.split(',').next().unwrap_or("").trim();
        let id: u32 = id_field
            .parse()
            .with_context(|| format!("Invalid id {:?} on line {}", id_field, lineno + 2))?;
        if seen_ids.insert(id) {
            kept_lines.push(line);
        } else {
            removed += 1;
        }
    }

    let missing_ids: Vec<u32> = (1..=max_id).filter(|id| !seen_ids.contains(id)).collect();

    let mut output = String::with_capacity(contents.len());
    output.push_str(header);
    output.push('\n');
    output.push_str(&kept_lines.join("\n"));
    output.push('\n');
    fs::write(path, output)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;

    tracing::debug!(
        kept = kept_lines.len(),
        removed,
        missing = missing_ids.len(),
        "dedup pass complete"
    );
    Ok(DedupReport {
        kept: kept_lines.len(),
        removed,
        missing_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_keeps_first_occurrence_per_id() {
        let file = write_file("ID,Score\n1,480\n2,455\n1,999\n3,502\n2,400\n");
        let report = dedup_file(file.path(), 3).unwrap();
        assert_eq!(report.kept, 3);
        assert_eq!(report.removed, 2);
        assert!(report.missing_ids.is_empty());

        let rewritten = fs::read_to_string(file.path()).unwrap();
        assert_eq!(rewritten, "ID,Score\n1,480\n2,455\n3,502\n");
    }

    #[test]
    fn test_reports_missing_ids_in_range() {
        let file = write_file("ID,Score\n1,480\n3,502\n5,430\n");
        let report = dedup_file(file.path(), 6).unwrap();
        assert_eq!(report.missing_ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let file = write_file("ID,Score\n2,455\n2,400\n1,480\n");
        dedup_file(file.path(), 2).unwrap();
        let once = fs::read_to_string(file.path()).unwrap();
        let report = dedup_file(file.path(), 2).unwrap();
        assert_eq!(report.removed, 0);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), once);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_file("");
        assert!(dedup_file(file.path(), 10).is_err());
    }

    #[test]
    fn test_non_numeric_id_is_an_error() {
        let file = write_file("ID,Score\nabc,480\n");
        let err = dedup_file(file.path(), 10).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
