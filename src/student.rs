//! Student records and the CSV loader
//!
//! Input format: comma-separated text, one header line (ignored), then
//! `id,sex,teacher,status,score` per row. An empty `status` field denotes
//! the default ("normal") instructional status.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A single student record
///
/// Records are constructed once at load time and never mutated afterward.
/// `status` stays a free-form string rather than a closed enum so that an
/// unrecognized status surfaces as a validator partition mismatch instead of
/// a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub sex: String,
    pub teacher: String,
    pub status: String,
    pub score: i32,
}

impl Student {
    /// The SOL score as the numeric field selected by all tests
    pub fn sol_score(&self) -> f64 {
        f64::from(self.score)
    }
}

/// Load the full student roster from a CSV file
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read student data from {}", path.display()))?;
    let students = parse_students(&contents)
        .with_context(|| format!("Malformed student data in {}", path.display()))?;
    tracing::debug!(count = students.len(), "loaded student records");
    Ok(students)
}

/// Parse CSV contents, skipping the header line
pub fn parse_students(contents: &str) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    for (lineno, line) in contents.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let student =
            parse_row(line).with_context(|| format!("Invalid record on line {}", lineno + 1))?;
        students.push(student);
    }
    Ok(students)
}

fn parse_row(line: &str) -> Result<Student> {
    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != 5 {
        anyhow::bail!("Expected 5 comma-separated fields, got {}", tokens.len());
    }
    let id: u32 = tokens[0]
        .trim()
        .parse()
        .with_context(|| format!("Invalid id field: {:?}", tokens[0]))?;
    let score: i32 = tokens[4]
        .trim()
        .parse()
        .with_context(|| format!("Invalid score field: {:?}", tokens[4]))?;
    Ok(Student {
        id,
        sex: tokens[1].to_string(),
        teacher: tokens[2].to_string(),
        status: tokens[3].to_string(),
        score,
    })
}
