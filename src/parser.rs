//! CSV parser for module lists.
//!
//! Expected header: `name,grade,credits`. A blank grade means "ungraded" and
//! credits are read leniently, so a half-filled sheet still loads.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::calculator::ModuleEntry;

#[derive(Debug, Deserialize)]
struct ModuleRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    grade: String,
    #[serde(default)]
    credits: String,
}

impl From<ModuleRow> for ModuleEntry {
    fn from(row: ModuleRow) -> Self {
        let grade = row.grade.trim();
        ModuleEntry {
            name: row.name.trim().to_string(),
            grade: (!grade.is_empty()).then(|| grade.to_string()),
            credits: parse_credits(&row.credits),
        }
    }
}

/// Reads module entries from any CSV source.
///
/// # Errors
///
/// Returns an error if the CSV is structurally invalid (e.g. a missing
/// header or ragged rows). Bad field values never error.
pub fn parse_modules<R: Read>(reader: R) -> Result<Vec<ModuleEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut modules = Vec::new();
    for (line, result) in rdr.deserialize::<ModuleRow>().enumerate() {
        let row: ModuleRow = result.with_context(|| format!("invalid module row {}", line + 1))?;
        modules.push(ModuleEntry::from(row));
    }

    debug!(modules = modules.len(), "Parsed module list");
    Ok(modules)
}

/// Reads module entries from a CSV file on disk.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_modules(path: &Path) -> Result<Vec<ModuleEntry>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open module list '{}'", path.display()))?;
    parse_modules(file)
}

/// Parses a credit value the way a browser number field is read:
/// the longest leading decimal number wins, anything unreadable is `0`.
///
/// `"3"` -> 3, `" 2.5 "` -> 2.5, `"4 credits"` -> 4, `"1e1"` -> 10,
/// `"Infinity"` -> infinity, `""` -> 0, `"abc"` -> 0.
pub fn parse_credits(raw: &str) -> f64 {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    if s[digits_start..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start || &s[digits_start..end] == "." {
        return 0.0;
    }

    // exponent counts only when at least one digit follows
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}
