//! Output formatting and persistence for calculation results.
//!
//! Supports debug logging, JSON logging, a terminal breakdown table and
//! saving a rendered report to disk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::calculator::utility::{fmt2, fmt_number, truncate};
use crate::calculator::{AggregateResult, ModuleEntry};
use crate::report::{GpaReport, ReportRenderer};

/// Logs an aggregate using Rust's debug pretty-print format.
pub fn print_pretty(result: &AggregateResult) {
    debug!("{:#?}", result);
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Formats the module breakdown followed by totals, GPA and feedback.
///
/// `labels` names each row (row ids in the shell, 1-based positions
/// otherwise) and must be aligned with `modules`.
pub fn format_breakdown(
    labels: &[String],
    modules: &[ModuleEntry],
    result: &AggregateResult,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>4}  {:<32} {:<6} {:>8} {:>12}\n",
        "#", "Module", "Grade", "Credits", "Grade Points"
    ));
    out.push_str(&format!(
        "{:->4}  {:-<32} {:-<6} {:->8} {:->12}\n",
        "", "", "", "", ""
    ));

    for ((label, module), grade_points) in labels
        .iter()
        .zip(modules)
        .zip(&result.per_module_grade_points)
    {
        out.push_str(&format!(
            "{:>4}  {:<32} {:<6} {:>8} {:>12}\n",
            label,
            truncate(&module.name, 32),
            truncate(module.grade.as_deref().unwrap_or("-"), 6),
            fmt_number(module.credits),
            fmt2(*grade_points)
        ));
    }

    out.push('\n');
    out.push_str(&format_totals(result));
    out
}

/// The summary block: total credits, GPA and the feedback message if any.
pub fn format_totals(result: &AggregateResult) -> String {
    let mut out = format!(
        "Total Credits: {}\nTotal Grade Points: {}\nGPA: {}\n",
        fmt_number(result.total_credits),
        fmt2(result.total_grade_points),
        fmt2(result.gpa)
    );
    if let Some(message) = result.feedback().message() {
        out.push_str(message);
        out.push('\n');
    }
    out
}

/// 1-based row positions, for tables that have no other row identity.
pub fn positional_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| i.to_string()).collect()
}

/// Renders `report` and writes it to `dir/{file_stem}.{ext}`.
///
/// Creates `dir` if it does not already exist and overwrites an existing
/// report of the same name.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn save_report(
    dir: &Path,
    report: &GpaReport,
    renderer: &dyn ReportRenderer,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create report directory '{}'", dir.display()))?;

    let path = dir.join(format!("{}.{}", report.file_stem(), renderer.extension()));
    let bytes = renderer.render(report)?;

    std::fs::write(&path, &bytes)
        .with_context(|| format!("failed to write report '{}'", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "Report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::report::{CsvRenderer, Period, TextRenderer};
    use chrono::{TimeZone, Utc};
    use std::env;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn modules() -> Vec<ModuleEntry> {
        vec![
            ModuleEntry::new("IT1010", Some("A"), 3.0),
            ModuleEntry::new("IT1020", Some("B"), 2.0),
        ]
    }

    fn report() -> GpaReport {
        GpaReport::build(
            &modules(),
            Period::new("Year 1", "Semester 1"),
            "SLIIT_GPA",
            Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&AggregateResult::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&compute(&modules())).unwrap();
    }

    #[test]
    fn test_format_breakdown() {
        let modules = modules();
        let result = compute(&modules);
        let text = format_breakdown(&positional_labels(modules.len()), &modules, &result);

        let lines: Vec<_> = text.lines().collect();
        assert!(lines[2].trim_start().starts_with("1  IT1010"));
        assert!(lines[2].ends_with("12.00"));
        assert!(lines[3].ends_with("6.00"));
        assert!(text.contains("Total Credits: 5\n"));
        assert!(text.contains("GPA: 3.60\n"));
        assert!(text.contains("Keep going"));
    }

    #[test]
    fn test_format_breakdown_truncates_long_names() {
        let modules = vec![
            ModuleEntry::new("IT1050 Object Oriented Concepts and Design", Some("A"), 4.0),
            ModuleEntry::new("IT1060", Some("Pass/Fail"), 2.0),
        ];
        let result = compute(&modules);
        let text = format_breakdown(&positional_labels(modules.len()), &modules, &result);

        let lines: Vec<_> = text.lines().collect();
        let width = lines[0].chars().count();
        assert_eq!(lines[2].chars().count(), width);
        assert_eq!(lines[3].chars().count(), width);
        assert!(lines[2].contains("IT1050 Object Oriented Concepts…"));
        assert!(lines[2].ends_with("16.00"));
        assert!(lines[3].contains("Pass/…"));
    }

    #[test]
    fn test_format_totals_empty() {
        let text = format_totals(&compute(&[]));
        assert_eq!(text, "Total Credits: 0\nTotal Grade Points: 0.00\nGPA: 0.00\n");
    }

    #[test]
    fn test_save_report_creates_dir_and_file() {
        let dir = temp_dir("gpa_calculator_test_save_text");
        let _ = fs::remove_dir_all(&dir);

        let path = save_report(&dir, &report(), &TextRenderer).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "SLIIT_GPA_Year_1_Semester_1_2026-01-15.txt"
        );
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("GPA: 3.60"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_report_overwrites() {
        let dir = temp_dir("gpa_calculator_test_save_csv");
        let _ = fs::remove_dir_all(&dir);

        save_report(&dir, &report(), &CsvRenderer).unwrap();
        let path = save_report(&dir, &report(), &CsvRenderer).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("Module Name")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_dir_all(&dir).unwrap();
    }
}
