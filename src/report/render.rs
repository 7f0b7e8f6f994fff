use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

use crate::calculator::utility::{fmt2, fmt_number, truncate};
use crate::report::types::GpaReport;

/// Lays out a [`GpaReport`] as a document.
pub trait ReportRenderer {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, report: &GpaReport) -> Result<Vec<u8>>;
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Text => Box::new(TextRenderer),
            ReportFormat::Json => Box::new(JsonRenderer),
            ReportFormat::Csv => Box::new(CsvRenderer),
        }
    }
}

/// Plain-text report: breakdown table, summary, then the grading scale.
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &GpaReport) -> Result<Vec<u8>> {
        Ok(render_text(report)?.into_bytes())
    }
}

fn render_text(report: &GpaReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", report.title)?;
    writeln!(
        out,
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out)?;
    writeln!(out, "{}", report.period.label())?;
    writeln!(out)?;

    writeln!(
        out,
        "{:<32} {:<6} {:>8} {:>12}",
        "Module Name", "Grade", "Credits", "Grade Points"
    )?;
    writeln!(out, "{:-<32} {:-<6} {:->8} {:->12}", "", "", "", "")?;
    for row in &report.modules {
        writeln!(
            out,
            "{:<32} {:<6} {:>8} {:>12}",
            truncate(&row.name, 32),
            truncate(&row.grade, 6),
            fmt_number(row.credits),
            fmt2(row.grade_points)
        )?;
    }
    writeln!(out)?;

    let summary = &report.summary;
    writeln!(out, "Summary")?;
    writeln!(out, "Total Credits: {}", fmt_number(summary.total_credits))?;
    writeln!(
        out,
        "Total Grade Points: {}",
        fmt2(summary.total_grade_points)
    )?;
    writeln!(out, "GPA: {}", fmt2(summary.gpa))?;
    if let Some(message) = summary.message {
        writeln!(out, "{message}")?;
    }
    writeln!(out)?;

    writeln!(out, "SLIIT Grading Scale")?;
    writeln!(out, "{:<6} {:>9} {:>12}", "Grade", "GPA Value", "Marks Range")?;
    writeln!(out, "{:-<6} {:->9} {:->12}", "", "", "")?;
    for row in &report.scale {
        writeln!(
            out,
            "{:<6} {:>9} {:>12}",
            row.grade,
            fmt_number(row.gpa_value),
            row.marks_range
        )?;
    }

    Ok(out)
}

/// Pretty-printed JSON of the whole report.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, report: &GpaReport) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(report)?)
    }
}

/// Module breakdown only, as the report table shows it.
pub struct CsvRenderer;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Module Name")]
    name: &'a str,
    #[serde(rename = "Grade")]
    grade: &'a str,
    #[serde(rename = "Credits")]
    credits: String,
    #[serde(rename = "Grade Points")]
    grade_points: String,
}

impl ReportRenderer for CsvRenderer {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &GpaReport) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for row in &report.modules {
            writer.serialize(CsvRow {
                name: &row.name,
                grade: &row.grade,
                credits: fmt_number(row.credits),
                grade_points: fmt2(row.grade_points),
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to finish CSV report: {}", e.error()))
    }
}
