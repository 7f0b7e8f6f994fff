//! Report export.
//!
//! [`GpaReport`] re-derives the aggregate for a module list and lays it out as
//! data: a module breakdown, a summary block and the full grading-scale
//! reference. A [`ReportRenderer`] turns that data into a document; the
//! renderers here cover plain text, JSON and CSV.

pub mod render;
pub mod types;

pub use render::{CsvRenderer, JsonRenderer, ReportFormat, ReportRenderer, TextRenderer};
pub use types::{GpaReport, Period, ReportRow, ReportSummary, ScaleRow};

/// Subject prefix used in report file names unless configured otherwise.
pub const DEFAULT_SUBJECT: &str = "SLIIT_GPA";

/// Heading printed at the top of every report.
pub const REPORT_TITLE: &str = "SLIIT GPA Calculator Report";
