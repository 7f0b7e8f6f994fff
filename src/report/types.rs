use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calculator::{FeedbackTier, ModuleEntry, compute};
use crate::report::REPORT_TITLE;
use crate::scale::GradeScale;

/// The academic period a report covers, e.g. `Year 1` / `Semester 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub year: String,
    pub semester: String,
}

impl Period {
    pub fn new(year: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            semester: semester.into(),
        }
    }

    /// Human-readable label, `Year 1 - Semester 2`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.year, self.semester)
    }

    /// Label safe for file names, `Year_1_Semester_2`.
    pub fn file_label(&self) -> String {
        format!("{}_{}", underscored(&self.year), underscored(&self.semester))
    }
}

/// One line of the module breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub grade: String,
    pub credits: f64,
    pub grade_points: f64,
}

/// One line of the grading-scale reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleRow {
    pub grade: &'static str,
    pub gpa_value: f64,
    pub marks_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_credits: f64,
    pub total_grade_points: f64,
    pub gpa: f64,
    pub feedback: FeedbackTier,
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaReport {
    pub title: String,
    pub subject: String,
    pub period: Period,
    pub generated_at: DateTime<Utc>,
    pub modules: Vec<ReportRow>,
    pub summary: ReportSummary,
    pub scale: Vec<ScaleRow>,
}

impl GpaReport {
    /// Builds a report for `modules`, recomputing the aggregate.
    ///
    /// Blank names are shown as `N/A` and missing grades as `-`.
    pub fn build(
        modules: &[ModuleEntry],
        period: Period,
        subject: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let result = compute(modules);

        let rows = modules
            .iter()
            .zip(&result.per_module_grade_points)
            .map(|(module, grade_points)| ReportRow {
                name: non_blank(&module.name, "N/A"),
                grade: non_blank(module.grade.as_deref().unwrap_or(""), "-"),
                credits: module.credits,
                grade_points: *grade_points,
            })
            .collect();

        let scale = GradeScale::standard()
            .entries()
            .iter()
            .map(|entry| ScaleRow {
                grade: entry.grade,
                gpa_value: entry.gpa_value,
                marks_range: entry.marks_range(),
            })
            .collect();

        let feedback = result.feedback();

        GpaReport {
            title: REPORT_TITLE.to_string(),
            subject: subject.to_string(),
            period,
            generated_at,
            modules: rows,
            summary: ReportSummary {
                total_credits: result.total_credits,
                total_grade_points: result.total_grade_points,
                gpa: result.gpa,
                feedback,
                message: feedback.message(),
            },
            scale,
        }
    }

    /// `{subject}_{period}_{YYYY-MM-DD}`, without an extension.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_{}",
            underscored(&self.subject),
            self.period.file_label(),
            self.generated_at.format("%Y-%m-%d")
        )
    }
}

fn non_blank(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn underscored(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 9, 14, 30, 0).unwrap()
    }

    fn sample_modules() -> Vec<ModuleEntry> {
        vec![
            ModuleEntry::new("IT1010 Programming", Some("A"), 3.0),
            ModuleEntry::new("", Some("B"), 2.0),
            ModuleEntry::new("Project", None, 4.0),
        ]
    }

    #[test]
    fn test_period_labels() {
        let period = Period::new("Year 1", "Semester 2");
        assert_eq!(period.label(), "Year 1 - Semester 2");
        assert_eq!(period.file_label(), "Year_1_Semester_2");
    }

    #[test]
    fn test_file_stem() {
        let report = GpaReport::build(
            &sample_modules(),
            Period::new("Year 2", "Semester 1"),
            "SLIIT_GPA",
            at(),
        );
        assert_eq!(report.file_stem(), "SLIIT_GPA_Year_2_Semester_1_2026-03-09");
    }

    #[test]
    fn test_file_stem_collapses_whitespace() {
        let report = GpaReport::build(&[], Period::new(" Year  3 ", "Semester 1"), "My GPA", at());
        assert_eq!(report.file_stem(), "My_GPA_Year_3_Semester_1_2026-03-09");
    }

    #[test]
    fn test_build_rows_and_summary() {
        let report = GpaReport::build(
            &sample_modules(),
            Period::new("Year 1", "Semester 1"),
            "SLIIT_GPA",
            at(),
        );

        assert_eq!(report.title, REPORT_TITLE);
        assert_eq!(report.modules.len(), 3);
        assert_eq!(report.modules[0].grade_points, 12.0);
        assert_eq!(report.modules[1].name, "N/A");
        assert_eq!(report.modules[1].grade_points, 6.0);
        assert_eq!(report.modules[2].grade, "-");
        assert_eq!(report.modules[2].credits, 4.0);
        assert_eq!(report.modules[2].grade_points, 0.0);

        assert_eq!(report.summary.total_credits, 5.0);
        assert_eq!(report.summary.total_grade_points, 18.0);
        assert_eq!(report.summary.feedback, FeedbackTier::Encouragement);
        assert!(report.summary.message.is_some());
    }

    #[test]
    fn test_build_includes_full_scale() {
        let report = GpaReport::build(&[], Period::new("Year 1", "Semester 1"), "S", at());

        assert_eq!(report.scale.len(), 12);
        assert_eq!(report.scale[0].grade, "A+");
        assert_eq!(report.scale[0].marks_range, "90–100");
        assert_eq!(report.scale[11].grade, "E");
        assert_eq!(report.summary.feedback, FeedbackTier::None);
        assert!(report.summary.message.is_none());
    }
}
