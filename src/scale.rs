//! The SLIIT grading scale.
//!
//! A fixed table mapping each letter grade to its grade-point value and the
//! inclusive marks range it covers. Entries are ordered by descending
//! grade-point value, which is also the order they are displayed in.

use serde::Serialize;

/// One row of the grading scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleEntry {
    pub grade: &'static str,
    pub gpa_value: f64,
    pub min_marks: u8,
    pub max_marks: u8,
}

impl ScaleEntry {
    /// Marks range as shown in reports, e.g. `90–100`.
    pub fn marks_range(&self) -> String {
        format!("{}–{}", self.min_marks, self.max_marks)
    }

    pub fn contains_marks(&self, marks: u8) -> bool {
        (self.min_marks..=self.max_marks).contains(&marks)
    }
}

/// Highest grade-point value on the scale.
pub const MAX_GRADE_POINT: f64 = 4.0;

#[rustfmt::skip]
static SLIIT_ENTRIES: &[ScaleEntry] = &[
    ScaleEntry { grade: "A+", gpa_value: 4.0, min_marks: 90, max_marks: 100 },
    ScaleEntry { grade: "A", gpa_value: 4.0, min_marks: 80, max_marks: 89 },
    ScaleEntry { grade: "A-", gpa_value: 3.7, min_marks: 75, max_marks: 79 },
    ScaleEntry { grade: "B+", gpa_value: 3.3, min_marks: 70, max_marks: 74 },
    ScaleEntry { grade: "B", gpa_value: 3.0, min_marks: 65, max_marks: 69 },
    ScaleEntry { grade: "B-", gpa_value: 2.7, min_marks: 60, max_marks: 64 },
    ScaleEntry { grade: "C+", gpa_value: 2.3, min_marks: 55, max_marks: 59 },
    ScaleEntry { grade: "C", gpa_value: 2.0, min_marks: 45, max_marks: 54 },
    ScaleEntry { grade: "C-", gpa_value: 1.7, min_marks: 40, max_marks: 44 },
    ScaleEntry { grade: "D+", gpa_value: 1.3, min_marks: 35, max_marks: 39 },
    ScaleEntry { grade: "D", gpa_value: 1.0, min_marks: 30, max_marks: 34 },
    ScaleEntry { grade: "E", gpa_value: 0.0, min_marks: 0, max_marks: 29 },
];

static SLIIT_SCALE: GradeScale = GradeScale {
    entries: SLIIT_ENTRIES,
};

/// Immutable grade lookup table.
#[derive(Debug)]
pub struct GradeScale {
    entries: &'static [ScaleEntry],
}

impl GradeScale {
    /// The institutional scale used for every calculation.
    pub fn standard() -> &'static GradeScale {
        &SLIIT_SCALE
    }

    /// Returns the entry for `grade`, or `None` if it is not on the scale.
    ///
    /// Keys are matched exactly: `"a+"` and `" A+"` are unknown grades.
    pub fn lookup(&self, grade: &str) -> Option<&'static ScaleEntry> {
        self.entries.iter().find(|e| e.grade == grade)
    }

    /// Grade-point value for `grade`, or `None` for an unknown grade.
    pub fn grade_point(&self, grade: &str) -> Option<f64> {
        self.lookup(grade).map(|e| e.gpa_value)
    }

    /// All entries, highest grade first.
    pub fn entries(&self) -> &'static [ScaleEntry] {
        self.entries
    }

    /// Grade names in display order, for building grade-choice inputs.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.grade)
    }

    /// The entry whose marks range contains `marks`. `None` above 100.
    pub fn grade_for_marks(&self, marks: u8) -> Option<&'static ScaleEntry> {
        self.entries.iter().find(|e| e.contains_marks(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_has_twelve_grades() {
        let keys: Vec<_> = GradeScale::standard().keys().collect();
        assert_eq!(
            keys,
            vec!["A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "E"]
        );
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let scale = GradeScale::standard();
        assert_eq!(scale.grade_point("A-"), Some(3.7));
        assert_eq!(scale.grade_point("E"), Some(0.0));
        assert_eq!(scale.grade_point("F"), None);
        assert_eq!(scale.grade_point("a+"), None);
        assert_eq!(scale.grade_point(""), None);
    }

    #[test]
    fn test_marks_ranges_partition_0_to_100() {
        let scale = GradeScale::standard();
        for marks in 0..=100u8 {
            let hits = scale
                .entries()
                .iter()
                .filter(|e| e.contains_marks(marks))
                .count();
            assert_eq!(hits, 1, "marks {marks} covered {hits} times");
        }
    }

    #[test]
    fn test_entries_descend_by_gpa_value() {
        let entries = GradeScale::standard().entries();
        for pair in entries.windows(2) {
            assert!(pair[0].gpa_value >= pair[1].gpa_value);
        }
        assert_eq!(entries[0].gpa_value, MAX_GRADE_POINT);
    }

    #[test]
    fn test_grade_for_marks_boundaries() {
        let scale = GradeScale::standard();
        assert_eq!(scale.grade_for_marks(100).unwrap().grade, "A+");
        assert_eq!(scale.grade_for_marks(90).unwrap().grade, "A+");
        assert_eq!(scale.grade_for_marks(89).unwrap().grade, "A");
        assert_eq!(scale.grade_for_marks(75).unwrap().grade, "A-");
        assert_eq!(scale.grade_for_marks(54).unwrap().grade, "C");
        assert_eq!(scale.grade_for_marks(45).unwrap().grade, "C");
        assert_eq!(scale.grade_for_marks(29).unwrap().grade, "E");
        assert_eq!(scale.grade_for_marks(0).unwrap().grade, "E");
        assert!(scale.grade_for_marks(101).is_none());
    }

    #[test]
    fn test_marks_range_display() {
        let entry = GradeScale::standard().lookup("B+").unwrap();
        assert_eq!(entry.marks_range(), "70–74");
    }
}
