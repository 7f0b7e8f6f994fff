use crate::calculator::types::{AggregateResult, ModuleEntry};
use crate::scale::{GradeScale, MAX_GRADE_POINT};

/// Aggregates `modules` against the standard grading scale.
///
/// See [`compute_with`].
pub fn compute(modules: &[ModuleEntry]) -> AggregateResult {
    compute_with(modules, GradeScale::standard())
}

/// Computes credit totals, grade points and the weighted GPA.
///
/// A module contributes only when its grade is on `scale` and its credits
/// are strictly positive. Every other module reports `0.0` grade points and
/// is left out of both totals. The GPA is `0.0` when nothing contributed.
pub fn compute_with(modules: &[ModuleEntry], scale: &GradeScale) -> AggregateResult {
    let mut total_credits = 0.0;
    let mut total_grade_points = 0.0;
    let mut per_module_grade_points = Vec::with_capacity(modules.len());

    for module in modules {
        let grade_points = contribution(module, scale);

        if let Some(points) = grade_points {
            total_credits += module.credits;
            total_grade_points += points;
        }

        per_module_grade_points.push(grade_points.unwrap_or(0.0));
    }

    let gpa = if total_credits > 0.0 {
        // accumulated float error can land a hair outside the scale
        (total_grade_points / total_credits).clamp(0.0, MAX_GRADE_POINT)
    } else {
        0.0
    };

    AggregateResult {
        total_credits,
        total_grade_points,
        gpa,
        per_module_grade_points,
    }
}

/// Grade points for a single module, or `None` if it does not contribute.
fn contribution(module: &ModuleEntry, scale: &GradeScale) -> Option<f64> {
    if !(module.credits.is_finite() && module.credits > 0.0) {
        return None;
    }

    let value = scale.grade_point(module.grade.as_deref()?)?;
    Some(value * module.credits)
}
