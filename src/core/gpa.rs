//! Grade aggregation engine
//!
//! Maps letter grades to grade points on the fixed 4.0 scale, scopes grade
//! entries to a semester, and computes credit-weighted grade point averages.
//! Every function here is pure: no I/O, no shared state, total over its
//! inputs.

use crate::core::models::{Course, GradeEntry};

/// Fixed letter-grade to grade-point table on the 4.0 scale.
const GRADE_POINTS: [(&str, f64); 13] = [
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("D-", 0.7),
    ("F", 0.0),
];

/// One `(grade point, credit weight)` contribution to a weighted average
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedGrade {
    /// Grade point on the 4.0 scale
    pub grade_point: f64,
    /// Credit hours acting as the weight
    pub credit_weight: f64,
}

impl From<&GradeEntry> for WeightedGrade {
    fn from(entry: &GradeEntry) -> Self {
        Self {
            grade_point: entry.grade_point,
            credit_weight: entry.credits,
        }
    }
}

/// Look up the grade point for a letter grade.
///
/// Tokens outside the fixed table resolve to `0.0` rather than failing, so
/// aggregation is never interrupted by malformed input. Callers that need to
/// distinguish an explicit `F` from an unrecognized token should use
/// [`strict_grade_point_of`] instead.
#[must_use]
pub fn grade_point_of(letter: &str) -> f64 {
    GRADE_POINTS
        .iter()
        .find(|(l, _)| *l == letter)
        .map_or(0.0, |(_, points)| *points)
}

/// Look up the grade point for a letter grade, rejecting unknown tokens.
///
/// # Errors
///
/// Returns an error if `letter` is not one of the 13 valid letter grades.
pub fn strict_grade_point_of(letter: &str) -> Result<f64, String> {
    GRADE_POINTS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, points)| *points)
        .ok_or_else(|| format!("Unknown letter grade: '{letter}'"))
}

/// Narrow grade entries to those whose course belongs to `semester`.
///
/// The course list acts as the lookup capability for resolving each entry's
/// course reference. Entries whose course id cannot be resolved are excluded
/// rather than causing a failure. Input order is preserved.
#[must_use]
pub fn grades_for_semester<'a>(
    entries: &'a [GradeEntry],
    courses: &[Course],
    semester: &str,
) -> Vec<&'a GradeEntry> {
    entries
        .iter()
        .filter(|entry| {
            courses
                .iter()
                .find(|course| course.id == entry.course_id)
                .is_some_and(|course| course.semester == semester)
        })
        .collect()
}

/// Compute the credit-weighted grade point average of a set of entries.
///
/// `total = Σ(grade_point × credit_weight) / Σ(credit_weight)` when the
/// credit sum is positive, otherwise `0.0` (covers the empty and the
/// all-zero-credit cases without dividing by zero). The result is rounded to
/// two decimal places. Credit weights are taken as given; range validation is
/// the caller's concern.
#[must_use]
pub fn compute_weighted_average(entries: &[WeightedGrade]) -> f64 {
    let total_credits: f64 = entries.iter().map(|entry| entry.credit_weight).sum();
    if total_credits <= 0.0 {
        return 0.0;
    }

    let total_points: f64 = entries
        .iter()
        .map(|entry| entry.grade_point * entry.credit_weight)
        .sum();

    round_to_hundredths(total_points / total_credits)
}

/// Convenience: scope entries to a semester and compute their GPA in one call
#[must_use]
pub fn semester_gpa(entries: &[GradeEntry], courses: &[Course], semester: &str) -> f64 {
    let scoped: Vec<WeightedGrade> = grades_for_semester(entries, courses, semester)
        .into_iter()
        .map(WeightedGrade::from)
        .collect();
    compute_weighted_average(&scoped)
}

/// Round to exactly two decimal places (half away from zero, never truncated)
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
