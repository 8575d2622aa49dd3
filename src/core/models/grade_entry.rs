//! Grade entry model

use crate::core::gpa;
use serde::{Deserialize, Serialize};

/// A letter grade recorded for one course
///
/// `grade_point` is a pure function of `grade` (see [`gpa::grade_point_of`]);
/// it is stored alongside the letter for display but recomputed whenever the
/// two could disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    /// Record identifier (assigned by the store when 0)
    #[serde(default, alias = "Id")]
    pub id: u32,

    /// Identifier of the associated course (opaque to the GPA engine)
    #[serde(alias = "courseId", alias = "courseId_c")]
    pub course_id: u32,

    /// Letter grade token (e.g., "A-", "B+")
    #[serde(alias = "grade_c")]
    pub grade: String,

    /// Credit hours this entry contributes to the weighted average
    #[serde(alias = "credits_c")]
    pub credits: f64,

    /// Grade point on the 4.0 scale, derived from `grade`
    #[serde(default, alias = "gradePoint", alias = "gradePoint_c")]
    pub grade_point: f64,
}

impl GradeEntry {
    /// Create a new grade entry, deriving the grade point from the letter
    #[must_use]
    pub fn new(course_id: u32, grade: String, credits: f64) -> Self {
        let grade_point = gpa::grade_point_of(&grade);
        Self {
            id: 0,
            course_id,
            grade,
            credits,
            grade_point,
        }
    }

    /// Recompute `grade_point` from the letter grade
    ///
    /// # Returns
    /// `true` if the stored value changed
    pub fn sync_grade_point(&mut self) -> bool {
        let expected = gpa::grade_point_of(&self.grade);
        if (self.grade_point - expected).abs() > f64::EPSILON {
            self.grade_point = expected;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_grade_point() {
        let entry = GradeEntry::new(1, "A-".to_string(), 4.0);
        assert!((entry.grade_point - 3.7).abs() < f64::EPSILON);
    }

    #[test]
    fn new_defaults_unknown_grade_to_zero() {
        let entry = GradeEntry::new(1, "Z".to_string(), 3.0);
        assert!(entry.grade_point.abs() < f64::EPSILON);
    }

    #[test]
    fn sync_fixes_stale_grade_point() {
        let mut entry = GradeEntry::new(1, "B".to_string(), 3.0);
        entry.grade_point = 1.0;

        assert!(entry.sync_grade_point());
        assert!((entry.grade_point - 3.0).abs() < f64::EPSILON);
        // Already in sync: nothing to do
        assert!(!entry.sync_grade_point());
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let entry: GradeEntry = toml::from_str(
            r#"
Id = 2
courseId_c = 5
grade_c = "B+"
credits_c = 3.0
gradePoint_c = 3.3
"#,
        )
        .expect("parse legacy grade entry");

        assert_eq!(entry.course_id, 5);
        assert_eq!(entry.grade, "B+");
        assert!((entry.grade_point - 3.3).abs() < f64::EPSILON);
    }
}
