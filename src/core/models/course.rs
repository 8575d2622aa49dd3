//! Course model

use serde::{Deserialize, Serialize};

fn default_color() -> String {
    "#4f46e5".to_string()
}

/// Represents a course a student is enrolled in
///
/// Legacy records name some fields with a `_c` suffix (`code_c`,
/// `semester_c`, ...). Those spellings are accepted on deserialization only;
/// the canonical snake_case schema is the single source of truth everywhere
/// else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Record identifier (assigned by the store when 0)
    #[serde(default, alias = "Id")]
    pub id: u32,

    /// Course code (e.g., "CS 2510")
    #[serde(alias = "code_c")]
    pub code: String,

    /// Course name (e.g., "Fundamentals of Computer Science 2")
    #[serde(alias = "Name")]
    pub name: String,

    /// Semester/term label used for GPA scoping (e.g., "Fall 2024")
    #[serde(alias = "semester_c")]
    pub semester: String,

    /// Credit hours (can be fractional)
    #[serde(default, alias = "credits_c")]
    pub credits: f64,

    /// Display color as a hex string
    #[serde(default = "default_color", alias = "color_c")]
    pub color: String,

    /// Current grade percentage, 0 for a newly created course
    #[serde(default, alias = "currentGrade", alias = "currentGrade_c")]
    pub current_grade: f64,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Full course name
    /// * `semester` - Term label
    /// * `credits` - Credit hours (can be fractional)
    #[must_use]
    pub fn new(code: String, name: String, semester: String, credits: f64) -> Self {
        Self {
            id: 0,
            code,
            name,
            semester,
            credits,
            color: default_color(),
            current_grade: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CS 2510".to_string(),
            "Fundamentals of Computer Science 2".to_string(),
            "Fall 2024".to_string(),
            4.0,
        );

        assert_eq!(course.id, 0);
        assert_eq!(course.code, "CS 2510");
        assert_eq!(course.semester, "Fall 2024");
        assert!((course.credits - 4.0).abs() < f64::EPSILON);
        assert_eq!(course.color, "#4f46e5");
        assert!(course.current_grade.abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_canonical_fields() {
        let course: Course = toml::from_str(
            r#"
id = 3
code = "MATH 1342"
name = "Calculus 2"
semester = "Spring 2025"
credits = 4.0
"#,
        )
        .expect("parse course");

        assert_eq!(course.id, 3);
        assert_eq!(course.name, "Calculus 2");
        assert_eq!(course.color, "#4f46e5");
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let course: Course = toml::from_str(
            r#"
Id = 7
code_c = "PHYS 1151"
Name = "Physics 1"
semester_c = "Fall 2024"
credits_c = 3.0
currentGrade_c = 88.5
"#,
        )
        .expect("parse legacy course");

        assert_eq!(course.id, 7);
        assert_eq!(course.code, "PHYS 1151");
        assert_eq!(course.semester, "Fall 2024");
        assert!((course.current_grade - 88.5).abs() < f64::EPSILON);
    }
}
