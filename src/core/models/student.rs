//! Student model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const fn default_year() -> u8 {
    1
}

/// Represents a student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Record identifier (assigned by the store when 0)
    #[serde(default, alias = "Id")]
    pub id: u32,

    /// Full name
    #[serde(alias = "Name")]
    pub name: String,

    /// Email address (unique across students)
    #[serde(alias = "email_c")]
    pub email: String,

    /// Institutional student ID (unique across students)
    #[serde(alias = "studentId", alias = "studentId_c")]
    pub student_id: String,

    /// Declared major (may be empty)
    #[serde(default, alias = "major_c")]
    pub major: String,

    /// Year of study, 1-based
    #[serde(default = "default_year", alias = "year_c")]
    pub year: u8,

    /// Stored grade point average on the 4.0 scale
    #[serde(default, alias = "gpa_c")]
    pub gpa: f64,

    /// Creation timestamp
    #[serde(default = "Utc::now", alias = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp
    #[serde(default = "Utc::now", alias = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student record stamped with the current time
    #[must_use]
    pub fn new(name: String, email: String, student_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            student_id,
            major: String::new(),
            year: default_year(),
            gpa: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new(
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
            "S001".to_string(),
        );

        assert_eq!(student.year, 1);
        assert!(student.gpa.abs() < f64::EPSILON);
        assert!(student.major.is_empty());
        assert_eq!(student.created_at, student.updated_at);
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let student: Student = toml::from_str(
            r#"
Id = 9
Name = "Grace Hopper"
email_c = "grace@example.edu"
studentId_c = "S002"
major_c = "Computer Science"
year_c = 3
gpa_c = 3.9
"#,
        )
        .expect("parse legacy student");

        assert_eq!(student.id, 9);
        assert_eq!(student.student_id, "S002");
        assert_eq!(student.year, 3);
        assert!((student.gpa - 3.9).abs() < f64::EPSILON);
    }
}
