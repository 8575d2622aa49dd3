//! Gradebook file loader
//!
//! Parses a TOML gradebook document into the typed models and normalizes it:
//! missing record ids are assigned, and stored grade points that disagree
//! with the letter table are recomputed. Legacy `*_c` field spellings are
//! accepted here (via serde aliases on the models) and nowhere else.

use crate::core::models::{Assignment, Course, GradeEntry, Student};
use crate::core::store::Record;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// A full gradebook: every table the record-storage service holds
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Gradebook {
    /// Student records
    pub students: Vec<Student>,
    /// Course records
    pub courses: Vec<Course>,
    /// Assignment records
    pub assignments: Vec<Assignment>,
    /// Grade entries
    #[serde(alias = "gradeEntries")]
    pub grade_entries: Vec<GradeEntry>,
}

impl Gradebook {
    /// The distinct semester labels of the courses, in first-seen order
    #[must_use]
    pub fn semesters(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for course in &self.courses {
            if !labels.contains(&course.semester) {
                labels.push(course.semester.clone());
            }
        }
        labels
    }

    /// Resolve a course by id
    #[must_use]
    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }
}

/// Parse a gradebook TOML file
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn parse_gradebook_toml<P: AsRef<Path>>(path: P) -> Result<Gradebook, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_gradebook_str(&content)
}

/// Parse a gradebook from TOML source
///
/// # Errors
/// Returns an error if the document doesn't match the gradebook schema
pub fn parse_gradebook_str(content: &str) -> Result<Gradebook, Box<dyn Error>> {
    let mut book: Gradebook = toml::from_str(content)?;
    normalize(&mut book);
    Ok(book)
}

/// Assign missing ids and re-derive stale grade points
fn normalize(book: &mut Gradebook) {
    assign_missing_ids(&mut book.students);
    assign_missing_ids(&mut book.courses);
    assign_missing_ids(&mut book.assignments);
    assign_missing_ids(&mut book.grade_entries);

    for entry in &mut book.grade_entries {
        entry.sync_grade_point();
    }
}

/// Give every id-less record the next free id, in input order
fn assign_missing_ids<T: Record>(records: &mut [T]) {
    let mut next = records.iter().map(Record::id).max().unwrap_or(0) + 1;
    for record in records {
        if record.id() == 0 {
            record.set_id(next);
            next += 1;
        }
    }
}
