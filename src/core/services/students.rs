//! Student service

use crate::core::models::Student;
use crate::core::store::RecordStore;
use chrono::Utc;

/// CRUD operations for students, with uniqueness validation
pub struct StudentService<S: RecordStore<Student>> {
    store: S,
}

impl<S: RecordStore<Student>> StudentService<S> {
    /// Create a service over the given store adapter
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All students
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<Student>, String> {
        self.store.list().map_err(|e| e.to_string())
    }

    /// One student by id
    ///
    /// # Errors
    /// Returns an error if no student has `id`.
    pub fn get(&self, id: u32) -> Result<Student, String> {
        self.store.get(id).map_err(|e| e.to_string())
    }

    /// Add a student
    ///
    /// Required fields are trimmed; creation and update timestamps are set to
    /// now.
    ///
    /// # Errors
    /// Returns an error if a required field is blank or the student ID or
    /// email is already taken.
    pub fn create(&self, mut student: Student) -> Result<Student, String> {
        trim_fields(&mut student);
        self.validate(&student, None)?;

        let now = Utc::now();
        student.created_at = now;
        student.updated_at = now;

        self.store.create(student).map_err(|e| e.to_string())
    }

    /// Replace the student with `id`
    ///
    /// The creation timestamp of the existing record is preserved; the update
    /// timestamp is refreshed.
    ///
    /// # Errors
    /// Returns an error if no student has `id`, a required field is blank, or
    /// the student ID or email collides with another record.
    pub fn update(&self, id: u32, mut student: Student) -> Result<Student, String> {
        let existing = self.get(id)?;

        trim_fields(&mut student);
        self.validate(&student, Some(id))?;

        student.created_at = existing.created_at;
        student.updated_at = Utc::now();

        self.store.update(id, student).map_err(|e| e.to_string())
    }

    /// Remove the student with `id`
    ///
    /// # Errors
    /// Returns an error if no student has `id`.
    pub fn delete(&self, id: u32) -> Result<(), String> {
        self.store.delete(id).map_err(|e| e.to_string())
    }

    /// Required-field and uniqueness checks; `exclude` skips the record being
    /// updated
    fn validate(&self, student: &Student, exclude: Option<u32>) -> Result<(), String> {
        if student.name.is_empty() {
            return Err("Student name is required".to_string());
        }
        if student.email.is_empty() {
            return Err("Email is required".to_string());
        }
        if student.student_id.is_empty() {
            return Err("Student ID is required".to_string());
        }

        let others = self.list()?;
        let others = others.iter().filter(|s| Some(s.id) != exclude);
        for other in others {
            if other.student_id == student.student_id {
                return Err("Student ID already exists".to_string());
            }
            if other.email == student.email {
                return Err("Email already exists".to_string());
            }
        }

        Ok(())
    }
}

fn trim_fields(student: &mut Student) {
    student.name = student.name.trim().to_string();
    student.email = student.email.trim().to_string();
    student.student_id = student.student_id.trim().to_string();
    student.major = student.major.trim().to_string();
}
