//! Grade service
//!
//! Bridges stored grade entries and the pure aggregation engine in
//! [`crate::core::gpa`].

use crate::core::gpa::{self, WeightedGrade};
use crate::core::models::{Course, GradeEntry};
use crate::core::store::RecordStore;

/// CRUD plus GPA aggregation for grade entries
pub struct GradeService<S: RecordStore<GradeEntry>> {
    store: S,
}

impl<S: RecordStore<GradeEntry>> GradeService<S> {
    /// Create a service over the given store adapter
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All grade entries
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<GradeEntry>, String> {
        self.store.list().map_err(|e| e.to_string())
    }

    /// All grade entries for one course, in store order
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn list_by_course(&self, course_id: u32) -> Result<Vec<GradeEntry>, String> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|entry| entry.course_id == course_id)
            .collect())
    }

    /// Record a letter grade for a course
    ///
    /// The grade point is derived from the letter before storing, so the two
    /// can never disagree. Unknown letters resolve to 0.0 like everywhere
    /// else; pass the letter through
    /// [`gpa::strict_grade_point_of`] first when rejection is wanted.
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn create(&self, course_id: u32, grade: &str, credits: f64) -> Result<GradeEntry, String> {
        let entry = GradeEntry::new(course_id, grade.to_string(), credits);
        self.store.create(entry).map_err(|e| e.to_string())
    }

    /// Remove the grade entry with `id`
    ///
    /// # Errors
    /// Returns an error if no entry has `id`.
    pub fn delete(&self, id: u32) -> Result<(), String> {
        self.store.delete(id).map_err(|e| e.to_string())
    }

    /// Credit-weighted GPA of the given entries
    ///
    /// An empty slice falls back to every stored entry, preserving the
    /// behavior of the legacy grade service.
    ///
    /// # Errors
    /// Returns an error if the fallback listing fails.
    pub fn calculate_gpa(&self, entries: &[GradeEntry]) -> Result<f64, String> {
        let weighted: Vec<WeightedGrade> = if entries.is_empty() {
            self.list()?.iter().map(WeightedGrade::from).collect()
        } else {
            entries.iter().map(WeightedGrade::from).collect()
        };

        Ok(gpa::compute_weighted_average(&weighted))
    }

    /// GPA of the stored entries scoped to one semester
    ///
    /// `courses` supplies the course-lookup capability for scoping; entries
    /// referencing unknown courses are excluded.
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn semester_gpa(&self, courses: &[Course], semester: &str) -> Result<f64, String> {
        let entries = self.list()?;
        Ok(gpa::semester_gpa(&entries, courses, semester))
    }

    /// Total credits of the stored entries scoped to one semester
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn semester_credits(&self, courses: &[Course], semester: &str) -> Result<f64, String> {
        let entries = self.list()?;
        Ok(gpa::grades_for_semester(&entries, courses, semester)
            .iter()
            .map(|entry| entry.credits)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    fn service() -> GradeService<MemoryStore<GradeEntry>> {
        GradeService::new(MemoryStore::new())
    }

    fn course(id: u32, semester: &str) -> Course {
        let mut c = Course::new(
            format!("CS {id}"),
            format!("Course {id}"),
            semester.to_string(),
            4.0,
        );
        c.id = id;
        c
    }

    #[test]
    fn create_derives_grade_point() {
        let service = service();
        let entry = service.create(1, "B+", 3.0).expect("create");

        assert!((entry.grade_point - 3.3).abs() < f64::EPSILON);
        assert_eq!(entry.id, 1);
    }

    #[test]
    fn create_accepts_unknown_letters_as_zero() {
        let service = service();
        let entry = service.create(1, "Z", 3.0).expect("create");
        assert!(entry.grade_point.abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_gpa_over_explicit_entries() {
        let service = service();
        let entries = vec![
            GradeEntry::new(1, "A".to_string(), 4.0),
            GradeEntry::new(2, "C".to_string(), 1.0),
        ];

        // (16 + 2) / 5 = 3.6
        let gpa = service.calculate_gpa(&entries).expect("gpa");
        assert!((gpa - 3.6).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_gpa_falls_back_to_stored_entries() {
        let service = service();
        service.create(1, "A", 3.0).expect("create");
        service.create(2, "B", 3.0).expect("create");

        let gpa = service.calculate_gpa(&[]).expect("gpa");
        assert!((gpa - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_gpa_with_nothing_stored_is_zero() {
        let service = service();
        assert!(service.calculate_gpa(&[]).expect("gpa").abs() < f64::EPSILON);
    }

    #[test]
    fn semester_gpa_scopes_entries() {
        let service = service();
        let courses = vec![course(1, "Fall 2024"), course(2, "Spring 2025")];

        service.create(1, "A", 4.0).expect("create");
        service.create(2, "F", 4.0).expect("create");

        let fall = service.semester_gpa(&courses, "Fall 2024").expect("gpa");
        assert!((fall - 4.0).abs() < f64::EPSILON);

        let credits = service
            .semester_credits(&courses, "Fall 2024")
            .expect("credits");
        assert!((credits - 4.0).abs() < f64::EPSILON);
    }
}
