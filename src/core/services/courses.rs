//! Course service

use crate::core::models::Course;
use crate::core::store::RecordStore;

/// CRUD operations for courses
pub struct CourseService<S: RecordStore<Course>> {
    store: S,
}

impl<S: RecordStore<Course>> CourseService<S> {
    /// Create a service over the given store adapter
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All courses
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<Course>, String> {
        self.store.list().map_err(|e| e.to_string())
    }

    /// One course by id
    ///
    /// # Errors
    /// Returns an error if no course has `id`.
    pub fn get(&self, id: u32) -> Result<Course, String> {
        self.store.get(id).map_err(|e| e.to_string())
    }

    /// Add a course; the current grade always starts at zero
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn create(&self, mut course: Course) -> Result<Course, String> {
        course.current_grade = 0.0;
        self.store.create(course).map_err(|e| e.to_string())
    }

    /// Replace the course with `id`
    ///
    /// # Errors
    /// Returns an error if no course has `id`.
    pub fn update(&self, id: u32, course: Course) -> Result<Course, String> {
        self.store.update(id, course).map_err(|e| e.to_string())
    }

    /// Remove the course with `id`
    ///
    /// # Errors
    /// Returns an error if no course has `id`.
    pub fn delete(&self, id: u32) -> Result<(), String> {
        self.store.delete(id).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    fn service() -> CourseService<MemoryStore<Course>> {
        CourseService::new(MemoryStore::new())
    }

    fn course(code: &str) -> Course {
        Course::new(
            code.to_string(),
            format!("{code} name"),
            "Fall 2024".to_string(),
            4.0,
        )
    }

    #[test]
    fn create_resets_current_grade() {
        let service = service();

        let mut input = course("CS 1800");
        input.current_grade = 97.0;

        let created = service.create(input).expect("create");
        assert!(created.current_grade.abs() < f64::EPSILON);
        assert_eq!(created.id, 1);
    }

    #[test]
    fn crud_round_trip() {
        let service = service();
        let created = service.create(course("CS 1800")).expect("create");

        let mut changed = created.clone();
        changed.name = "Discrete Structures".to_string();
        let updated = service.update(created.id, changed).expect("update");
        assert_eq!(updated.name, "Discrete Structures");

        assert_eq!(service.list().expect("list").len(), 1);
        service.delete(created.id).expect("delete");
        assert!(service.list().expect("list").is_empty());
    }

    #[test]
    fn missing_ids_surface_as_errors() {
        let service = service();
        assert_eq!(service.get(5), Err("course with id 5 not found".to_string()));
        assert!(service.delete(5).is_err());
    }
}
