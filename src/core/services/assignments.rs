//! Assignment service

use crate::core::models::{Assignment, Status};
use crate::core::store::RecordStore;

/// CRUD operations for assignments
pub struct AssignmentService<S: RecordStore<Assignment>> {
    store: S,
}

impl<S: RecordStore<Assignment>> AssignmentService<S> {
    /// Create a service over the given store adapter
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All assignments
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<Assignment>, String> {
        self.store.list().map_err(|e| e.to_string())
    }

    /// One assignment by id
    ///
    /// # Errors
    /// Returns an error if no assignment has `id`.
    pub fn get(&self, id: u32) -> Result<Assignment, String> {
        self.store.get(id).map_err(|e| e.to_string())
    }

    /// All assignments belonging to one course, in store order
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn list_by_course(&self, course_id: u32) -> Result<Vec<Assignment>, String> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|assignment| assignment.course_id == course_id)
            .collect())
    }

    /// Add an assignment; new assignments always start pending and ungraded
    ///
    /// # Errors
    /// Returns an error if the store fails.
    pub fn create(&self, mut assignment: Assignment) -> Result<Assignment, String> {
        assignment.status = Status::Pending;
        assignment.grade = None;
        self.store.create(assignment).map_err(|e| e.to_string())
    }

    /// Replace the assignment with `id`
    ///
    /// # Errors
    /// Returns an error if no assignment has `id`.
    pub fn update(&self, id: u32, assignment: Assignment) -> Result<Assignment, String> {
        self.store.update(id, assignment).map_err(|e| e.to_string())
    }

    /// Remove the assignment with `id`
    ///
    /// # Errors
    /// Returns an error if no assignment has `id`.
    pub fn delete(&self, id: u32) -> Result<(), String> {
        self.store.delete(id).map_err(|e| e.to_string())
    }

    /// Flip the assignment between pending and completed
    ///
    /// # Errors
    /// Returns an error if no assignment has `id`.
    pub fn toggle_status(&self, id: u32) -> Result<Assignment, String> {
        let mut assignment = self.get(id)?;
        assignment.status = assignment.status.toggled();
        self.update(id, assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use chrono::NaiveDate;

    fn service() -> AssignmentService<MemoryStore<Assignment>> {
        AssignmentService::new(MemoryStore::new())
    }

    fn assignment(course_id: u32, title: &str) -> Assignment {
        let due = NaiveDate::from_ymd_opt(2024, 11, 15).expect("valid date");
        Assignment::new(course_id, title.to_string(), due)
    }

    #[test]
    fn create_forces_pending_and_ungraded() {
        let service = service();

        let mut input = assignment(1, "Problem Set 4");
        input.status = Status::Completed;
        input.grade = Some(95.0);

        let created = service.create(input).expect("create");
        assert_eq!(created.status, Status::Pending);
        assert!(created.grade.is_none());
    }

    #[test]
    fn list_by_course_filters() {
        let service = service();
        service.create(assignment(1, "a")).expect("create");
        service.create(assignment(2, "b")).expect("create");
        service.create(assignment(1, "c")).expect("create");

        let for_course_1 = service.list_by_course(1).expect("list");
        let titles: Vec<&str> = for_course_1.iter().map(|a| a.title.as_str()).collect();

        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let service = service();
        let created = service.create(assignment(1, "a")).expect("create");

        let toggled = service.toggle_status(created.id).expect("toggle");
        assert_eq!(toggled.status, Status::Completed);

        let toggled_again = service.toggle_status(created.id).expect("toggle again");
        assert_eq!(toggled_again.status, Status::Pending);
    }

    #[test]
    fn toggle_on_missing_id_fails() {
        let service = service();
        assert!(service.toggle_status(42).is_err());
    }
}
