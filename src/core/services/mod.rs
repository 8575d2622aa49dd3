//! CRUD services over the record stores
//!
//! Each service is a thin translator between callers and one logical table,
//! generic over the injected [`RecordStore`](crate::core::store::RecordStore)
//! adapter. Validation that belongs to the form layer (e.g. credit-weight
//! ranges) is deliberately not performed here.

pub mod assignments;
pub mod courses;
pub mod grades;
pub mod students;

pub use assignments::AssignmentService;
pub use courses::CourseService;
pub use grades::GradeService;
pub use students::StudentService;
