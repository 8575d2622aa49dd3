//! Assignment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assignment priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority (the default for new assignments)
    #[default]
    Medium,
    /// High priority
    High,
}

/// Assignment completion status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not yet completed
    #[default]
    Pending,
    /// Marked as done
    Completed,
}

impl Status {
    /// The opposite status (pending <-> completed)
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// Represents an assignment with a due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Record identifier (assigned by the store when 0)
    #[serde(default, alias = "Id")]
    pub id: u32,

    /// Identifier of the course this assignment belongs to
    #[serde(alias = "courseId", alias = "courseId_c")]
    pub course_id: u32,

    /// Assignment title
    #[serde(alias = "title_c")]
    pub title: String,

    /// Longer description (may be empty)
    #[serde(default, alias = "description_c")]
    pub description: String,

    /// Due date (date only; times are not tracked)
    #[serde(alias = "dueDate", alias = "dueDate_c")]
    pub due_date: NaiveDate,

    /// Priority level
    #[serde(default, alias = "priority_c")]
    pub priority: Priority,

    /// Completion status
    #[serde(default, alias = "status_c")]
    pub status: Status,

    /// Grade awarded, if any (percentage)
    #[serde(default, alias = "grade_c")]
    pub grade: Option<f64>,
}

impl Assignment {
    /// Create a new pending, ungraded assignment
    #[must_use]
    pub const fn new(course_id: u32, title: String, due_date: NaiveDate) -> Self {
        Self {
            id: 0,
            course_id,
            title,
            description: String::new(),
            due_date,
            priority: Priority::Medium,
            status: Status::Pending,
            grade: None,
        }
    }

    /// Whether the assignment is still pending
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }
}
