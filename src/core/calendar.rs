//! Calendar view over assignment due dates
//!
//! Groups assignments by day and derives the dashboard statistics (due
//! today/tomorrow, overdue, completion rate). `today` is always an argument;
//! nothing here reads the wall clock.

use crate::core::models::Assignment;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Assignments grouped by due date, ordered by day
pub type DayMap<'a> = BTreeMap<NaiveDate, Vec<&'a Assignment>>;

/// Group assignments by due date.
///
/// Days are ordered ascending; within a day the input order is preserved.
#[must_use]
pub fn assignments_by_day(assignments: &[Assignment]) -> DayMap<'_> {
    let mut days: DayMap = BTreeMap::new();
    for assignment in assignments {
        days.entry(assignment.due_date).or_default().push(assignment);
    }
    days
}

/// Assignments due on one specific date, in input order
#[must_use]
pub fn assignments_due_on(assignments: &[Assignment], date: NaiveDate) -> Vec<&Assignment> {
    assignments
        .iter()
        .filter(|assignment| assignment.due_date == date)
        .collect()
}

/// The day-grouped assignments of one calendar month
#[must_use]
pub fn month_view(assignments: &[Assignment], year: i32, month: u32) -> DayMap<'_> {
    let mut days: DayMap = BTreeMap::new();
    for assignment in assignments {
        if assignment.due_date.year() == year && assignment.due_date.month() == month {
            days.entry(assignment.due_date).or_default().push(assignment);
        }
    }
    days
}

/// The next pending assignments, soonest first
///
/// Sorting is stable, so assignments sharing a due date keep their input
/// order. Past-due pending assignments are included (they sort first).
#[must_use]
pub fn upcoming(assignments: &[Assignment], limit: usize) -> Vec<&Assignment> {
    let mut pending: Vec<&Assignment> = assignments
        .iter()
        .filter(|assignment| assignment.is_pending())
        .collect();
    pending.sort_by_key(|assignment| assignment.due_date);
    pending.truncate(limit);
    pending
}

/// Summary statistics for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// Pending assignments due today
    pub due_today: usize,
    /// Pending assignments due tomorrow
    pub due_tomorrow: usize,
    /// Pending assignments with a due date before today
    pub overdue: usize,
    /// Completed share of all assignments, in whole percent (0 when empty)
    pub completion_rate: u8,
}

impl DashboardStats {
    /// Compute the statistics relative to `today`
    #[must_use]
    pub fn compute(assignments: &[Assignment], today: NaiveDate) -> Self {
        let tomorrow = today.succ_opt().unwrap_or(today);

        let pending = |assignment: &&Assignment| assignment.is_pending();
        let due_today = assignments
            .iter()
            .filter(pending)
            .filter(|a| a.due_date == today)
            .count();
        let due_tomorrow = assignments
            .iter()
            .filter(pending)
            .filter(|a| a.due_date == tomorrow)
            .count();
        let overdue = assignments
            .iter()
            .filter(pending)
            .filter(|a| a.due_date < today)
            .count();

        let completed = assignments.iter().filter(|a| !a.is_pending()).count();
        let completion_rate = if assignments.is_empty() {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rate = ((completed as f64 / assignments.len() as f64) * 100.0).round() as u8;
            rate
        };

        Self {
            due_today,
            due_tomorrow,
            overdue,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Status;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn assignment(title: &str, due: NaiveDate, status: Status) -> Assignment {
        let mut a = Assignment::new(1, title.to_string(), due);
        a.status = status;
        a
    }

    #[test]
    fn groups_by_day_in_date_order() {
        let assignments = vec![
            assignment("b", date(2024, 11, 20), Status::Pending),
            assignment("a", date(2024, 11, 15), Status::Pending),
            assignment("c", date(2024, 11, 20), Status::Pending),
        ];

        let days = assignments_by_day(&assignments);
        let keys: Vec<NaiveDate> = days.keys().copied().collect();

        assert_eq!(keys, vec![date(2024, 11, 15), date(2024, 11, 20)]);
        let on_20th: Vec<&str> = days[&date(2024, 11, 20)]
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(on_20th, vec!["b", "c"]);
    }

    #[test]
    fn due_on_matches_single_day() {
        let assignments = vec![
            assignment("a", date(2024, 11, 15), Status::Pending),
            assignment("b", date(2024, 11, 16), Status::Pending),
        ];

        let due = assignments_due_on(&assignments, date(2024, 11, 15));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "a");
        assert!(assignments_due_on(&assignments, date(2024, 11, 17)).is_empty());
    }

    #[test]
    fn month_view_drops_other_months() {
        let assignments = vec![
            assignment("nov", date(2024, 11, 15), Status::Pending),
            assignment("dec", date(2024, 12, 1), Status::Pending),
            assignment("nov2023", date(2023, 11, 15), Status::Pending),
        ];

        let days = month_view(&assignments, 2024, 11);
        assert_eq!(days.len(), 1);
        assert_eq!(days[&date(2024, 11, 15)][0].title, "nov");
    }

    #[test]
    fn upcoming_sorts_pending_by_due_date() {
        let assignments = vec![
            assignment("later", date(2024, 11, 20), Status::Pending),
            assignment("done", date(2024, 11, 1), Status::Completed),
            assignment("soon", date(2024, 11, 12), Status::Pending),
            assignment("soonest", date(2024, 11, 10), Status::Pending),
        ];

        let next = upcoming(&assignments, 2);
        let titles: Vec<&str> = next.iter().map(|a| a.title.as_str()).collect();

        assert_eq!(titles, vec!["soonest", "soon"]);
    }

    #[test]
    fn stats_classify_relative_to_today() {
        let today = date(2024, 11, 15);
        let assignments = vec![
            assignment("overdue", date(2024, 11, 10), Status::Pending),
            assignment("today", today, Status::Pending),
            assignment("tomorrow", date(2024, 11, 16), Status::Pending),
            assignment("later", date(2024, 11, 30), Status::Pending),
            assignment("done", date(2024, 11, 1), Status::Completed),
        ];

        let stats = DashboardStats::compute(&assignments, today);

        assert_eq!(stats.due_today, 1);
        assert_eq!(stats.due_tomorrow, 1);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 20);
    }

    #[test]
    fn stats_on_empty_input_are_all_zero() {
        let stats = DashboardStats::compute(&[], date(2024, 11, 15));

        assert_eq!(stats.due_today, 0);
        assert_eq!(stats.due_tomorrow, 0);
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.completion_rate, 0);
    }

    #[test]
    fn completed_assignments_never_count_as_overdue() {
        let today = date(2024, 11, 15);
        let assignments = vec![assignment("done late", date(2024, 11, 1), Status::Completed)];

        let stats = DashboardStats::compute(&assignments, today);
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.completion_rate, 100);
    }
}
