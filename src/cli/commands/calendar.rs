//! Calendar command handler
//!
//! Prints assignments grouped by due date, plus the dashboard statistics.

use chrono::{Datelike, Local, NaiveDate};
use logger::{error, info};
use std::path::Path;
use study_flow::config::Config;
use study_flow::core::calendar::{
    assignments_due_on, month_view, upcoming, DashboardStats, DayMap,
};
use study_flow::core::gradebook::Gradebook;
use study_flow::core::models::{Assignment, Status};

/// How many upcoming assignments to show below the calendar
const UPCOMING_LIMIT: usize = 5;

/// Run the calendar command.
///
/// # Arguments
/// * `input_file` - Optional gradebook path (falls back to config data_dir)
/// * `month` - Optional month filter, as YYYY-MM
/// * `date` - Optional single-day filter, as YYYY-MM-DD
/// * `config` - Loaded configuration
pub fn run(input_file: Option<&Path>, month: Option<&str>, date: Option<&str>, config: &Config) {
    if let Err(err) = show_calendar(input_file, month, date, config) {
        error!("Calendar rendering failed: {err}");
        eprintln!("{err}");
    }
}

fn show_calendar(
    input_file: Option<&Path>,
    month: Option<&str>,
    date: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let book = super::load_gradebook(input_file, config)?;
    info!("Gradebook loaded: {} assignments", book.assignments.len());

    let today = Local::now().date_naive();

    if let Some(date) = date {
        let day = parse_date(date)?;
        print_single_day(&book, day);
    } else {
        let (year, month) = match month {
            Some(m) => parse_month(m)?,
            None => (today.year(), today.month()),
        };

        println!("\n=== Calendar: {year}-{month:02} ===");
        let days = month_view(&book.assignments, year, month);
        if days.is_empty() {
            println!("No assignments due this month.");
        } else {
            print_days(&book, &days);
        }
    }

    print_stats(&book.assignments, today);

    Ok(())
}

fn print_single_day(book: &Gradebook, day: NaiveDate) {
    println!("\n=== Assignments due {day} ===");
    let due = assignments_due_on(&book.assignments, day);
    if due.is_empty() {
        println!("Nothing due on this day.");
    } else {
        for assignment in due {
            print_assignment(book, assignment);
        }
    }
}

fn print_days(book: &Gradebook, days: &DayMap<'_>) {
    for (day, assignments) in days {
        println!("\n{day}");
        for assignment in assignments {
            print_assignment(book, assignment);
        }
    }
}

fn print_assignment(book: &Gradebook, assignment: &Assignment) {
    let marker = if assignment.status == Status::Completed {
        "[x]"
    } else {
        "[ ]"
    };
    let course = book
        .course(assignment.course_id)
        .map_or("?", |course| course.code.as_str());

    println!(
        "  {marker} {} ({course}) [{:?}]",
        assignment.title, assignment.priority
    );
}

fn print_stats(assignments: &[Assignment], today: NaiveDate) {
    let stats = DashboardStats::compute(assignments, today);

    println!("\n=== Dashboard ===");
    println!("Due today: {}", stats.due_today);
    println!("Due tomorrow: {}", stats.due_tomorrow);
    println!("Overdue: {}", stats.overdue);
    println!("Completion rate: {}%", stats.completion_rate);

    let next = upcoming(assignments, UPCOMING_LIMIT);
    if !next.is_empty() {
        println!("\nUpcoming:");
        for assignment in next {
            println!("  {} - {}", assignment.due_date, assignment.title);
        }
    }
}

/// Parse a YYYY-MM month argument
fn parse_month(value: &str) -> Result<(i32, u32), String> {
    let padded = format!("{value}-01");
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .map(|date| (date.year(), date.month()))
        .map_err(|_| format!("✗ Invalid month '{value}'. Use the form YYYY-MM"))
}

/// Parse a YYYY-MM-DD date argument
fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("✗ Invalid date '{value}'. Use the form YYYY-MM-DD"))
}
