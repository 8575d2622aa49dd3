//! GPA command handler
//!
//! Loads a gradebook, scopes grade entries per semester, and prints
//! credit-weighted grade point averages.

use logger::{error, info};
use std::path::Path;
use study_flow::config::Config;
use study_flow::core::gpa::grades_for_semester;
use study_flow::core::gradebook::Gradebook;
use study_flow::core::models::GradeEntry;
use study_flow::core::services::GradeService;
use study_flow::core::store::MemoryStore;

/// Run the gpa command.
///
/// # Arguments
/// * `input_file` - Optional gradebook path (falls back to config data_dir)
/// * `semester` - Optional semester to scope to
/// * `config` - Loaded configuration
pub fn run(input_file: Option<&Path>, semester: Option<&str>, config: &Config) {
    if let Err(err) = report_gpa(input_file, semester, config) {
        error!("GPA calculation failed: {err}");
        eprintln!("{err}");
    }
}

fn report_gpa(
    input_file: Option<&Path>,
    semester: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let book = super::load_gradebook(input_file, config)?;
    info!(
        "Gradebook loaded: {} grade entries across {} courses",
        book.grade_entries.len(),
        book.courses.len()
    );

    if book.courses.is_empty() {
        println!("No courses in gradebook; add courses before calculating a GPA.");
        return Ok(());
    }

    let grades = GradeService::new(MemoryStore::with_records(book.grade_entries.clone()));

    println!("\n=== GPA Summary ===");
    if let Some(semester) = semester {
        print_semester(&book, &grades, semester)?;
    } else {
        for semester in book.semesters() {
            print_semester(&book, &grades, &semester)?;
        }

        let overall = grades.calculate_gpa(&[])?;
        println!("\nOverall GPA: {overall:.2} ({})", gpa_status(overall));
    }

    Ok(())
}

fn print_semester(
    book: &Gradebook,
    grades: &GradeService<MemoryStore<GradeEntry>>,
    semester: &str,
) -> Result<(), String> {
    let gpa = grades.semester_gpa(&book.courses, semester)?;
    let credits = grades.semester_credits(&book.courses, semester)?;
    let count = grades_for_semester(&book.grade_entries, &book.courses, semester).len();

    println!("\nSemester: {semester}");
    println!("Courses: {count}");
    println!("Total Credits: {credits}");
    println!("GPA: {gpa:.2} ({})", gpa_status(gpa));

    Ok(())
}

/// Human label for a GPA on the 4.0 scale
fn gpa_status(gpa: f64) -> &'static str {
    if gpa >= 3.7 {
        "Excellent"
    } else if gpa >= 3.0 {
        "Good"
    } else if gpa >= 2.0 {
        "Satisfactory"
    } else {
        "Needs Improvement"
    }
}
