//! Roster command handler

use logger::{error, info};
use std::path::Path;
use study_flow::config::Config;
use study_flow::core::services::StudentService;
use study_flow::core::store::MemoryStore;

/// Run the roster command.
///
/// # Arguments
/// * `input_file` - Optional gradebook path (falls back to config data_dir)
/// * `config` - Loaded configuration
pub fn run(input_file: Option<&Path>, config: &Config) {
    if let Err(err) = print_roster(input_file, config) {
        error!("Roster listing failed: {err}");
        eprintln!("{err}");
    }
}

fn print_roster(input_file: Option<&Path>, config: &Config) -> Result<(), String> {
    let book = super::load_gradebook(input_file, config)?;
    let students = StudentService::new(MemoryStore::with_records(book.students));
    let roster = students.list()?;

    info!("Gradebook loaded: {} students", roster.len());

    if roster.is_empty() {
        println!("No students in gradebook.");
        return Ok(());
    }

    println!("\n=== Roster ===");
    println!(
        "{:<24} {:<10} {:<20} {:>4} {:>6}",
        "Name", "ID", "Major", "Year", "GPA"
    );
    for student in roster {
        println!(
            "{:<24} {:<10} {:<20} {:>4} {:>6.2}",
            student.name, student.student_id, student.major, student.year, student.gpa
        );
    }

    Ok(())
}
