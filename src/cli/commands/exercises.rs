//! Exercises command handler

use music_graph::error;
use music_graph::exercises::{self, Section};

/// Run one exercise section (or all of them)
///
/// Returns `true` when every check passed.
pub fn run(section: Section) -> bool {
    let label = section_label(section);
    println!("Running {label}");
    match exercises::run(section) {
        Ok(()) => {
            println!("✓ All {label} passed");
            true
        }
        Err(e) => {
            error!("Exercises stopped: {e}");
            eprintln!("✗ {e}");
            false
        }
    }
}

fn section_label(section: Section) -> String {
    match section {
        Section::All => "exercises".to_string(),
        _ => format!("{section} exercises"),
    }
}
