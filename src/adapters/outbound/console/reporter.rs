use crate::ports::outbound::TagReporter;
use owo_colors::OwoColorize;

/// ConsoleReporter adapter for operator-facing reporting
///
/// Tagging attempts go to stdout; warnings and errors go to stderr,
/// colored. Verbosity is explicit configuration passed in at
/// construction rather than shared mutable state.
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl TagReporter for ConsoleReporter {
    fn tagging(&self, project_name: &str, tag_value: &str, dry_run: bool) {
        if dry_run {
            println!(
                "[dry-run] Would tag project: {}, with tag: {}",
                project_name, tag_value
            );
        } else {
            println!("Tagging project: {}, with tag: {}", project_name, tag_value);
        }
    }

    fn already_applied(&self, project_id: &str, tag_value: &str) {
        println!(
            "{}",
            format!("{} already exists for project: {}", tag_value, project_id).yellow()
        );
    }

    fn failed(&self, project_id: &str, tag_value: &str, reason: &str) {
        eprintln!(
            "{}",
            format!(
                "ERROR - Could not apply tag: {} to project: {}, reason: {}",
                tag_value, project_id, reason
            )
            .red()
        );
    }

    fn record_skipped(&self, detail: &str) {
        eprintln!("{}", format!("ERROR - Skipping mapping record: {}", detail).red());
    }

    fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }
}
