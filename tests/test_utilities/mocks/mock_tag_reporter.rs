use snyk_component_tagger::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock TagReporter that captures everything reported
#[derive(Default, Clone)]
pub struct MockTagReporter {
    pub tagging: Arc<Mutex<Vec<(String, String, bool)>>>,
    pub skipped: Arc<Mutex<Vec<String>>>,
    pub failures: Arc<Mutex<Vec<String>>>,
}

impl MockTagReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tagging_reports(&self) -> Vec<(String, String, bool)> {
        self.tagging.lock().unwrap().clone()
    }

    pub fn skipped_reports(&self) -> Vec<String> {
        self.skipped.lock().unwrap().clone()
    }
}

impl TagReporter for MockTagReporter {
    fn tagging(&self, project_name: &str, tag_value: &str, dry_run: bool) {
        self.tagging.lock().unwrap().push((
            project_name.to_string(),
            tag_value.to_string(),
            dry_run,
        ));
    }

    fn already_applied(&self, project_id: &str, tag_value: &str) {
        self.failures
            .lock()
            .unwrap()
            .push(format!("already applied: {} {}", project_id, tag_value));
    }

    fn failed(&self, project_id: &str, _tag_value: &str, reason: &str) {
        self.failures
            .lock()
            .unwrap()
            .push(format!("{}: {}", project_id, reason));
    }

    fn record_skipped(&self, detail: &str) {
        self.skipped.lock().unwrap().push(detail.to_string());
    }

    fn verbose(&self, _message: &str) {}
}
