use snyk_component_tagger::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ProjectRegistry with canned targets and projects that records
/// every tag application
#[derive(Default, Clone)]
pub struct MockProjectRegistry {
    targets: HashMap<String, Vec<Target>>,
    projects: HashMap<(String, String), Vec<Project>>,
    outcomes: HashMap<String, TagOutcome>,
    pub applied: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets(mut self, org_id: &str, targets: Vec<Target>) -> Self {
        self.targets.insert(org_id.to_string(), targets);
        self
    }

    pub fn with_projects(
        mut self,
        org_id: &str,
        target_id: &str,
        projects: Vec<Project>,
    ) -> Self {
        self.projects
            .insert((org_id.to_string(), target_id.to_string()), projects);
        self
    }

    pub fn with_outcome(mut self, project_id: &str, outcome: TagOutcome) -> Self {
        self.outcomes.insert(project_id.to_string(), outcome);
        self
    }

    /// Tag applications as (org_id, project_id, tag_value) triples
    pub fn applied(&self) -> Vec<(String, String, String)> {
        self.applied.lock().unwrap().clone()
    }
}

impl ProjectRegistry for MockProjectRegistry {
    fn list_targets(&self, org_id: &str, _source_types: Option<&str>) -> Result<Vec<Target>> {
        self.targets
            .get(org_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown org {}", org_id))
    }

    fn list_projects(&self, org_id: &str, target_id: &str) -> Result<Vec<Project>> {
        self.projects
            .get(&(org_id.to_string(), target_id.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown target {}", target_id))
    }

    fn apply_tag(
        &self,
        org_id: &str,
        project_id: &str,
        tag: &ComponentTag,
    ) -> Result<TagOutcome> {
        self.applied.lock().unwrap().push((
            org_id.to_string(),
            project_id.to_string(),
            tag.value().to_string(),
        ));
        Ok(self
            .outcomes
            .get(project_id)
            .cloned()
            .unwrap_or(TagOutcome::Applied))
    }
}
