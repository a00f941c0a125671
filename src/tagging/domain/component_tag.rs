use crate::shared::error::TaggerError;
use crate::shared::Result;
use crate::tagging::domain::Project;

/// Tag key used for every component tag
pub const TAG_KEY: &str = "component";

/// A component tag identifying the shared logical component a project
/// belongs to.
///
/// The value has the form `pkg:{origin}/{scm_target_name}@{branch}` and
/// is derived once per mapping record, from the first project of the SCM
/// target, then applied verbatim to every project under both targets.
/// The `pkg:` prefix is added exactly once, here at derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTag {
    value: String,
}

impl ComponentTag {
    /// Builds a tag value from its parts. The `github-enterprise` origin
    /// is normalized to `github` in the tag value only; API calls keep
    /// using org and target ids, never the origin.
    pub fn derive(origin: &str, scm_target_name: &str, branch: &str) -> Self {
        let origin = normalize_origin(origin);
        Self {
            value: format!("pkg:{}/{}@{}", origin, scm_target_name, branch),
        }
    }

    /// Derives the tag from the first project returned for the SCM
    /// target. No validation that this project is representative of the
    /// whole target; the first-project rule is a documented
    /// simplification, not a guarantee.
    pub fn from_project(project: &Project, scm_target_name: &str) -> Result<Self> {
        let origin = project
            .origin
            .as_deref()
            .ok_or_else(|| TaggerError::MissingProjectAttribute {
                project_id: project.id.clone(),
                attribute: "origin",
            })?;
        let branch = project.target_reference.as_deref().ok_or_else(|| {
            TaggerError::MissingProjectAttribute {
                project_id: project.id.clone(),
                attribute: "target_reference",
            }
        })?;
        Ok(Self::derive(origin, scm_target_name, branch))
    }

    /// The full tag value, including the `pkg:` prefix
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key(&self) -> &'static str {
        TAG_KEY
    }
}

fn normalize_origin(origin: &str) -> &str {
    if origin == "github-enterprise" {
        "github"
    } else {
        origin
    }
}
