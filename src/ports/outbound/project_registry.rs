use crate::shared::Result;
use crate::tagging::domain::{ComponentTag, Project, Target};

/// Outcome of a single tag application request.
///
/// The vendor rejects a duplicate tag with a distinct status; that is an
/// already-satisfied condition, not an error. Any other non-success
/// status is reported and skipped, never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// The service accepted the tag
    Applied,
    /// The tag was already present on the project (HTTP 422)
    AlreadyApplied,
    /// The service rejected the request with some other status
    Rejected { status: u16 },
}

/// ProjectRegistry port for the vulnerability-management service
///
/// Abstracts the vendor API that holds scan targets and their projects.
/// Listings walk every page of a cursor-paginated endpoint; a failed
/// walk returns an error and discards any pages fetched so far.
pub trait ProjectRegistry {
    /// Lists every target in an organization, optionally filtered by
    /// source type (e.g. `ecr`, `github-enterprise`).
    fn list_targets(&self, org_id: &str, source_types: Option<&str>) -> Result<Vec<Target>>;

    /// Lists every project under one target.
    fn list_projects(&self, org_id: &str, target_id: &str) -> Result<Vec<Project>>;

    /// Applies a component tag to one project. A single request with no
    /// retry; transport failures surface as errors, status-level
    /// rejections as `TagOutcome`.
    fn apply_tag(&self, org_id: &str, project_id: &str, tag: &ComponentTag)
        -> Result<TagOutcome>;
}
