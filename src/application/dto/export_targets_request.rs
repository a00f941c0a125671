/// Request DTO for the target export use case
#[derive(Debug, Clone)]
pub struct ExportTargetsRequest {
    /// Organization whose targets are listed
    pub org_id: String,
    /// Optional source-type filter, e.g. `ecr` or `ecr,github-enterprise`
    pub source_types: Option<String>,
}

impl ExportTargetsRequest {
    pub fn new(org_id: String, source_types: Option<String>) -> Self {
        Self {
            org_id,
            source_types,
        }
    }
}
