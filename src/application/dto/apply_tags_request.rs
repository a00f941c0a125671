use crate::tagging::domain::MappingRecord;

/// Request DTO for the pairwise tagging use case
#[derive(Debug, Clone)]
pub struct ApplyTagsRequest {
    /// Mapping records read from the operator-supplied CSV
    pub records: Vec<MappingRecord>,
    /// When set, report what would be tagged without issuing requests
    pub dry_run: bool,
}

impl ApplyTagsRequest {
    pub fn new(records: Vec<MappingRecord>, dry_run: bool) -> Self {
        Self { records, dry_run }
    }
}
