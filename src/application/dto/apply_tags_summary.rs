/// Result DTO summarizing one tagging run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyTagsSummary {
    /// Tags the service accepted
    pub applied: usize,
    /// Tags already present on their project (non-fatal)
    pub already_applied: usize,
    /// Tag requests rejected or failed (non-fatal, never retried)
    pub failed: usize,
    /// Mapping records processed end to end
    pub records_processed: usize,
    /// Mapping records skipped because a listing failed, the SCM target
    /// was empty, or the first project lacked a required attribute
    pub records_skipped: usize,
}
