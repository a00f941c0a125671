/// TagReporter port for operator-facing reporting during tagging runs
///
/// This port abstracts console reporting so use cases stay free of
/// formatting concerns and tests can capture what was reported.
pub trait TagReporter {
    /// Reports one tagging attempt (or, under dry-run, what would be
    /// tagged). Emitted for every project regardless of dry-run state.
    fn tagging(&self, project_name: &str, tag_value: &str, dry_run: bool);

    /// Reports that the tag was already present on the project
    fn already_applied(&self, project_id: &str, tag_value: &str);

    /// Reports a tag application that was rejected or failed
    fn failed(&self, project_id: &str, tag_value: &str, reason: &str);

    /// Reports a mapping record that could not be processed
    fn record_skipped(&self, detail: &str);

    /// Reports a diagnostic message shown only in verbose mode
    fn verbose(&self, message: &str);
}
