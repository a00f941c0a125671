use crate::application::dto::{ApplyTagsRequest, ApplyTagsSummary};
use crate::ports::outbound::{ProjectRegistry, TagOutcome, TagReporter};
use crate::shared::error::TaggerError;
use crate::shared::Result;
use crate::tagging::domain::{ComponentTag, MappingRecord};

/// ApplyTagsUseCase - applies a derived component tag across each
/// mapped SCM/container target pair
///
/// Per mapping record: the tag is derived once, from the first project
/// of the SCM target, then applied to every project under the SCM
/// target and every project under the container target, in that order.
/// A record whose listings fail, whose SCM target is empty, or whose
/// first project lacks the needed attributes is reported and skipped;
/// the run continues with the next record. Per-project tag failures are
/// likewise reported and never stop the run.
///
/// # Type Parameters
/// * `R` - ProjectRegistry implementation
/// * `T` - TagReporter implementation
pub struct ApplyTagsUseCase<R: ProjectRegistry, T: TagReporter> {
    registry: R,
    reporter: T,
}

impl<R: ProjectRegistry, T: TagReporter> ApplyTagsUseCase<R, T> {
    pub fn new(registry: R, reporter: T) -> Self {
        Self { registry, reporter }
    }

    pub fn execute(&self, request: ApplyTagsRequest) -> Result<ApplyTagsSummary> {
        let mut summary = ApplyTagsSummary::default();

        for record in &request.records {
            match self.apply_record(record, request.dry_run, &mut summary) {
                Ok(()) => summary.records_processed += 1,
                Err(e) => {
                    self.reporter.record_skipped(&format!(
                        "{} -> {}: {}",
                        record.scm_target_name, record.container_target_name, e
                    ));
                    summary.records_skipped += 1;
                }
            }
        }

        Ok(summary)
    }

    fn apply_record(
        &self,
        record: &MappingRecord,
        dry_run: bool,
        summary: &mut ApplyTagsSummary,
    ) -> Result<()> {
        let scm_projects = self
            .registry
            .list_projects(&record.scm_org_id, &record.scm_target_id)?;

        let first = scm_projects.first().ok_or_else(|| TaggerError::NoProjectsInTarget {
            target_id: record.scm_target_id.clone(),
        })?;
        let tag = ComponentTag::from_project(first, &record.scm_target_name)?;

        let container_projects = self
            .registry
            .list_projects(&record.container_org_id, &record.container_target_id)?;

        // SCM projects first, then container projects, each tagged
        // under its own organization.
        let attempts = scm_projects
            .iter()
            .map(|p| (record.scm_org_id.as_str(), p))
            .chain(
                container_projects
                    .iter()
                    .map(|p| (record.container_org_id.as_str(), p)),
            );

        for (org_id, project) in attempts {
            self.reporter.tagging(&project.name, tag.value(), dry_run);
            if dry_run {
                continue;
            }

            match self.registry.apply_tag(org_id, &project.id, &tag) {
                Ok(TagOutcome::Applied) => summary.applied += 1,
                Ok(TagOutcome::AlreadyApplied) => {
                    self.reporter.already_applied(&project.id, tag.value());
                    summary.already_applied += 1;
                }
                Ok(TagOutcome::Rejected { status }) => {
                    self.reporter.failed(
                        &project.id,
                        tag.value(),
                        &format!("status code {}", status),
                    );
                    summary.failed += 1;
                }
                Err(e) => {
                    self.reporter
                        .failed(&project.id, tag.value(), &format!("{:#}", e));
                    summary.failed += 1;
                }
            }
        }

        Ok(())
    }
}
