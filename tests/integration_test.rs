/// Integration tests for the application layer
mod test_utilities;

use snyk_component_tagger::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn scm_project(id: &str, name: &str, origin: &str, branch: &str) -> Project {
    Project::new(
        id.to_string(),
        name.to_string(),
        Some(origin.to_string()),
        Some(branch.to_string()),
    )
}

fn container_project(id: &str, name: &str) -> Project {
    Project::new(
        id.to_string(),
        name.to_string(),
        Some("ecr".to_string()),
        None,
    )
}

#[test]
fn test_export_targets_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("targets.csv");

    let registry = MockProjectRegistry::new().with_targets(
        "org-1",
        vec![
            Target::new("t1".to_string(), "my-org/svc-a".to_string(), None),
            Target::new("t2".to_string(), "my-org/svc-b".to_string(), None),
        ],
    );
    let presenter = FileSystemWriter::new(output_path.clone());

    let use_case = ExportTargetsUseCase::new(registry, presenter);
    let count = use_case
        .execute(ExportTargetsRequest::new("org-1".to_string(), None))
        .unwrap();

    assert_eq!(count, 2);
    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content, "org-1,my-org/svc-a,t1\norg-1,my-org/svc-b,t2\n");
}

#[test]
fn test_export_through_factory_presenter() {
    // The same selection path generate-csv runs: the factory hands the
    // use case a boxed presenter.
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("targets.csv");

    let registry = MockProjectRegistry::new().with_targets(
        "org-1",
        vec![Target::new("t1".to_string(), "my-org/svc-a".to_string(), None)],
    );
    let presenter = PresenterFactory::create(PresenterType::File(output_path.clone()));

    let use_case = ExportTargetsUseCase::new(registry, presenter);
    let count = use_case
        .execute(ExportTargetsRequest::new("org-1".to_string(), None))
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "org-1,my-org/svc-a,t1\n"
    );
}

#[test]
fn test_export_unknown_org_fails() {
    let registry = MockProjectRegistry::new();
    let presenter = MockOutputPresenter::new();
    let use_case = ExportTargetsUseCase::new(registry, presenter.clone());

    let result = use_case.execute(ExportTargetsRequest::new("nope".to_string(), None));
    assert!(result.is_err());
    assert!(presenter.presented().is_none());
}

#[test]
fn test_apply_tags_from_mapping_file() {
    // The worked example: t1's first project is a github-enterprise scan
    // of branch main, so both targets' projects get pkg:github/svc-a@main.
    let temp_dir = TempDir::new().unwrap();
    let mapping_path = temp_dir.path().join("mapping.csv");
    fs::write(
        &mapping_path,
        "org1,svc-a,t1,org2,svc-a-image,t2\nmalformed,row\n",
    )
    .unwrap();

    let mapping = MappingFileReader::new().read(&mapping_path).unwrap();
    assert_eq!(mapping.records.len(), 1);
    assert_eq!(mapping.skipped_rows, 1);

    let registry = MockProjectRegistry::new()
        .with_projects(
            "org1",
            "t1",
            vec![
                scm_project("p1", "svc-a:package.json", "github-enterprise", "main"),
                scm_project("p2", "svc-a:Dockerfile", "github-enterprise", "main"),
            ],
        )
        .with_projects(
            "org2",
            "t2",
            vec![container_project("p3", "svc-a-image:latest")],
        );
    let reporter = MockTagReporter::new();

    let use_case = ApplyTagsUseCase::new(registry.clone(), reporter.clone());
    let summary = use_case
        .execute(ApplyTagsRequest::new(mapping.records, false))
        .unwrap();

    assert_eq!(summary.applied, 3);
    assert_eq!(summary.records_processed, 1);

    let expected_tag = "pkg:github/svc-a@main".to_string();
    assert_eq!(
        registry.applied(),
        vec![
            ("org1".to_string(), "p1".to_string(), expected_tag.clone()),
            ("org1".to_string(), "p2".to_string(), expected_tag.clone()),
            ("org2".to_string(), "p3".to_string(), expected_tag.clone()),
        ]
    );

    let reports = reporter.tagging_reports();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].0, "svc-a:package.json");
    assert!(reports.iter().all(|(_, tag, _)| tag == &expected_tag));
}

#[test]
fn test_apply_tags_dry_run_issues_no_requests() {
    let registry = MockProjectRegistry::new()
        .with_projects(
            "org1",
            "t1",
            vec![scm_project("p1", "svc-a:package.json", "gitlab", "develop")],
        )
        .with_projects(
            "org2",
            "t2",
            vec![container_project("p3", "svc-a-image:latest")],
        );
    let reporter = MockTagReporter::new();

    let records = vec![MappingRecord::parse_line("org1,svc-a,t1,org2,svc-a-image,t2").unwrap()];
    let use_case = ApplyTagsUseCase::new(registry.clone(), reporter.clone());
    let summary = use_case
        .execute(ApplyTagsRequest::new(records, true))
        .unwrap();

    assert_eq!(summary.applied, 0);
    assert!(registry.applied().is_empty());

    // The "would tag" report is still produced for every project
    let reports = reporter.tagging_reports();
    assert_eq!(reports.len(), 2);
    assert!(reports
        .iter()
        .all(|(_, tag, dry)| tag == "pkg:gitlab/svc-a@develop" && *dry));
}

#[test]
fn test_apply_tags_empty_scm_target_is_reported_and_skipped() {
    let registry = MockProjectRegistry::new()
        .with_projects("org1", "t1", Vec::new())
        .with_projects("org2", "t2", Vec::new());
    let reporter = MockTagReporter::new();

    let records = vec![MappingRecord::parse_line("org1,svc-a,t1,org2,svc-a-image,t2").unwrap()];
    let use_case = ApplyTagsUseCase::new(registry, reporter.clone());
    let summary = use_case
        .execute(ApplyTagsRequest::new(records, false))
        .unwrap();

    assert_eq!(summary.records_skipped, 1);
    assert_eq!(summary.records_processed, 0);
    let skipped = reporter.skipped_reports();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].contains("t1"));
}

#[test]
fn test_clear_output_keeps_reserved_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(RESERVED_FILE), "*\n").unwrap();
    fs::write(temp_dir.path().join("targets.csv"), "org-1,svc-a,t1\n").unwrap();

    let removed = ClearOutputUseCase::new().execute(temp_dir.path()).unwrap();

    assert_eq!(removed, 1);
    assert!(temp_dir.path().join(RESERVED_FILE).exists());
    assert!(!temp_dir.path().join("targets.csv").exists());
}
