use snyk_component_tagger::cli::{Cli, Command};
use snyk_component_tagger::config;
use snyk_component_tagger::prelude::*;
use std::path::{Path, PathBuf};
use std::process;

use snyk_component_tagger::shared::error::ExitCode;

/// Directory that generated CSV files are written to
const OUTPUT_DIR: &str = "output";

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = config::resolve_settings(Path::new("."))?;

    match cli.command {
        Command::GenerateCsv {
            snyk_token,
            org_id,
            output_file,
            source_types,
        } => {
            let client = SnykClient::new(snyk_token, settings)?;
            let presenter = PresenterFactory::create(export_presenter_type(&output_file));

            let use_case = ExportTargetsUseCase::new(client, presenter);
            let count = use_case.execute(ExportTargetsRequest::new(org_id, source_types))?;
            eprintln!("✅ Exported {} targets", count);
        }

        Command::ApplyTags {
            snyk_token,
            csv_path,
            dry_run,
        } => {
            let mapping = MappingFileReader::new().read(&csv_path)?;
            let reporter = ConsoleReporter::new(cli.verbose);
            if mapping.skipped_rows > 0 {
                reporter.verbose(&format!(
                    "Skipped {} mapping rows without exactly 6 columns",
                    mapping.skipped_rows
                ));
            }

            let client = SnykClient::new(snyk_token, settings)?;
            let use_case = ApplyTagsUseCase::new(client, reporter);
            let summary = use_case.execute(ApplyTagsRequest::new(mapping.records, dry_run))?;

            if dry_run {
                eprintln!(
                    "✅ Dry run complete: {} records inspected, {} skipped",
                    summary.records_processed, summary.records_skipped
                );
            } else {
                eprintln!(
                    "✅ Tagging complete: {} applied, {} already tagged, {} failed, {} records skipped",
                    summary.applied,
                    summary.already_applied,
                    summary.failed,
                    summary.records_skipped
                );
            }
        }

        Command::ClearOutput => {
            let removed = ClearOutputUseCase::new().execute(Path::new(OUTPUT_DIR))?;
            eprintln!("✅ Removed {} files from {}/", removed, OUTPUT_DIR);
        }
    }

    Ok(())
}

/// Picks the export destination: `-` means stdout, anything else is a
/// file under the output directory.
fn export_presenter_type(output_file: &str) -> PresenterType {
    if output_file == "-" {
        PresenterType::Stdout
    } else {
        PresenterType::File(output_csv_path(OUTPUT_DIR, output_file))
    }
}

/// Joins the output filename onto the output directory, appending a
/// `.csv` suffix when missing.
fn output_csv_path(output_dir: &str, output_file: &str) -> PathBuf {
    if output_file.ends_with(".csv") {
        Path::new(output_dir).join(output_file)
    } else {
        Path::new(output_dir).join(format!("{}.csv", output_file))
    }
}
