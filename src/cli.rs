use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Associate Snyk SCM and container scan targets with a shared component tag
#[derive(Parser, Debug)]
#[command(name = "snyk-component-tagger")]
#[command(version)]
#[command(
    about = "Associate Snyk SCM and container scan targets with a shared component tag",
    long_about = None
)]
pub struct Cli {
    /// Print extra diagnostics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every target in an organization to a CSV file
    GenerateCsv {
        /// Snyk API token
        #[arg(long, env = "SNYK_TOKEN", hide_env_values = true)]
        snyk_token: String,

        /// Snyk organization id
        #[arg(long, env = "SNYK_ORG_ID")]
        org_id: String,

        /// Output filename, written under the output directory; pass `-`
        /// to write to stdout instead
        #[arg(long, default_value = "output.csv")]
        output_file: String,

        /// Filter specific target source types, e.g. ecr, github-enterprise
        #[arg(long)]
        source_types: Option<String>,
    },

    /// Apply a derived component tag to every project in each mapped target pair
    ApplyTags {
        /// Snyk API token
        #[arg(long, env = "SNYK_TOKEN", hide_env_values = true)]
        snyk_token: String,

        /// Path to the mapping CSV with columns: SCM org id, SCM target
        /// name, SCM target id, container org id, container target name,
        /// container target id
        #[arg(long)]
        csv_path: PathBuf,

        /// Print projects to be tagged without tagging
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete generated files from the output directory
    ClearOutput,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
