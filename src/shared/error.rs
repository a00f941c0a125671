use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for target tagging.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("Snyk API returned status code {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("No projects found in target: {target_id}\n\n💡 Hint: The component tag is derived from the target's first project, so the SCM target must contain at least one project")]
    NoProjectsInTarget { target_id: String },

    #[error("Project {project_id} has no '{attribute}' attribute\n\n💡 Hint: The component tag needs the first SCM project's origin and target_reference attributes")]
    MissingProjectAttribute {
        project_id: String,
        attribute: &'static str,
    },

    #[error("Output directory not found: {}\n\n💡 Hint: Create the directory (with a .gitignore inside) before running this command", .path.display())]
    OutputDirMissing { path: PathBuf },

    #[error("Reserved file '{file}' not found in {}\n\n💡 Hint: clear-output keeps the directory's {file} in place and refuses to run without it", .path.display())]
    ReservedFileMissing { file: &'static str, path: PathBuf },

    #[error("Failed to read mapping file: {}\nDetails: {details}\n\n💡 Hint: Pass the 6-column CSV pairing each SCM target with its container target", .path.display())]
    MappingFileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions", .path.display())]
    FileWriteError { path: PathBuf, details: String },
}
