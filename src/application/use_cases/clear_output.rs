use crate::shared::error::TaggerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// File kept in place so the output directory stays under version control
pub const RESERVED_FILE: &str = ".gitignore";

/// ClearOutputUseCase - deletes generated files from the output directory
///
/// Every regular file except the reserved `.gitignore` is removed. Both
/// the directory and the reserved file must exist; their absence is a
/// loud failure, not a no-op.
pub struct ClearOutputUseCase;

impl ClearOutputUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Executes the cleanup, returning the number of files removed.
    pub fn execute(&self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(TaggerError::OutputDirMissing {
                path: dir.to_path_buf(),
            }
            .into());
        }

        if !dir.join(RESERVED_FILE).exists() {
            return Err(TaggerError::ReservedFileMissing {
                file: RESERVED_FILE,
                path: dir.to_path_buf(),
            }
            .into());
        }

        let mut removed = 0;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_name() == RESERVED_FILE {
                continue;
            }
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}

impl Default for ClearOutputUseCase {
    fn default() -> Self {
        Self::new()
    }
}
