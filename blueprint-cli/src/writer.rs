//! Writes composed files to disk

use anyhow::{Context, Result};
use blueprint::compose::FileOperation;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Materializes file operations under a project directory
///
/// Directories are created as needed. The first failing write aborts the
/// whole operation; files written before it are left in place.
#[derive(Debug, Clone)]
pub struct ProjectWriter {
    root: PathBuf,
}

impl ProjectWriter {
    /// Writer rooted at the project directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write every file, returning how many were written
    ///
    /// # Errors
    ///
    /// Returns an error naming the path of the first directory or file that
    /// could not be created.
    pub fn write_all(&self, files: &[FileOperation]) -> Result<usize> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create directory: {}", self.root.display()))?;

        for file in files {
            let dir = self.root.join(file.relative_path());
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

            let path = dir.join(file.file_name());
            fs::write(&path, file.as_bytes())
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            debug!(path = %path.display(), bytes = file.as_bytes().len(), "wrote file");
        }

        info!(root = %self.root.display(), files = files.len(), "project files written");
        Ok(files.len())
    }
}
