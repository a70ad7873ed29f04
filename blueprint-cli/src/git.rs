//! Git collaborator

use anyhow::{bail, Context, Result};
use blueprint::options::GitPolicy;
use std::path::Path;
use tracing::{debug, info};

use crate::runner::CommandRunner;

/// Applies a [`GitPolicy`] to a freshly written project
pub struct GitRunner<'a, R: CommandRunner> {
    runner: &'a R,
    policy: GitPolicy,
}

impl<'a, R: CommandRunner> GitRunner<'a, R> {
    /// Git runner for `policy`
    #[must_use]
    pub const fn new(runner: &'a R, policy: GitPolicy) -> Self {
        Self { runner, policy }
    }

    /// Check that a commit will be possible
    ///
    /// Only [`GitPolicy::Commit`] needs an identity. Run this before any
    /// file is written so a missing `user.name` does not leave a half
    /// finished project behind.
    ///
    /// # Errors
    ///
    /// Returns an error if `git config` fails for `user.name` or
    /// `user.email` (git exits non-zero for an unset key), or prints an
    /// empty value. The runner's error is kept as the cause.
    pub fn ensure_identity(&self, cwd: &Path) -> Result<()> {
        if self.policy != GitPolicy::Commit {
            return Ok(());
        }

        for key in ["user.name", "user.email"] {
            let hint = || {
                format!("git {key} is not set; run `git config --global {key} <value>` or pass --git stage")
            };
            let value = self
                .runner
                .run("git", &["config", key], cwd)
                .with_context(hint)?;
            if value.is_empty() {
                bail!(hint());
            }
            debug!(key, %value, "git identity");
        }
        Ok(())
    }

    /// Initialise, stage and (for `Commit`) commit the project
    ///
    /// # Errors
    ///
    /// Returns the first failing git command with its stderr.
    pub fn apply(&self, dir: &Path) -> Result<()> {
        if self.policy == GitPolicy::Skip {
            debug!("git skipped");
            return Ok(());
        }

        self.runner
            .run("git", &["init"], dir)
            .context("Failed to initialise git repository")?;
        self.runner
            .run("git", &["add", "."], dir)
            .context("Failed to stage files")?;

        if self.policy == GitPolicy::Commit {
            self.ensure_identity(dir)?;
            self.runner
                .run("git", &["commit", "-m", "Initial commit"], dir)
                .context("Failed to create initial commit")?;
        }

        info!(policy = %self.policy, "git applied");
        Ok(())
    }
}
