//! Go toolchain collaborator: module init, package fetch, formatting

use anyhow::{Context, Result};
use blueprint::manifest::PackageManifest;
use blueprint::options::ModulePath;
use std::path::Path;
use tracing::{debug, info};

use crate::runner::CommandRunner;

/// Drives `go` and `gofmt` inside a generated project
pub struct GoToolchain<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> GoToolchain<'a, R> {
    /// Toolchain backed by `runner`
    #[must_use]
    pub const fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Fail early when `go` is not on the path
    ///
    /// # Errors
    ///
    /// Returns an error if `go version` cannot be run.
    pub fn ensure_installed(&self, cwd: &Path) -> Result<String> {
        let version = self
            .runner
            .run("go", &["version"], cwd)
            .context("Go does not appear to be installed; see https://go.dev/doc/install")?;
        debug!(%version, "found go toolchain");
        Ok(version)
    }

    /// Initialise the module, fetch every package, tidy and format
    ///
    /// # Errors
    ///
    /// Returns the first failing command with its stderr.
    pub fn prepare(&self, dir: &Path, module: &ModulePath, manifest: &PackageManifest) -> Result<()> {
        self.runner
            .run("go", &["mod", "init", module.as_str()], dir)
            .with_context(|| format!("Failed to initialise module {module}"))?;

        for package in manifest {
            self.runner
                .run("go", &["get", "-u", package.as_str()], dir)
                .with_context(|| format!("Failed to fetch {package}"))?;
            debug!(package = %package, "fetched package");
        }

        self.runner
            .run("go", &["mod", "tidy"], dir)
            .context("Failed to tidy go.mod")?;
        self.runner
            .run("gofmt", &["-s", "-w", "."], dir)
            .context("Failed to format generated sources")?;

        info!(module = %module, packages = manifest.len(), "go module prepared");
        Ok(())
    }
}
