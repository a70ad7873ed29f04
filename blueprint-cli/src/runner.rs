//! External command execution

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs external programs on behalf of the collaborators
///
/// The toolchain and git steps go through this trait so tests can record
/// invocations instead of spawning `go` or `git`.
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd` and return its trimmed stdout
    ///
    /// # Errors
    ///
    /// Returns an error naming the command if it cannot be spawned or exits
    /// unsuccessfully; the error carries the captured stderr.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String>;
}

/// Spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let command_line = format!("{program} {}", args.join(" "));
        debug!(command = %command_line, cwd = %cwd.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute `{command_line}`"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "`{command_line}` failed with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording runner for collaborator tests

    use super::CommandRunner;
    use anyhow::{bail, Result};
    use std::cell::RefCell;
    use std::path::Path;

    /// Records every invocation and fails the ones listed in `failing`
    #[derive(Debug, Default)]
    pub struct RecordingRunner {
        /// Every command line run so far
        pub calls: RefCell<Vec<String>>,
        /// Command lines that fail
        pub failing: Vec<String>,
    }

    impl RecordingRunner {
        /// Runner that fails on exactly these command lines
        #[must_use]
        pub fn failing_on(commands: &[&str]) -> Self {
            Self {
                calls: RefCell::default(),
                failing: commands.iter().map(ToString::to_string).collect(),
            }
        }

        /// Snapshot of the recorded command lines
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<String> {
            let line = format!("{program} {}", args.join(" "));
            self.calls.borrow_mut().push(line.clone());
            if self.failing.contains(&line) {
                bail!("`{line}` failed");
            }
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_reports_command() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemRunner
            .run("blueprint-definitely-not-installed", &["--version"], dir.path())
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("blueprint-definitely-not-installed --version"));
    }
}
