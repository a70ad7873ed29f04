//! Project creation command

use anyhow::{bail, Context, Result};
use blueprint::prelude::*;
use blueprint::options::ProjectName;
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::BlueprintConfig;
use crate::git::GitRunner;
use crate::runner::{CommandRunner, SystemRunner};
use crate::toolchain::GoToolchain;
use crate::writer::ProjectWriter;

/// Flags of `blueprint create`
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    /// Project name; a module-style path such as `github.com/me/app` is allowed
    #[arg(short, long)]
    pub name: Option<String>,

    /// Go module path (defaults to the project name)
    #[arg(long)]
    pub module_path: Option<String>,

    /// HTTP framework (`standard-library`, `chi`, `gin`, `fiber`, `gorilla/mux`, `httprouter`, `echo`)
    #[arg(short, long, value_parser = Framework::from_str)]
    pub framework: Option<Framework>,

    /// Database driver (`none`, `mysql`, `postgres`, `sqlite`, `mongo`, `redis`, `scylla`, `sqlserver`)
    #[arg(short, long, value_parser = Database::from_str)]
    pub driver: Option<Database>,

    /// Advanced feature; repeat or separate with commas
    #[arg(long = "feature", value_delimiter = ',', value_parser = Feature::from_str)]
    pub features: Vec<Feature>,

    /// Separate frontend (`htmx` or `react`)
    #[arg(long, value_parser = Frontend::from_str)]
    pub frontend: Option<Frontend>,

    /// Git policy (`commit`, `stage` or `skip`)
    #[arg(short, long, value_parser = GitPolicy::from_str)]
    pub git: Option<GitPolicy>,

    /// Build tool (`make` or `just`)
    #[arg(short, long, value_parser = BuildTool::from_str)]
    pub builder: Option<BuildTool>,

    /// HTTP port of the generated server
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory the project is created in
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not run `go` or `gofmt` after writing the files
    #[arg(long)]
    pub skip_toolchain: bool,

    /// Read defaults from this file instead of the user and local config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CreateArgs {
    /// Configuration for this invocation
    ///
    /// `--config` replaces the user and local files; otherwise every layer
    /// is read from its standard location.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<BlueprintConfig> {
        self.config
            .as_deref()
            .map_or_else(BlueprintConfig::load, BlueprintConfig::load_from)
    }
}

/// Create a new Go project
pub struct CreateCommand<R: CommandRunner = SystemRunner> {
    options: ProjectOptions,
    dry_run: bool,
    json: bool,
    skip_toolchain: bool,
    runner: R,
}

impl CreateCommand<SystemRunner> {
    /// Resolve flags against the configuration, prompting when `interactive`
    ///
    /// # Errors
    ///
    /// Returns an error if no name is available, a prompt fails, or the
    /// resulting options do not validate.
    pub fn new(args: &CreateArgs, config: &BlueprintConfig, interactive: bool) -> Result<Self> {
        let options = resolve_options(args, config, interactive)?;
        Ok(Self {
            options,
            dry_run: args.dry_run,
            json: args.json,
            skip_toolchain: args.skip_toolchain,
            runner: SystemRunner,
        })
    }
}

impl<R: CommandRunner> CreateCommand<R> {
    /// Swap the process runner used by the toolchain and git steps
    #[must_use]
    pub fn with_runner<T: CommandRunner>(self, runner: T) -> CreateCommand<T> {
        CreateCommand {
            options: self.options,
            dry_run: self.dry_run,
            json: self.json,
            skip_toolchain: self.skip_toolchain,
            runner,
        }
    }

    /// Resolved options
    #[must_use]
    pub const fn options(&self) -> &ProjectOptions {
        &self.options
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns the first failure of validation, composition, writing, the
    /// Go toolchain or git.
    pub fn execute(&self) -> Result<()> {
        let options = &self.options;
        options.ensure_target_available()?;

        let registry = TemplateRegistry::global();
        let composition = compose(options, registry)?;
        let manifest = build_manifest(options, registry)?;
        let plan = Plan::new(options, &composition, &manifest);

        if self.dry_run {
            return self.print_plan(&plan);
        }

        let cwd = Path::new(".");
        let git = GitRunner::new(&self.runner, options.git());
        git.ensure_identity(cwd)?;
        let toolchain = GoToolchain::new(&self.runner);
        if !self.skip_toolchain {
            toolchain.ensure_installed(cwd)?;
        }

        if !self.json {
            println!(
                "{} {} {}",
                style("Creating").green().bold(),
                style("Go project:").bold(),
                style(options.project_name()).cyan().bold()
            );
            println!();
        }

        let spinner = if self.json {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));

        let dir = options.project_dir();
        spinner.set_message("Writing project files...");
        ProjectWriter::new(&dir).write_all(composition.files())?;

        if self.skip_toolchain {
            info!("toolchain skipped");
        } else {
            spinner.set_message("Fetching Go packages...");
            toolchain.prepare(&dir, options.module_path(), &manifest)?;
        }

        spinner.set_message("Initialising git...");
        git.apply(&dir)?;

        spinner.finish_and_clear();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            self.print_success();
        }
        Ok(())
    }

    fn print_plan(&self, plan: &Plan<'_>) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(plan)?);
            return Ok(());
        }

        println!(
            "{} {} {}",
            style("Plan for").bold(),
            style(self.options.project_name()).cyan().bold(),
            style(format!("({})", plan.project_dir.display())).dim()
        );
        println!();
        println!("{}", style("Files:").bold());
        for file in &plan.files {
            println!(
                "  {} {}",
                file.path,
                style(format!("from {}", file.contributor)).dim()
            );
        }
        println!();
        println!("{}", style("Packages:").bold());
        for package in plan.packages {
            println!("  {package}");
        }
        Ok(())
    }

    fn print_success(&self) {
        let options = &self.options;
        let runner = options.build_tool().key();

        println!("{}", style("✓ Project created successfully!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", options.project_dir().display())).cyan()
        );
        println!();
        let mut step = 2;
        if !options.database().is_none() && options.features().contains(&Feature::Docker) {
            println!("  {} Start the database:", style(format!("{step}.")).cyan());
            println!(
                "     {} {}",
                style("$").dim(),
                style(format!("{runner} docker-run")).cyan()
            );
            println!();
            step += 1;
        }
        if self.skip_toolchain {
            println!("  {} Fetch dependencies:", style(format!("{step}.")).cyan());
            println!("     {} {}", style("$").dim(), style("go mod tidy").cyan());
            println!();
            step += 1;
        }
        println!("  {} Start the server:", style(format!("{step}.")).cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("{runner} run")).cyan()
        );
        println!();
        println!("  {} Open in browser:", style(format!("{}.", step + 1)).cyan());
        println!(
            "     {}",
            style(format!("http://localhost:{}", options.port()))
                .cyan()
                .underlined()
        );
    }
}

/// What `create` will write and fetch
#[derive(Debug, Serialize)]
pub struct Plan<'a> {
    project_dir: PathBuf,
    options: &'a ProjectOptions,
    features: &'a BTreeSet<Feature>,
    files: Vec<PlannedFile>,
    packages: &'a PackageManifest,
}

#[derive(Debug, Serialize)]
struct PlannedFile {
    path: String,
    bytes: usize,
    contributor: Contributor,
}

impl<'a> Plan<'a> {
    /// Summarise a composition and its manifest
    #[must_use]
    pub fn new(
        options: &'a ProjectOptions,
        composition: &'a Composition,
        packages: &'a PackageManifest,
    ) -> Self {
        Self {
            project_dir: options.project_dir(),
            options,
            features: composition.features(),
            files: composition
                .files()
                .iter()
                .map(|file| PlannedFile {
                    path: file.path(),
                    bytes: file.as_bytes().len(),
                    contributor: file.contributor(),
                })
                .collect(),
            packages,
        }
    }
}

fn resolve_options(
    args: &CreateArgs,
    config: &BlueprintConfig,
    interactive: bool,
) -> Result<ProjectOptions> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None if interactive => prompt_name()?,
        None => bail!("--name is required when not running in a terminal"),
    };
    let framework = match args.framework {
        Some(framework) => framework,
        None if interactive => prompt_select("Framework", Framework::ALL, config.framework)?,
        None => config.framework,
    };
    let database = match args.driver {
        Some(database) => database,
        None if interactive => prompt_select("Database driver", Database::ALL, config.driver)?,
        None => config.driver,
    };

    let mut builder = ProjectOptions::builder(name)
        .framework(framework)
        .database(database)
        .features(args.features.iter().copied())
        .frontend(args.frontend)
        .git(args.git.unwrap_or(config.git))
        .build_tool(args.builder.unwrap_or(config.builder))
        .port(args.port.unwrap_or(config.port))
        .database_host(config.database_host.clone())
        .absolute_path(args.output.clone().unwrap_or_else(|| config.output.clone()));
    if let Some(module_path) = &args.module_path {
        builder = builder.module_path(module_path.clone());
    }

    let options = builder.build()?;
    info!(
        project = %options.project_name(),
        framework = %options.framework(),
        database = %options.database(),
        "options resolved"
    );
    Ok(options)
}

fn prompt_name() -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Project name")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            ProjectName::parse(input)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
        .interact_text()
        .context("Failed to read project name")
}

fn prompt_select<T: Copy + PartialEq + Display>(prompt: &str, items: &[T], default: T) -> Result<T> {
    let position = items.iter().position(|item| *item == default).unwrap_or(0);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(position)
        .interact()
        .with_context(|| format!("Failed to read {}", prompt.to_lowercase()))?;
    Ok(items[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::RecordingRunner;

    fn args(name: &str, output: &Path) -> CreateArgs {
        CreateArgs {
            name: Some(name.to_string()),
            output: Some(output.to_path_buf()),
            git: Some(GitPolicy::Stage),
            ..CreateArgs::default()
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = BlueprintConfig {
            framework: Framework::Gin,
            port: 3000,
            ..BlueprintConfig::default()
        };
        let mut args = args("app", Path::new("/tmp"));
        args.framework = Some(Framework::Echo);

        let options = resolve_options(&args, &config, false).unwrap();
        assert_eq!(options.framework(), Framework::Echo);
        assert_eq!(options.port(), 3000);
        assert_eq!(options.project_dir(), PathBuf::from("/tmp/app"));
    }

    #[test]
    fn test_config_fills_missing_choices_without_terminal() {
        let config = BlueprintConfig {
            driver: Database::Redis,
            ..BlueprintConfig::default()
        };
        let options = resolve_options(&args("app", Path::new(".")), &config, false).unwrap();
        assert_eq!(options.database(), Database::Redis);
        assert_eq!(options.framework(), Framework::StandardLibrary);
    }

    #[test]
    fn test_name_required_without_terminal() {
        let err = resolve_options(&CreateArgs::default(), &BlueprintConfig::default(), false)
            .unwrap_err();
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let result = CreateCommand::new(
            &args("my project", Path::new(".")),
            &BlueprintConfig::default(),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_writes_and_runs_collaborators() {
        let temp = tempfile::tempdir().unwrap();
        let mut args = args("example.com/shop", temp.path());
        args.driver = Some(Database::Postgres);

        let runner = RecordingRunner::default();
        let command = CreateCommand::new(&args, &BlueprintConfig::default(), false)
            .unwrap()
            .with_runner(runner);
        command.execute().unwrap();

        assert!(temp.path().join("shop/internal/database/database.go").is_file());
        let calls = command.runner.calls();
        assert_eq!(calls[0], "go version");
        assert!(calls.contains(&"go mod init example.com/shop".to_string()));
        assert!(calls.contains(&"go get -u github.com/lib/pq".to_string()));
        assert_eq!(calls[calls.len() - 2..], ["git init", "git add ."]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let mut args = args("app", temp.path());
        args.dry_run = true;

        let command = CreateCommand::new(&args, &BlueprintConfig::default(), false)
            .unwrap()
            .with_runner(RecordingRunner::default());
        command.execute().unwrap();

        assert!(!temp.path().join("app").exists());
        assert!(command.runner.calls().is_empty());
    }

    #[test]
    fn test_existing_target_is_refused() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("app")).unwrap();

        let args = args("app", temp.path());
        let command = CreateCommand::new(&args, &BlueprintConfig::default(), false)
            .unwrap()
            .with_runner(RecordingRunner::default());
        let err = command.execute().unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert!(command.runner.calls().is_empty());
    }

    #[test]
    fn test_config_flag_reads_only_that_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("team.toml");
        std::fs::write(&path, "framework = \"fiber\"\nbuilder = \"just\"\n").unwrap();
        let args = CreateArgs {
            config: Some(path),
            ..CreateArgs::default()
        };

        let config = args.load_config().unwrap();
        assert_eq!(config.framework, Framework::Fiber);
        assert_eq!(config.builder, BuildTool::Just);

        let missing = CreateArgs {
            config: Some(temp.path().join("missing.toml")),
            ..CreateArgs::default()
        };
        assert!(missing.load_config().is_err());
    }

    #[test]
    fn test_plan_lists_every_file() {
        let options = ProjectOptions::builder("app")
            .feature(Feature::Tailwind)
            .build()
            .unwrap();
        let registry = TemplateRegistry::global();
        let composition = compose(&options, registry).unwrap();
        let manifest = build_manifest(&options, registry).unwrap();

        let json = serde_json::to_value(Plan::new(&options, &composition, &manifest)).unwrap();
        assert_eq!(
            json["files"].as_array().unwrap().len(),
            composition.files().len()
        );
        assert_eq!(json["features"], serde_json::json!(["htmx", "tailwind"]));
        assert!(json["packages"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("github.com/a-h/templ")));
    }
}
