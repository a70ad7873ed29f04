//! Composition engine
//!
//! Turns a [`ProjectOptions`] into the ordered list of files of the generated
//! project. Resolution happens first: every provider the options need is
//! looked up and checked before any text is produced, so an error never comes
//! with a partial file list.
//!
//! # Example
//!
//! ```rust
//! use blueprint::compose::compose;
//! use blueprint::options::{Database, Feature, Framework, ProjectOptions};
//! use blueprint::registry::TemplateRegistry;
//!
//! # fn main() -> blueprint::Result<()> {
//! let options = ProjectOptions::builder("example.com/app")
//!     .framework(Framework::Chi)
//!     .database(Database::Postgres)
//!     .feature(Feature::Docker)
//!     .build()?;
//!
//! let composition = compose(&options, TemplateRegistry::global())?;
//! assert!(composition.file("internal/database/database.go").is_some());
//! assert!(composition.file("docker-compose.yml").is_some());
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::options::{Database, Feature, Frontend, ProjectOptions};
use crate::registry::{Category, Operation, Provider, TemplateKey, TemplateRegistry};
use crate::render::{render, splice, Slot, Slots};

/// Component that produced a file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "lowercase")]
pub enum Contributor {
    /// Framework and project files every project gets
    Base,
    /// The database driver
    Database(Database),
    /// An advanced feature
    Feature(Feature),
    /// A separate frontend
    Frontend(Frontend),
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("the base project"),
            Self::Database(database) => write!(f, "database `{database}`"),
            Self::Feature(feature) => write!(f, "feature `{feature}`"),
            Self::Frontend(frontend) => write!(f, "frontend `{frontend}`"),
        }
    }
}

/// One rendered file of the generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOperation {
    relative_path: String,
    file_name: String,
    content: String,
    contributor: Contributor,
}

impl FileOperation {
    /// Directory relative to the project root, empty for the root
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// File name
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// `relative_path/file_name`, or just the file name at the root
    #[must_use]
    pub fn path(&self) -> String {
        join(&self.relative_path, &self.file_name)
    }

    /// Rendered content
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Rendered content as bytes, ready to be written
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Who produced this file
    #[must_use]
    pub const fn contributor(&self) -> Contributor {
        self.contributor
    }
}

/// Result of a successful composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    features: BTreeSet<Feature>,
    files: Vec<FileOperation>,
}

impl Composition {
    /// Feature set after implication rules
    #[must_use]
    pub const fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    /// Ordered file operations
    #[must_use]
    pub fn files(&self) -> &[FileOperation] {
        &self.files
    }

    /// Find a file by its full relative path
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&FileOperation> {
        self.files.iter().find(|op| op.path() == path)
    }

    /// Take the file operations
    #[must_use]
    pub fn into_files(self) -> Vec<FileOperation> {
        self.files
    }
}

/// Apply the implication rules to the selected features
///
/// The HTMX frontend and Tailwind both imply the HTMX feature.
#[must_use]
pub fn normalize_features(options: &ProjectOptions) -> BTreeSet<Feature> {
    let mut features = options.features().clone();
    if options.frontend() == Some(Frontend::Htmx) || features.contains(&Feature::Tailwind) {
        features.insert(Feature::Htmx);
    }
    features
}

/// Compose the file operations for `options` from `registry`
///
/// # Errors
///
/// - [`Error::UnsupportedFramework`] / [`Error::UnsupportedDatabase`] when
///   the chosen key is not registered
/// - [`Error::IncompleteTemplate`] when a provider lacks a required operation
/// - [`Error::UnsupportedCombination`] when a feature has no provider for
///   the framework
/// - [`Error::ConflictingFrontend`] for React combined with HTMX or Tailwind
/// - [`Error::TemplateSubstitution`] when rendering fails
/// - [`Error::PathCollision`] when two contributors emit the same path
pub fn compose(options: &ProjectOptions, registry: &TemplateRegistry) -> Result<Composition> {
    let features = normalize_features(options);
    let resolved = Resolved::resolve(options, &features, registry)?;
    let files = resolved.assemble(options)?;
    ensure_unique_paths(&files)?;

    Ok(Composition { features, files })
}

/// A file before splicing and rendering
struct Draft {
    dir: &'static str,
    name: &'static str,
    text: String,
    contributor: Contributor,
}

impl Draft {
    fn new(
        dir: &'static str,
        name: &'static str,
        text: impl Into<String>,
        contributor: Contributor,
    ) -> Self {
        Self {
            dir,
            name,
            text: text.into(),
            contributor,
        }
    }
}

struct FeatureProviders<'r> {
    feature: Feature,
    generic: Option<&'r Provider>,
    specific: Option<&'r Provider>,
}

impl<'r> FeatureProviders<'r> {
    fn each(&self) -> impl Iterator<Item = &'r Provider> {
        self.generic.into_iter().chain(self.specific)
    }
}

/// Every provider the options need, checked for required operations
struct Resolved<'r> {
    framework: &'r Provider,
    database: Option<(Database, &'r Provider)>,
    features: Vec<FeatureProviders<'r>>,
    frontend: Option<(Frontend, &'r Provider)>,
    build_tool: &'r Provider,
    project: &'r Provider,
    docker: bool,
}

impl<'r> Resolved<'r> {
    fn resolve(
        options: &ProjectOptions,
        features: &BTreeSet<Feature>,
        registry: &'r TemplateRegistry,
    ) -> Result<Self> {
        let framework_key = TemplateKey::Framework(options.framework());
        let framework = registry
            .lookup(&framework_key)
            .ok_or_else(|| Error::UnsupportedFramework {
                key: options.framework().key().to_string(),
                valid: registry.keys(Category::Framework),
            })?;
        for operation in [
            Operation::Main,
            Operation::Server,
            Operation::Routes,
            Operation::TestHandler,
        ] {
            require(framework, framework_key, operation)?;
        }

        let database = if options.database().is_none() {
            None
        } else {
            let key = TemplateKey::Database(options.database());
            let provider = registry
                .lookup(&key)
                .ok_or_else(|| Error::UnsupportedDatabase {
                    key: options.database().key().to_string(),
                    valid: registry.keys(Category::Database),
                })?;
            require(provider, key, Operation::Service)?;
            require(provider, key, Operation::Env)?;
            Some((options.database(), provider))
        };

        let features = features
            .iter()
            .map(|&feature| resolve_feature(options, features, feature, registry))
            .collect::<Result<Vec<_>>>()?;

        let frontend = match options.frontend() {
            Some(Frontend::React) => {
                let provider = registry
                    .lookup(&TemplateKey::Frontend(Frontend::React))
                    .ok_or_else(|| Error::UnknownKey {
                        kind: "frontend",
                        key: Frontend::React.key().to_string(),
                        valid: registry.keys(Category::Frontend),
                    })?;
                Some((Frontend::React, provider))
            }
            Some(Frontend::Htmx) | None => None,
        };

        let build_key = TemplateKey::BuildTool(options.build_tool());
        let build_tool = registry
            .lookup(&build_key)
            .ok_or_else(|| Error::UnknownKey {
                kind: "build tool",
                key: options.build_tool().key().to_string(),
                valid: registry.keys(Category::BuildTool),
            })?;
        require(build_tool, build_key, Operation::Build)?;

        let project = registry
            .lookup(&TemplateKey::Project)
            .ok_or_else(|| Error::IncompleteTemplate {
                key: TemplateKey::Project.to_string(),
                operation: Operation::Readme,
            })?;
        for operation in [
            Operation::Readme,
            Operation::Gitignore,
            Operation::AirToml,
            Operation::Env,
        ] {
            require(project, TemplateKey::Project, operation)?;
        }

        Ok(Self {
            framework,
            database,
            features,
            frontend,
            build_tool,
            project,
            docker: options.features().contains(&Feature::Docker),
        })
    }

    fn assemble(&self, options: &ProjectOptions) -> Result<Vec<FileOperation>> {
        let mut drafts = self.base_drafts(options);
        let mut slots = Slots::default();

        if let Some((database, provider)) = self.database {
            let contributor = Contributor::Database(database);
            drafts.push(Draft::new(
                "internal/database",
                "database.go",
                provider.template(Operation::Service).unwrap_or_default(),
                contributor,
            ));
            if let Some(test) = provider.template(Operation::IntegrationTest) {
                drafts.push(Draft::new(
                    "internal/database",
                    "database_test.go",
                    test,
                    contributor,
                ));
            }
            if self.docker {
                if let Some(service) = provider.template(Operation::ComposeService) {
                    slots.push(Slot::Services, service);
                }
            }
        }

        for entry in &self.features {
            let contributor = Contributor::Feature(entry.feature);
            for provider in entry.each() {
                for (operation, slot) in [
                    (Operation::Imports, Slot::Imports),
                    (Operation::RoutesFragment, Slot::Routes),
                    (Operation::HandlersFragment, Slot::Handlers),
                    (Operation::HeadFragment, Slot::Head),
                ] {
                    if let Some(fragment) = provider.template(operation) {
                        slots.push(slot, fragment);
                    }
                }
                drafts.extend(
                    provider
                        .files()
                        .iter()
                        .map(|file| Draft::new(file.dir, file.name, file.text, contributor)),
                );
            }
        }

        if let Some((frontend, provider)) = self.frontend {
            drafts.extend(provider.files().iter().map(|file| {
                Draft::new(file.dir, file.name, file.text, Contributor::Frontend(frontend))
            }));
        }

        drafts
            .into_iter()
            .map(|draft| {
                let path = join(draft.dir, draft.name);
                let spliced = splice(&path, &draft.text, &slots)?;
                let content = render(&path, &spliced, options)?;
                Ok(FileOperation {
                    relative_path: draft.dir.to_string(),
                    file_name: draft.name.to_string(),
                    content,
                    contributor: draft.contributor,
                })
            })
            .collect()
    }

    /// Framework, build and project files, before any feature contributes
    fn base_drafts(&self, options: &ProjectOptions) -> Vec<Draft> {
        let base = Contributor::Base;
        let with_db = self.database.is_some();
        let plain = |operation: Operation| self.framework.template(operation).unwrap_or_default();
        let pick = |operation: Operation, db_variant: Operation| {
            self.framework
                .template(db_variant)
                .filter(|_| with_db)
                .unwrap_or_else(|| plain(operation))
        };
        let build = self
            .build_tool
            .template(Operation::BuildWithDocker)
            .filter(|_| self.docker)
            .or_else(|| self.build_tool.template(Operation::Build))
            .unwrap_or_default();

        vec![
            Draft::new("cmd/api", "main.go", plain(Operation::Main), base),
            Draft::new(
                "internal/server",
                "server.go",
                pick(Operation::Server, Operation::ServerWithDb),
                base,
            ),
            Draft::new(
                "internal/server",
                "routes.go",
                pick(Operation::Routes, Operation::RoutesWithDb),
                base,
            ),
            Draft::new("tests", "handler_test.go", plain(Operation::TestHandler), base),
            Draft::new("", options.build_tool().file_name(), build, base),
            Draft::new("", "README.md", self.project_text(Operation::Readme), base),
            Draft::new("", ".gitignore", self.project_text(Operation::Gitignore), base),
            Draft::new("", ".air.toml", self.project_text(Operation::AirToml), base),
            Draft::new("", ".env", self.env_file(), base),
        ]
    }

    fn project_text(&self, operation: Operation) -> &'static str {
        self.project.template(operation).unwrap_or_default()
    }

    /// `.env`: project lines, then the driver's, then each feature's
    fn env_file(&self) -> String {
        let sections = std::iter::once(self.project_text(Operation::Env))
            .chain(
                self.database
                    .and_then(|(_, provider)| provider.template(Operation::Env)),
            )
            .chain(
                self.features
                    .iter()
                    .flat_map(FeatureProviders::each)
                    .filter_map(|provider| provider.template(Operation::Env)),
            );

        let mut env = String::new();
        for section in sections {
            if !env.is_empty() && !env.ends_with('\n') {
                env.push('\n');
            }
            env.push_str(section);
        }
        env
    }
}

fn resolve_feature<'r>(
    options: &ProjectOptions,
    features: &BTreeSet<Feature>,
    feature: Feature,
    registry: &'r TemplateRegistry,
) -> Result<FeatureProviders<'r>> {
    let framework = options.framework();
    let unsupported = || Error::UnsupportedCombination { feature, framework };
    let specific_key = TemplateKey::FeatureFor(feature, framework);
    let generic = registry.lookup(&TemplateKey::Feature(feature));
    let specific = registry.lookup(&specific_key);

    match feature {
        Feature::Websocket => {
            let provider = specific.ok_or_else(unsupported)?;
            require(provider, specific_key, Operation::Imports)?;
            require(provider, specific_key, Operation::RoutesFragment)?;
        }
        Feature::Htmx => {
            if options.frontend() == Some(Frontend::React) {
                return Err(Error::ConflictingFrontend {
                    frontend: Frontend::React,
                    features: features
                        .iter()
                        .copied()
                        .filter(|f| matches!(f, Feature::Htmx | Feature::Tailwind))
                        .filter(|f| options.features().contains(f))
                        .collect(),
                });
            }
            let provider = specific.ok_or_else(unsupported)?;
            require(provider, specific_key, Operation::Imports)?;
            require(provider, specific_key, Operation::RoutesFragment)?;
            generic.ok_or_else(unsupported)?;
        }
        Feature::Tailwind => {
            let key = TemplateKey::Feature(feature);
            require(generic.ok_or_else(unsupported)?, key, Operation::HeadFragment)?;
        }
        Feature::Docker | Feature::GithubAction | Feature::Worker => {
            generic.ok_or_else(unsupported)?;
        }
    }

    Ok(FeatureProviders {
        feature,
        generic,
        specific,
    })
}

fn require(provider: &Provider, key: TemplateKey, operation: Operation) -> Result<&'static str> {
    provider
        .template(operation)
        .ok_or_else(|| Error::IncompleteTemplate {
            key: key.to_string(),
            operation,
        })
}

fn ensure_unique_paths(files: &[FileOperation]) -> Result<()> {
    let mut seen: HashMap<String, Contributor> = HashMap::with_capacity(files.len());
    for file in files {
        let path = file.path();
        if let Some(first) = seen.get(&path) {
            return Err(Error::PathCollision {
                path,
                first: first.to_string(),
                second: file.contributor.to_string(),
            });
        }
        seen.insert(path, file.contributor);
    }
    Ok(())
}

fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
