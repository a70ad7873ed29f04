//! Finalized user choices for a generated project
//!
//! A [`ProjectOptions`] value is built once through [`ProjectOptionsBuilder`]
//! and is read-only afterwards. Every choice axis (framework, database,
//! feature, frontend, git policy, build tool) is a closed enum with a stable
//! key used on the command line and in configuration files.
//!
//! # Example
//!
//! ```rust
//! use blueprint::options::{Database, Feature, Framework, ProjectOptions};
//!
//! # fn main() -> blueprint::Result<()> {
//! let options = ProjectOptions::builder("example.com/app")
//!     .framework(Framework::Chi)
//!     .database(Database::Postgres)
//!     .feature(Feature::Docker)
//!     .build()?;
//!
//! assert_eq!(options.project_name().dir_name(), "app");
//! assert_eq!(options.database_port(), Some(5432));
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use convert_case::{Boundary, Case, Casing};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static MODULE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+(?:/[A-Za-z0-9_.\-]+)*$").expect("module path pattern is valid")
});

macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable key used on the command line and in configuration files
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            /// Every valid key, in declaration order
            #[must_use]
            pub fn keys() -> Vec<String> {
                Self::ALL.iter().map(|v| v.key().to_string()).collect()
            }

            fn from_key(key: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.key() == key)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

keyed_enum! {
    /// Backend HTTP routing library of the generated project
    pub enum Framework {
        /// `net/http` from the Go standard library
        StandardLibrary => "standard-library",
        /// `github.com/go-chi/chi`
        Chi => "chi",
        /// `github.com/gin-gonic/gin`
        Gin => "gin",
        /// `github.com/gofiber/fiber`
        Fiber => "fiber",
        /// `github.com/gorilla/mux`
        GorillaMux => "gorilla/mux",
        /// `github.com/julienschmidt/httprouter`
        HttpRouter => "httprouter",
        /// `github.com/labstack/echo`
        Echo => "echo",
    }
}

keyed_enum! {
    /// Database driver of the generated project
    pub enum Database {
        /// No persistence layer
        None => "none",
        /// `MySQL` via `go-sql-driver/mysql`
        MySql => "mysql",
        /// `PostgreSQL` via `lib/pq`
        Postgres => "postgres",
        /// `SQLite` via `mattn/go-sqlite3`
        Sqlite => "sqlite",
        /// `MongoDB` via the official driver
        Mongo => "mongo",
        /// Redis via `go-redis`
        Redis => "redis",
        /// `ScyllaDB` via `gocql`
        Scylla => "scylla",
        /// Microsoft SQL Server via `go-mssqldb`
        SqlServer => "sqlserver",
    }
}

keyed_enum! {
    /// Optional capability layered onto the base project
    ///
    /// Declaration order is the composition priority order.
    pub enum Feature {
        /// Websocket endpoint
        Websocket => "websocket",
        /// HTMX + templ frontend served by the backend
        Htmx => "htmx",
        /// Tailwind CSS for the HTMX frontend
        Tailwind => "tailwind",
        /// Dockerfile and compose file
        Docker => "docker",
        /// GitHub Actions release and test workflows
        GithubAction => "githubaction",
        /// Background worker backed by asynq
        Worker => "worker",
    }
}

keyed_enum! {
    /// Separately chosen frontend pipeline
    pub enum Frontend {
        /// HTMX templates rendered by the backend
        Htmx => "htmx",
        /// React + Vite application under `frontend/`
        React => "react",
    }
}

keyed_enum! {
    /// What to do with git once the files are written
    pub enum GitPolicy {
        /// Initialise, stage and commit
        Commit => "commit",
        /// Initialise and stage only
        Stage => "stage",
        /// Do not touch git
        Skip => "skip",
    }
}

keyed_enum! {
    /// Build file flavour of the generated project
    pub enum BuildTool {
        /// GNU make `Makefile`
        Make => "make",
        /// `justfile`
        Just => "just",
    }
}

impl FromStr for Framework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| Error::UnsupportedFramework {
            key: s.to_string(),
            valid: Self::keys(),
        })
    }
}

impl FromStr for Database {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| Error::UnsupportedDatabase {
            key: s.to_string(),
            valid: Self::keys(),
        })
    }
}

fn unknown_key(kind: &'static str, key: &str, valid: Vec<String>) -> Error {
    Error::UnknownKey {
        kind,
        key: key.to_string(),
        valid,
    }
}

impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| unknown_key("feature", s, Self::keys()))
    }
}

impl FromStr for Frontend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| unknown_key("frontend", s, Self::keys()))
    }
}

impl FromStr for GitPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| unknown_key("git policy", s, Self::keys()))
    }
}

impl FromStr for BuildTool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| unknown_key("build tool", s, Self::keys()))
    }
}

impl Database {
    /// Conventional port of the database server, if it listens on one
    #[must_use]
    pub const fn default_port(self) -> Option<u16> {
        match self {
            Self::None | Self::Sqlite => None,
            Self::MySql => Some(3306),
            Self::Postgres => Some(5432),
            Self::Mongo => Some(27017),
            Self::Redis => Some(6379),
            Self::Scylla => Some(9042),
            Self::SqlServer => Some(1433),
        }
    }

    /// Whether this is the "no database" choice
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl BuildTool {
    /// File name of the build file this tool reads
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Make => "Makefile",
            Self::Just => "justfile",
        }
    }
}

/// Sanitized project name
///
/// May be a bare name (`my-app`) or a module-style path
/// (`github.com/me/my-app`); the generated directory is the last segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a project name
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProjectName`] naming the first rule the name
    /// breaks.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        let reject = |reason| Error::InvalidProjectName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(reject("must not be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(reject("must not contain whitespace"));
        }
        if name.contains('\\') {
            return Err(reject("only `/` may separate path segments"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/'))
        {
            return Err(reject("only letters, digits, `_`, `.`, `-` and `/` are allowed"));
        }
        if name.starts_with('/') || name.ends_with('/') {
            return Err(reject("must not start or end with `/`"));
        }
        if name
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(reject("segments must not be empty, `.` or `..`"));
        }

        Ok(Self(name.to_string()))
    }

    /// The name as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the directory that will hold the project
    #[must_use]
    pub fn dir_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Go module path of the generated project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    /// Validate a module path against the module grammar
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulePath`] if `raw` does not match.
    pub fn parse(raw: &str) -> Result<Self> {
        if MODULE_PATH.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::InvalidModulePath(raw.to_string()))
        }
    }

    /// The module path as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated, immutable set of choices for one generated project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOptions {
    project_name: ProjectName,
    module_path: ModulePath,
    framework: Framework,
    database: Database,
    frontend: Option<Frontend>,
    features: BTreeSet<Feature>,
    git: GitPolicy,
    build_tool: BuildTool,
    port: u16,
    database_host: String,
    database_port: Option<u16>,
    database_name: String,
    absolute_path: PathBuf,
}

impl ProjectOptions {
    /// Start building options for the named project
    #[must_use]
    pub fn builder(project_name: impl Into<String>) -> ProjectOptionsBuilder {
        ProjectOptionsBuilder::new(project_name)
    }

    /// Project name
    #[must_use]
    pub const fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    /// Go module path
    #[must_use]
    pub const fn module_path(&self) -> &ModulePath {
        &self.module_path
    }

    /// Chosen framework
    #[must_use]
    pub const fn framework(&self) -> Framework {
        self.framework
    }

    /// Chosen database driver
    #[must_use]
    pub const fn database(&self) -> Database {
        self.database
    }

    /// Separately chosen frontend, if any
    #[must_use]
    pub const fn frontend(&self) -> Option<Frontend> {
        self.frontend
    }

    /// Selected features as given, before implication rules
    #[must_use]
    pub const fn features(&self) -> &BTreeSet<Feature> {
        &self.features
    }

    /// Git policy
    #[must_use]
    pub const fn git(&self) -> GitPolicy {
        self.git
    }

    /// Build tool
    #[must_use]
    pub const fn build_tool(&self) -> BuildTool {
        self.build_tool
    }

    /// HTTP port of the generated server
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Database host
    #[must_use]
    pub fn database_host(&self) -> &str {
        &self.database_host
    }

    /// Database port, `None` for drivers that do not listen on one
    #[must_use]
    pub const fn database_port(&self) -> Option<u16> {
        self.database_port
    }

    /// Database (schema/keyspace/file) name
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Parent directory of the project
    #[must_use]
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Directory the project will be written to
    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.absolute_path.join(self.project_name.dir_name())
    }

    /// Fail if the project directory already exists
    ///
    /// This is the only check on the option model that touches the
    /// filesystem, so it is kept out of [`ProjectOptionsBuilder::build`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetExists`] if anything is already at the project
    /// directory, or [`Error::TargetCheck`] if it cannot be inspected.
    pub fn ensure_target_available(&self) -> Result<()> {
        let path = self.project_dir();
        match std::fs::symlink_metadata(&path) {
            Ok(_) => Err(Error::TargetExists { path }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(Error::TargetCheck { path, source }),
        }
    }
}

/// Builder for [`ProjectOptions`]
#[derive(Debug, Clone)]
pub struct ProjectOptionsBuilder {
    project_name: String,
    module_path: Option<String>,
    framework: Framework,
    database: Database,
    frontend: Option<Frontend>,
    features: BTreeSet<Feature>,
    git: GitPolicy,
    build_tool: BuildTool,
    port: u16,
    database_host: Option<String>,
    database_port: Option<u16>,
    database_name: Option<String>,
    absolute_path: PathBuf,
}

impl ProjectOptionsBuilder {
    /// Default HTTP port of generated servers
    pub const DEFAULT_PORT: u16 = 8080;

    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_path: None,
            framework: Framework::StandardLibrary,
            database: Database::None,
            frontend: None,
            features: BTreeSet::new(),
            git: GitPolicy::Commit,
            build_tool: BuildTool::Make,
            port: Self::DEFAULT_PORT,
            database_host: None,
            database_port: None,
            database_name: None,
            absolute_path: PathBuf::from("."),
        }
    }

    /// Override the module path (defaults to the project name)
    #[must_use]
    pub fn module_path(mut self, module_path: impl Into<String>) -> Self {
        self.module_path = Some(module_path.into());
        self
    }

    /// Set the framework
    #[must_use]
    pub const fn framework(mut self, framework: Framework) -> Self {
        self.framework = framework;
        self
    }

    /// Set the database driver
    #[must_use]
    pub const fn database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    /// Set the separate frontend
    #[must_use]
    pub const fn frontend(mut self, frontend: Option<Frontend>) -> Self {
        self.frontend = frontend;
        self
    }

    /// Add one feature; duplicates collapse
    #[must_use]
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    /// Add several features; duplicates collapse
    #[must_use]
    pub fn features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features);
        self
    }

    /// Set the git policy
    #[must_use]
    pub const fn git(mut self, git: GitPolicy) -> Self {
        self.git = git;
        self
    }

    /// Set the build tool
    #[must_use]
    pub const fn build_tool(mut self, build_tool: BuildTool) -> Self {
        self.build_tool = build_tool;
        self
    }

    /// Set the HTTP port
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the database host (defaults to `localhost`)
    #[must_use]
    pub fn database_host(mut self, host: impl Into<String>) -> Self {
        self.database_host = Some(host.into());
        self
    }

    /// Override the database port (defaults to the driver's conventional port)
    #[must_use]
    pub const fn database_port(mut self, port: u16) -> Self {
        self.database_port = Some(port);
        self
    }

    /// Override the database name (defaults to the snake-cased directory name)
    #[must_use]
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set the parent directory of the project
    #[must_use]
    pub fn absolute_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.absolute_path = path.into();
        self
    }

    /// Validate and freeze the options
    ///
    /// The module path defaults to the project name and the database name to
    /// the snake-cased directory name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProjectName`] or [`Error::InvalidModulePath`]
    /// when either fails validation.
    pub fn build(self) -> Result<ProjectOptions> {
        let project_name = ProjectName::parse(&self.project_name)?;
        let module_path =
            ModulePath::parse(self.module_path.as_deref().unwrap_or(project_name.as_str()))?;

        let database_port = if self.database.is_none() {
            None
        } else {
            self.database_port.or_else(|| self.database.default_port())
        };
        let database_name = self
            .database_name
            .unwrap_or_else(|| default_database_name(project_name.dir_name()));

        Ok(ProjectOptions {
            project_name,
            module_path,
            framework: self.framework,
            database: self.database,
            frontend: self.frontend,
            features: self.features,
            git: self.git,
            build_tool: self.build_tool,
            port: self.port,
            database_host: self.database_host.unwrap_or_else(|| "localhost".to_string()),
            database_port,
            database_name,
            absolute_path: self.absolute_path,
        })
    }
}

/// Snake-case identifier for a directory name
///
/// Dots separate words like hyphens do; digits stay attached to the word
/// they follow (`app.v2` becomes `app_v2`).
fn default_database_name(dir_name: &str) -> String {
    dir_name
        .replace('.', "-")
        .without_boundaries(&Boundary::digits())
        .to_case(Case::Snake)
}
