//! Registry of template providers
//!
//! Maps a [`TemplateKey`] to a [`Provider`] holding bundled template text,
//! whole-file templates and the Go packages the provider needs. The registry
//! is built once and never mutated; lookups are hash lookups with no I/O.
//!
//! # Example
//!
//! ```rust
//! use blueprint::options::Framework;
//! use blueprint::registry::{Operation, TemplateKey, TemplateRegistry};
//!
//! let registry = TemplateRegistry::global();
//! let chi = registry.lookup(&TemplateKey::Framework(Framework::Chi)).unwrap();
//! assert!(chi.template(Operation::Routes).is_some());
//! assert_eq!(chi.packages()[0].as_str(), "github.com/go-chi/chi/v5");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::options::{BuildTool, Database, Feature, Framework, Frontend};
use crate::templates;

static GLOBAL: Lazy<TemplateRegistry> = Lazy::new(templates::bundled);

/// Named template operation a provider may supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// `cmd/api/main.go`
    Main,
    /// `internal/server/server.go`
    Server,
    /// `internal/server/server.go` when a database is wired in
    ServerWithDb,
    /// `internal/server/routes.go`
    Routes,
    /// `internal/server/routes.go` when a database is wired in
    RoutesWithDb,
    /// `tests/handler_test.go`
    TestHandler,
    /// `internal/database/database.go`
    Service,
    /// Lines appended to `.env`
    Env,
    /// `internal/database/database_test.go`
    IntegrationTest,
    /// Service block spliced into `docker-compose.yml`
    ComposeService,
    /// Import lines spliced into `routes.go`
    Imports,
    /// Route registrations spliced into `routes.go`
    RoutesFragment,
    /// Handler functions spliced into `routes.go`
    HandlersFragment,
    /// Markup spliced into the `<head>` of `base.templ`
    HeadFragment,
    /// Build file
    Build,
    /// Build file with docker targets
    BuildWithDocker,
    /// `README.md`
    Readme,
    /// `.gitignore`
    Gitignore,
    /// `.air.toml`
    AirToml,
}

impl Operation {
    /// Stable name used in error messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Server => "server",
            Self::ServerWithDb => "serverWithDB",
            Self::Routes => "routes",
            Self::RoutesWithDb => "routesWithDB",
            Self::TestHandler => "testHandler",
            Self::Service => "service",
            Self::Env => "env",
            Self::IntegrationTest => "integrationTest",
            Self::ComposeService => "composeService",
            Self::Imports => "imports",
            Self::RoutesFragment => "routesFragment",
            Self::HandlersFragment => "handlersFragment",
            Self::HeadFragment => "headFragment",
            Self::Build => "build",
            Self::BuildWithDocker => "buildWithDocker",
            Self::Readme => "readme",
            Self::Gitignore => "gitignore",
            Self::AirToml => "airToml",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// External Go module coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageCoordinate(String);

impl PackageCoordinate {
    /// Wrap a module coordinate
    #[must_use]
    pub fn new(coordinate: impl Into<String>) -> Self {
        Self(coordinate.into())
    }

    /// The coordinate string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A template emitted as a whole file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    /// Directory relative to the project root, empty for the root
    pub dir: &'static str,
    /// File name
    pub name: &'static str,
    /// Template text
    pub text: &'static str,
}

/// Template capability attached to one registry key
#[derive(Debug, Clone, Default)]
pub struct Provider {
    operations: BTreeMap<Operation, &'static str>,
    files: Vec<FileTemplate>,
    packages: Vec<PackageCoordinate>,
}

impl Provider {
    /// Empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the text for an operation
    #[must_use]
    pub fn with(mut self, operation: Operation, text: &'static str) -> Self {
        self.operations.insert(operation, text);
        self
    }

    /// Attach a whole-file template
    #[must_use]
    pub fn file(mut self, dir: &'static str, name: &'static str, text: &'static str) -> Self {
        self.files.push(FileTemplate { dir, name, text });
        self
    }

    /// Attach the Go packages this provider needs
    #[must_use]
    pub fn packages_from(mut self, packages: &[&str]) -> Self {
        self.packages
            .extend(packages.iter().map(|p| PackageCoordinate::new(*p)));
        self
    }

    /// Text of an operation, `None` when the provider does not supply it
    #[must_use]
    pub fn template(&self, operation: Operation) -> Option<&'static str> {
        self.operations.get(&operation).copied()
    }

    /// Operations this provider supplies
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.operations.keys().copied()
    }

    /// Whole-file templates, in registration order
    #[must_use]
    pub fn files(&self) -> &[FileTemplate] {
        &self.files
    }

    /// Fixed package list
    #[must_use]
    pub fn packages(&self) -> &[PackageCoordinate] {
        &self.packages
    }

    /// Environment keys declared by the `Env` operation
    ///
    /// Reads the `KEY=value` lines of the template, skipping comments.
    #[must_use]
    pub fn declared_env_keys(&self) -> Vec<&'static str> {
        let Some(env) = self.template(Operation::Env) else {
            return Vec::new();
        };
        env.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('=').map(|(key, _)| key.trim()))
            .collect()
    }
}

/// Registry category, used to list valid keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Web frameworks
    Framework,
    /// Database drivers
    Database,
    /// Advanced features, generic or framework specific
    Feature,
    /// Separate frontends
    Frontend,
    /// Build tools
    BuildTool,
}

/// Registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// Framework provider
    Framework(Framework),
    /// Database driver provider
    Database(Database),
    /// Framework-agnostic feature provider
    Feature(Feature),
    /// Feature provider specific to one framework
    FeatureFor(Feature, Framework),
    /// Separate frontend provider
    Frontend(Frontend),
    /// Build tool provider
    BuildTool(BuildTool),
    /// Files every project gets
    Project,
}

impl TemplateKey {
    /// Category this key belongs to, `None` for [`TemplateKey::Project`]
    #[must_use]
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Framework(_) => Some(Category::Framework),
            Self::Database(_) => Some(Category::Database),
            Self::Feature(_) | Self::FeatureFor(..) => Some(Category::Feature),
            Self::Frontend(_) => Some(Category::Frontend),
            Self::BuildTool(_) => Some(Category::BuildTool),
            Self::Project => None,
        }
    }
}

impl TemplateKey {
    const fn ordinal_in(self, category: Category) -> Option<(usize, &'static str)> {
        match (self, category) {
            (Self::Framework(f), Category::Framework) => Some((f as usize, f.key())),
            (Self::Database(d), Category::Database) => Some((d as usize, d.key())),
            (Self::Feature(feat) | Self::FeatureFor(feat, _), Category::Feature) => {
                Some((feat as usize, feat.key()))
            }
            (Self::Frontend(fe), Category::Frontend) => Some((fe as usize, fe.key())),
            (Self::BuildTool(b), Category::BuildTool) => Some((b as usize, b.key())),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Framework(framework) => write!(f, "framework:{framework}"),
            Self::Database(database) => write!(f, "database:{database}"),
            Self::Feature(feature) => write!(f, "feature:{feature}"),
            Self::FeatureFor(feature, framework) => write!(f, "feature:{feature}:{framework}"),
            Self::Frontend(frontend) => write!(f, "frontend:{frontend}"),
            Self::BuildTool(tool) => write!(f, "build-tool:{tool}"),
            Self::Project => f.write_str("project"),
        }
    }
}

/// Read-only map from [`TemplateKey`] to [`Provider`]
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    providers: HashMap<TemplateKey, Provider>,
}

impl TemplateRegistry {
    /// Process-wide registry of every bundled template
    ///
    /// Built on first use and shared by all callers.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Start an empty registry
    #[must_use]
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    /// Find the provider for a key
    #[must_use]
    pub fn lookup(&self, key: &TemplateKey) -> Option<&Provider> {
        self.providers.get(key)
    }

    /// Registered keys of a category, in declaration order
    #[must_use]
    pub fn keys(&self, category: Category) -> Vec<String> {
        let mut keys: Vec<(usize, &'static str)> = self
            .providers
            .keys()
            .filter_map(|key| key.ordinal_in(category))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys.into_iter().map(|(_, key)| key.to_string()).collect()
    }

    /// Number of registered providers
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Builder for [`TemplateRegistry`]
///
/// Registering the same key twice replaces the earlier provider.
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    providers: HashMap<TemplateKey, Provider>,
}

impl TemplateRegistryBuilder {
    /// Register a provider under a key
    #[must_use]
    pub fn register(mut self, key: TemplateKey, provider: Provider) -> Self {
        self.providers.insert(key, provider);
        self
    }

    /// Drop a key, used to build registries with deliberate gaps
    #[must_use]
    pub fn without(mut self, key: &TemplateKey) -> Self {
        self.providers.remove(key);
        self
    }

    /// Freeze the registry
    #[must_use]
    pub fn build(self) -> TemplateRegistry {
        TemplateRegistry {
            providers: self.providers,
        }
    }
}

impl From<TemplateRegistry> for TemplateRegistryBuilder {
    fn from(registry: TemplateRegistry) -> Self {
        Self {
            providers: registry.providers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unknown_key_is_none() {
        let registry = TemplateRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry
            .lookup(&TemplateKey::Framework(Framework::Chi))
            .is_none());
    }

    #[test]
    fn test_provider_operations() {
        let provider = Provider::new()
            .with(Operation::Main, "package main")
            .packages_from(&["github.com/example/pkg"]);
        assert_eq!(provider.template(Operation::Main), Some("package main"));
        assert_eq!(provider.template(Operation::Server), None);
        assert_eq!(provider.packages()[0].as_str(), "github.com/example/pkg");
        assert_eq!(provider.operations().collect::<Vec<_>>(), vec![Operation::Main]);
    }

    #[test]
    fn test_declared_env_keys() {
        let provider = Provider::new().with(Operation::Env, "# db\nDB_HOST={DatabaseHost}\n\nDB_PORT=1\n");
        assert_eq!(provider.declared_env_keys(), vec!["DB_HOST", "DB_PORT"]);
        assert!(Provider::new().declared_env_keys().is_empty());
    }

    #[test]
    fn test_keys_are_ordered_and_deduplicated() {
        let registry = TemplateRegistry::builder()
            .register(TemplateKey::Framework(Framework::Echo), Provider::new())
            .register(TemplateKey::Framework(Framework::Chi), Provider::new())
            .register(TemplateKey::FeatureFor(Feature::Htmx, Framework::Chi), Provider::new())
            .register(TemplateKey::FeatureFor(Feature::Htmx, Framework::Echo), Provider::new())
            .register(TemplateKey::Feature(Feature::Docker), Provider::new())
            .build();
        assert_eq!(registry.keys(Category::Framework), vec!["chi", "echo"]);
        assert_eq!(registry.keys(Category::Feature), vec!["htmx", "docker"]);
        assert!(registry.keys(Category::Database).is_empty());
    }

    #[test]
    fn test_builder_without_removes_key() {
        let key = TemplateKey::Framework(Framework::Gin);
        let registry = TemplateRegistry::builder()
            .register(key, Provider::new())
            .without(&key)
            .build();
        assert!(registry.lookup(&key).is_none());
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateRegistry>();
        assert_send_sync::<Provider>();
    }

    #[test]
    fn test_key_display() {
        assert_eq!(
            TemplateKey::FeatureFor(Feature::Websocket, Framework::Fiber).to_string(),
            "feature:websocket:fiber"
        );
        assert_eq!(TemplateKey::Project.to_string(), "project");
    }
}
