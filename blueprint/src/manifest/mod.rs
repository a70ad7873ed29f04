//! Go package manifest of a generated project
//!
//! The manifest is the ordered list of module coordinates handed to
//! `go get`. Order: framework, database driver, active features in priority
//! order, separate frontend, then the packages every project needs.

use serde::Serialize;

use crate::compose::normalize_features;
use crate::error::{Error, Result};
use crate::options::ProjectOptions;
use crate::registry::{Category, PackageCoordinate, Provider, TemplateKey, TemplateRegistry};

/// Ordered, duplicate-free list of package coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageManifest {
    packages: Vec<PackageCoordinate>,
}

impl PackageManifest {
    /// Coordinates in install order
    #[must_use]
    pub fn packages(&self) -> &[PackageCoordinate] {
        &self.packages
    }

    /// Whether a coordinate is listed
    #[must_use]
    pub fn contains(&self, coordinate: &str) -> bool {
        self.packages.iter().any(|p| p.as_str() == coordinate)
    }

    /// Number of coordinates
    #[must_use]
    pub const fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the manifest is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over the coordinates
    pub fn iter(&self) -> std::slice::Iter<'_, PackageCoordinate> {
        self.packages.iter()
    }

    fn extend_from(&mut self, provider: Option<&Provider>) {
        for package in provider.into_iter().flat_map(Provider::packages) {
            if !self.packages.contains(package) {
                self.packages.push(package.clone());
            }
        }
    }
}

impl<'a> IntoIterator for &'a PackageManifest {
    type Item = &'a PackageCoordinate;
    type IntoIter = std::slice::Iter<'a, PackageCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.iter()
    }
}

/// Collect the packages the project described by `options` depends on
///
/// Feature providers missing from the registry contribute nothing here;
/// [`crate::compose::compose`] is where those gaps are reported.
///
/// # Errors
///
/// [`Error::UnsupportedFramework`] or [`Error::UnsupportedDatabase`] when the
/// chosen framework or driver is not registered.
pub fn build_manifest(
    options: &ProjectOptions,
    registry: &TemplateRegistry,
) -> Result<PackageManifest> {
    let framework = registry
        .lookup(&TemplateKey::Framework(options.framework()))
        .ok_or_else(|| Error::UnsupportedFramework {
            key: options.framework().key().to_string(),
            valid: registry.keys(Category::Framework),
        })?;

    let mut manifest = PackageManifest::default();
    manifest.extend_from(Some(framework));

    if !options.database().is_none() {
        let database = registry
            .lookup(&TemplateKey::Database(options.database()))
            .ok_or_else(|| Error::UnsupportedDatabase {
                key: options.database().key().to_string(),
                valid: registry.keys(Category::Database),
            })?;
        manifest.extend_from(Some(database));
    }

    for feature in normalize_features(options) {
        manifest.extend_from(registry.lookup(&TemplateKey::FeatureFor(feature, options.framework())));
        manifest.extend_from(registry.lookup(&TemplateKey::Feature(feature)));
    }

    if let Some(frontend) = options.frontend() {
        manifest.extend_from(registry.lookup(&TemplateKey::Frontend(frontend)));
    }

    manifest.extend_from(registry.lookup(&TemplateKey::Project));

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Database, Feature, Framework};

    #[test]
    fn test_order_is_framework_database_features_base() {
        let options = ProjectOptions::builder("app")
            .framework(Framework::Chi)
            .database(Database::Postgres)
            .feature(Feature::Worker)
            .feature(Feature::Websocket)
            .build()
            .unwrap();
        let manifest = build_manifest(&options, TemplateRegistry::global()).unwrap();
        let packages: Vec<&str> = manifest.iter().map(PackageCoordinate::as_str).collect();
        assert_eq!(packages.first(), Some(&"github.com/go-chi/chi/v5"));
        assert_eq!(packages.get(1), Some(&"github.com/lib/pq"));
        let websocket = packages
            .iter()
            .position(|p| *p == "github.com/coder/websocket")
            .unwrap();
        let worker = packages
            .iter()
            .position(|p| *p == "github.com/hibiken/asynq")
            .unwrap();
        assert!(websocket < worker);
        assert_eq!(packages.last(), Some(&"github.com/joho/godotenv"));
    }

    #[test]
    fn test_standard_library_has_only_base_packages() {
        let options = ProjectOptions::builder("app").build().unwrap();
        let manifest = build_manifest(&options, TemplateRegistry::global()).unwrap();
        assert_eq!(manifest.len(), 1);
        assert!(manifest.contains("github.com/joho/godotenv"));
    }

    #[test]
    fn test_tailwind_pulls_in_templ() {
        let options = ProjectOptions::builder("app")
            .framework(Framework::Fiber)
            .feature(Feature::Tailwind)
            .build()
            .unwrap();
        let manifest = build_manifest(&options, TemplateRegistry::global()).unwrap();
        assert!(manifest.contains("github.com/a-h/templ"));
        assert!(manifest.contains("github.com/gofiber/fiber/v2/middleware/adaptor"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let shared = "github.com/example/shared";
        let registry = TemplateRegistry::builder()
            .register(
                TemplateKey::Framework(Framework::Gin),
                Provider::new().packages_from(&[shared, "github.com/gin-gonic/gin"]),
            )
            .register(
                TemplateKey::Feature(Feature::Docker),
                Provider::new().packages_from(&[shared]),
            )
            .build();
        let options = ProjectOptions::builder("app")
            .framework(Framework::Gin)
            .feature(Feature::Docker)
            .build()
            .unwrap();
        let manifest = build_manifest(&options, &registry).unwrap();
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn test_unregistered_database_is_rejected() {
        let registry = crate::registry::TemplateRegistryBuilder::from(
            TemplateRegistry::global().clone(),
        )
        .without(&TemplateKey::Database(Database::Scylla))
        .build();
        let options = ProjectOptions::builder("app")
            .database(Database::Scylla)
            .build()
            .unwrap();
        match build_manifest(&options, &registry) {
            Err(Error::UnsupportedDatabase { key, valid }) => {
                assert_eq!(key, "scylla");
                assert!(!valid.contains(&"scylla".to_string()));
            }
            other => panic!("expected an unsupported database, got {other:?}"),
        }
    }
}
