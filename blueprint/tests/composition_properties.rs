//! Property-based tests for the composition engine and manifest builder.
//!
//! Every generated option model is valid, so composition must succeed and
//! the invariants must hold for each one.

use std::collections::HashSet;

use proptest::prelude::*;

use blueprint::compose::compose;
use blueprint::manifest::build_manifest;
use blueprint::options::{BuildTool, Database, Feature, Framework, Frontend, ProjectOptions};
use blueprint::registry::{PackageCoordinate, Provider, TemplateKey, TemplateRegistry};

/// Strategy for a feature subset.
fn features() -> impl Strategy<Value = Vec<Feature>> {
    prop::collection::vec(any::<bool>(), Feature::ALL.len()).prop_map(|mask| {
        Feature::ALL
            .iter()
            .zip(mask)
            .filter_map(|(feature, on)| on.then_some(*feature))
            .collect()
    })
}

/// Strategy for option models that compose without error.
fn valid_options() -> impl Strategy<Value = ProjectOptions> {
    (
        prop::sample::select(Framework::ALL.to_vec()),
        prop::sample::select(Database::ALL.to_vec()),
        features(),
        prop::option::of(prop::sample::select(Frontend::ALL.to_vec())),
        prop::sample::select(BuildTool::ALL.to_vec()),
        1024u16..=65535,
    )
        .prop_filter_map(
            "react cannot be combined with htmx or tailwind",
            |(framework, database, features, frontend, build_tool, port)| {
                let wants_htmx = features
                    .iter()
                    .any(|f| matches!(f, Feature::Htmx | Feature::Tailwind));
                if wants_htmx && frontend == Some(Frontend::React) {
                    return None;
                }
                ProjectOptions::builder("github.com/acme/service")
                    .framework(framework)
                    .database(database)
                    .features(features)
                    .frontend(frontend)
                    .build_tool(build_tool)
                    .port(port)
                    .build()
                    .ok()
            },
        )
}

proptest! {
    /// Composing the same options twice yields identical output.
    #[test]
    fn prop_composition_is_deterministic(options in valid_options()) {
        let registry = TemplateRegistry::global();
        let first = compose(&options, registry).unwrap();
        let second = compose(&options, registry).unwrap();
        prop_assert_eq!(first, second);
    }

    /// No two file operations share a path.
    #[test]
    fn prop_paths_are_unique(options in valid_options()) {
        let composition = compose(&options, TemplateRegistry::global()).unwrap();
        let mut seen = HashSet::new();
        for file in composition.files() {
            prop_assert!(seen.insert(file.path()), "duplicate path {}", file.path());
        }
    }

    /// Tailwind always brings HTMX along, and nothing selected is dropped.
    #[test]
    fn prop_tailwind_implies_htmx(options in valid_options()) {
        let composition = compose(&options, TemplateRegistry::global()).unwrap();
        let normalized = composition.features();
        prop_assert!(options.features().is_subset(normalized));
        if normalized.contains(&Feature::Tailwind) {
            prop_assert!(normalized.contains(&Feature::Htmx));
            prop_assert!(composition.file("cmd/web/base.templ").is_some());
        }
    }

    /// The manifest is exactly the union of the active providers' packages.
    #[test]
    fn prop_manifest_is_union_without_duplicates(options in valid_options()) {
        let registry = TemplateRegistry::global();
        let composition = compose(&options, registry).unwrap();
        let manifest = build_manifest(&options, registry).unwrap();

        let mut keys = vec![
            TemplateKey::Framework(options.framework()),
            TemplateKey::Database(options.database()),
            TemplateKey::Project,
        ];
        for feature in composition.features() {
            keys.push(TemplateKey::Feature(*feature));
            keys.push(TemplateKey::FeatureFor(*feature, options.framework()));
        }
        if let Some(frontend) = options.frontend() {
            keys.push(TemplateKey::Frontend(frontend));
        }

        let expected: HashSet<&str> = keys
            .iter()
            .filter_map(|key| registry.lookup(key))
            .flat_map(Provider::packages)
            .map(PackageCoordinate::as_str)
            .collect();
        let actual: Vec<&str> = manifest.iter().map(PackageCoordinate::as_str).collect();
        let unique: HashSet<&str> = actual.iter().copied().collect();

        prop_assert_eq!(actual.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }

    /// Every rendered file is free of placeholders and slot markers.
    #[test]
    fn prop_rendered_output_has_no_template_syntax(options in valid_options()) {
        let composition = compose(&options, TemplateRegistry::global()).unwrap();
        for file in composition.files() {
            prop_assert!(!file.content().contains("{@"), "slot left in {}", file.path());
            prop_assert!(!file.content().contains("{ProjectName}"), "placeholder left in {}", file.path());
            prop_assert!(!file.content().contains("{Port}"), "placeholder left in {}", file.path());
        }
    }
}
