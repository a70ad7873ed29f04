//! End-to-end composition scenarios against the bundled registry

use blueprint::compose::{compose, Contributor};
use blueprint::manifest::build_manifest;
use blueprint::options::{Database, Feature, Framework, Frontend, ProjectOptions};
use blueprint::registry::{Operation, TemplateKey, TemplateRegistry, TemplateRegistryBuilder};
use blueprint::Error;

const REQUIRED_FILES: [&str; 9] = [
    "cmd/api/main.go",
    "internal/server/server.go",
    "internal/server/routes.go",
    "tests/handler_test.go",
    "Makefile",
    "README.md",
    ".gitignore",
    ".air.toml",
    ".env",
];

/// Every framework yields the base set when no database is chosen
#[test]
fn test_required_files_for_every_framework() {
    for framework in Framework::ALL {
        let options = ProjectOptions::builder("app")
            .framework(*framework)
            .build()
            .unwrap();
        let composition = compose(&options, TemplateRegistry::global()).unwrap();

        for path in REQUIRED_FILES {
            let file = composition
                .file(path)
                .unwrap_or_else(|| panic!("{framework}: missing {path}"));
            assert_eq!(file.contributor(), Contributor::Base);
            assert!(!file.content().is_empty(), "{framework}: {path} is empty");
        }
        assert!(
            composition.file("internal/database/database.go").is_none(),
            "{framework}: no database was chosen"
        );
    }
}

/// Every (framework, driver) pair adds the service and the driver's env keys
#[test]
fn test_database_addition_for_every_pair() {
    let registry = TemplateRegistry::global();
    for framework in Framework::ALL {
        for database in Database::ALL.iter().filter(|d| !d.is_none()) {
            let options = ProjectOptions::builder("app")
                .framework(*framework)
                .database(*database)
                .build()
                .unwrap();
            let composition = compose(&options, registry).unwrap();

            let service = composition
                .file("internal/database/database.go")
                .unwrap_or_else(|| panic!("{framework}/{database}: missing service"));
            assert_eq!(service.contributor(), Contributor::Database(*database));

            let routes = composition
                .file("internal/server/routes.go")
                .unwrap()
                .content();
            assert!(routes.contains("/health"), "{framework}/{database}: no health route");

            let env = composition.file(".env").unwrap().content();
            let provider = registry.lookup(&TemplateKey::Database(*database)).unwrap();
            for key in provider.declared_env_keys() {
                assert!(
                    env.lines().any(|line| line.starts_with(&format!("{key}="))),
                    "{framework}/{database}: .env lacks {key}"
                );
            }
        }
    }
}

#[test]
fn test_chi_postgres_docker() {
    let options = ProjectOptions::builder("app")
        .module_path("example.com/app")
        .framework(Framework::Chi)
        .database(Database::Postgres)
        .feature(Feature::Docker)
        .build()
        .unwrap();
    let registry = TemplateRegistry::global();
    let composition = compose(&options, registry).unwrap();

    for path in [
        "cmd/api/main.go",
        "internal/server/server.go",
        "internal/server/routes.go",
        "internal/database/database.go",
        "internal/database/database_test.go",
        "Dockerfile",
        "docker-compose.yml",
    ] {
        assert!(composition.file(path).is_some(), "missing {path}");
    }

    let routes = composition.file("internal/server/routes.go").unwrap().content();
    assert!(routes.contains("r.Get(\"/health\", s.healthHandler)"));
    let server = composition.file("internal/server/server.go").unwrap().content();
    assert!(server.contains("\"example.com/app/internal/database\""));

    let compose_file = composition.file("docker-compose.yml").unwrap().content();
    assert!(compose_file.contains("psql_bp:"));
    assert!(compose_file.contains("image: postgres:latest"));

    let env = composition.file(".env").unwrap().content();
    assert!(env.starts_with("PORT=8080\n"));
    assert!(env.contains("BLUEPRINT_DB_HOST=localhost\n"));
    assert!(env.contains("BLUEPRINT_DB_PORT=5432\n"));
    assert!(env.contains("BLUEPRINT_DB_DATABASE=app\n"));

    assert!(composition
        .file("Makefile")
        .unwrap()
        .content()
        .contains("docker-run:"));

    let manifest = build_manifest(&options, registry).unwrap();
    assert!(manifest.contains("github.com/go-chi/chi/v5"));
    assert!(manifest.contains("github.com/lib/pq"));
}

#[test]
fn test_standard_library_tailwind() {
    let options = ProjectOptions::builder("app")
        .framework(Framework::StandardLibrary)
        .feature(Feature::Tailwind)
        .build()
        .unwrap();
    let composition = compose(&options, TemplateRegistry::global()).unwrap();

    assert!(composition.features().contains(&Feature::Htmx));
    assert!(composition.features().contains(&Feature::Tailwind));

    let routes = composition.file("internal/server/routes.go").unwrap().content();
    assert!(routes.contains("\tmux.Handle(\"/web\", templ.Handler(web.HelloForm()))\n"));
    assert!(routes.contains("\t\"app/cmd/web\"\n"));

    for path in [
        "cmd/web/base.templ",
        "cmd/web/hello.templ",
        "cmd/web/efs.go",
        "cmd/web/hello.go",
        "tailwind.config.js",
        "cmd/web/styles/input.css",
    ] {
        assert!(composition.file(path).is_some(), "missing {path}");
    }
}

#[test]
fn test_unknown_framework_key_yields_no_output() {
    let registry = TemplateRegistryBuilder::from(TemplateRegistry::global().clone())
        .without(&TemplateKey::Framework(Framework::Echo))
        .build();
    let options = ProjectOptions::builder("app")
        .framework(Framework::Echo)
        .build()
        .unwrap();

    match compose(&options, &registry) {
        Err(Error::UnsupportedFramework { key, valid }) => {
            assert_eq!(key, "echo");
            assert_eq!(valid.len(), Framework::ALL.len() - 1);
            assert!(valid.contains(&"chi".to_string()));
        }
        other => panic!("expected an unsupported framework, got {other:?}"),
    }
    assert!(matches!(
        build_manifest(&options, &registry),
        Err(Error::UnsupportedFramework { .. })
    ));
}

#[test]
fn test_unparseable_framework_key() {
    assert!(matches!(
        "rails".parse::<Framework>(),
        Err(Error::UnsupportedFramework { .. })
    ));
}

#[test]
fn test_react_with_htmx_conflicts() {
    let options = ProjectOptions::builder("app")
        .framework(Framework::Chi)
        .frontend(Some(Frontend::React))
        .feature(Feature::Htmx)
        .feature(Feature::Tailwind)
        .build()
        .unwrap();
    match compose(&options, TemplateRegistry::global()) {
        Err(Error::ConflictingFrontend { frontend, features }) => {
            assert_eq!(frontend, Frontend::React);
            assert_eq!(features, vec![Feature::Htmx, Feature::Tailwind]);
        }
        other => panic!("expected a frontend conflict, got {other:?}"),
    }
}

#[test]
fn test_websocket_without_framework_provider() {
    let registry = TemplateRegistryBuilder::from(TemplateRegistry::global().clone())
        .without(&TemplateKey::FeatureFor(Feature::Websocket, Framework::Gin))
        .build();
    let options = ProjectOptions::builder("app")
        .framework(Framework::Gin)
        .feature(Feature::Websocket)
        .build()
        .unwrap();
    match compose(&options, &registry) {
        Err(Error::UnsupportedCombination { feature, framework }) => {
            assert_eq!(feature, Feature::Websocket);
            assert_eq!(framework, Framework::Gin);
        }
        other => panic!("expected an unsupported combination, got {other:?}"),
    }
}

#[test]
fn test_database_without_service_is_incomplete() {
    let registry = TemplateRegistryBuilder::from(TemplateRegistry::global().clone())
        .register(
            TemplateKey::Database(Database::Mongo),
            blueprint::registry::Provider::new().with(Operation::Env, "X=1\n"),
        )
        .build();
    let options = ProjectOptions::builder("app")
        .database(Database::Mongo)
        .build()
        .unwrap();
    match compose(&options, &registry) {
        Err(Error::IncompleteTemplate { key, operation }) => {
            assert_eq!(key, "database:mongo");
            assert_eq!(operation, Operation::Service);
        }
        other => panic!("expected an incomplete template, got {other:?}"),
    }
}

#[test]
fn test_github_action_and_worker_files() {
    let options = ProjectOptions::builder("app")
        .framework(Framework::Echo)
        .feature(Feature::GithubAction)
        .feature(Feature::Worker)
        .build()
        .unwrap();
    let composition = compose(&options, TemplateRegistry::global()).unwrap();
    for path in [
        ".github/workflows/release.yml",
        ".github/workflows/go-test.yml",
        ".goreleaser.yml",
        "cmd/worker/main.go",
        "cmd/worker/tasks/hello_world_task.go",
    ] {
        assert!(composition.file(path).is_some(), "missing {path}");
    }
    let release = composition
        .file(".github/workflows/release.yml")
        .unwrap()
        .content();
    assert!(release.contains("${{ secrets.GITHUB_TOKEN }}"));
    let worker = composition.file("cmd/worker/main.go").unwrap().content();
    assert!(worker.contains("\"app/cmd/worker/tasks\""));
}

#[test]
fn test_composition_serializes_to_json() {
    let options = ProjectOptions::builder("app")
        .database(Database::Redis)
        .build()
        .unwrap();
    let composition = compose(&options, TemplateRegistry::global()).unwrap();
    let json = serde_json::to_value(&composition).unwrap();
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), composition.files().len());
    let database = files
        .iter()
        .find(|f| f["file_name"] == "database.go")
        .unwrap();
    assert_eq!(database["contributor"]["kind"], "database");
    assert_eq!(database["contributor"]["key"], "redis");
}
