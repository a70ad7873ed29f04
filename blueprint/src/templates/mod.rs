//! Bundled templates and the default registry
//!
//! All template text is compiled into the binary. [`bundled`] wires the
//! constants into providers; nothing here touches the filesystem.

pub mod database;
pub mod features;
pub mod framework;
pub mod frontend;
pub mod project;

use crate::options::{BuildTool, Database, Feature, Framework, Frontend};
use crate::registry::{Operation, Provider, TemplateKey, TemplateRegistry, TemplateRegistryBuilder};

/// Per-framework template set
struct FrameworkSet {
    framework: Framework,
    routes: &'static str,
    routes_with_db: &'static str,
    packages: &'static [&'static str],
    websocket_route: &'static str,
    htmx_routes: &'static str,
}

const NET_HTTP_FRAMEWORKS: [FrameworkSet; 5] = [
    FrameworkSet {
        framework: Framework::StandardLibrary,
        routes: framework::ROUTES_STANDARD_LIBRARY,
        routes_with_db: framework::ROUTES_STANDARD_LIBRARY_WITH_DB,
        packages: &[],
        websocket_route: features::WEBSOCKET_ROUTE_STANDARD_LIBRARY,
        htmx_routes: features::HTMX_ROUTES_STANDARD_LIBRARY,
    },
    FrameworkSet {
        framework: Framework::Chi,
        routes: framework::ROUTES_CHI,
        routes_with_db: framework::ROUTES_CHI_WITH_DB,
        packages: &["github.com/go-chi/chi/v5"],
        websocket_route: features::WEBSOCKET_ROUTE_CHI,
        htmx_routes: features::HTMX_ROUTES_CHI,
    },
    FrameworkSet {
        framework: Framework::GorillaMux,
        routes: framework::ROUTES_GORILLA,
        routes_with_db: framework::ROUTES_GORILLA_WITH_DB,
        packages: &["github.com/gorilla/mux"],
        websocket_route: features::WEBSOCKET_ROUTE_GORILLA,
        htmx_routes: features::HTMX_ROUTES_GORILLA,
    },
    FrameworkSet {
        framework: Framework::HttpRouter,
        routes: framework::ROUTES_HTTP_ROUTER,
        routes_with_db: framework::ROUTES_HTTP_ROUTER_WITH_DB,
        packages: &["github.com/julienschmidt/httprouter"],
        websocket_route: features::WEBSOCKET_ROUTE_HTTP_ROUTER,
        htmx_routes: features::HTMX_ROUTES_HTTP_ROUTER,
    },
    FrameworkSet {
        framework: Framework::Gin,
        routes: framework::ROUTES_GIN,
        routes_with_db: framework::ROUTES_GIN_WITH_DB,
        packages: &["github.com/gin-gonic/gin"],
        websocket_route: features::WEBSOCKET_ROUTE_GIN,
        htmx_routes: features::HTMX_ROUTES_GIN,
    },
];

const WEBSOCKET_PACKAGE: &str = "github.com/coder/websocket";
const TEMPL_PACKAGE: &str = "github.com/a-h/templ";

/// Build the registry of every bundled provider
pub(crate) fn bundled() -> TemplateRegistry {
    let mut builder = TemplateRegistry::builder();

    for set in &NET_HTTP_FRAMEWORKS {
        let (htmx_imports, websocket_handler) = match set.framework {
            Framework::Gin => (features::HTMX_IMPORTS_GIN, features::WEBSOCKET_HANDLER_GIN),
            _ => (features::HTMX_IMPORTS, features::WEBSOCKET_HANDLER_HTTP),
        };
        builder = builder
            .register(
                TemplateKey::Framework(set.framework),
                http_framework(set.routes, set.routes_with_db).packages_from(set.packages),
            )
            .register(
                TemplateKey::FeatureFor(Feature::Websocket, set.framework),
                websocket(features::WEBSOCKET_IMPORTS, set.websocket_route, websocket_handler)
                    .packages_from(&[WEBSOCKET_PACKAGE]),
            )
            .register(
                TemplateKey::FeatureFor(Feature::Htmx, set.framework),
                htmx(htmx_imports, set.htmx_routes, features::HELLO_GO),
            );
    }

    builder = register_custom_frameworks(builder);
    builder = register_databases(builder);
    builder = register_generic_features(builder);
    register_project(builder).build()
}

/// Echo and Fiber, whose templates do not share the `net/http` server
fn register_custom_frameworks(builder: TemplateRegistryBuilder) -> TemplateRegistryBuilder {
    builder
        .register(
            TemplateKey::Framework(Framework::Echo),
            http_framework(framework::ROUTES_ECHO, framework::ROUTES_ECHO_WITH_DB).packages_from(&[
                "github.com/labstack/echo/v4",
                "github.com/labstack/echo/v4/middleware",
            ]),
        )
        .register(
            TemplateKey::FeatureFor(Feature::Websocket, Framework::Echo),
            websocket(
                features::WEBSOCKET_IMPORTS,
                features::WEBSOCKET_ROUTE_ECHO,
                features::WEBSOCKET_HANDLER_ECHO,
            )
            .packages_from(&[WEBSOCKET_PACKAGE]),
        )
        .register(
            TemplateKey::FeatureFor(Feature::Htmx, Framework::Echo),
            htmx(features::HTMX_IMPORTS, features::HTMX_ROUTES_ECHO, features::HELLO_GO),
        )
        .register(
            TemplateKey::Framework(Framework::Fiber),
            Provider::new()
                .with(Operation::Main, framework::MAIN_FIBER)
                .with(Operation::Server, framework::SERVER_FIBER)
                .with(Operation::ServerWithDb, framework::SERVER_FIBER_WITH_DB)
                .with(Operation::Routes, framework::ROUTES_FIBER)
                .with(Operation::RoutesWithDb, framework::ROUTES_FIBER_WITH_DB)
                .with(Operation::TestHandler, framework::TEST_HANDLER_FIBER)
                .packages_from(&["github.com/gofiber/fiber/v2"]),
        )
        .register(
            TemplateKey::FeatureFor(Feature::Websocket, Framework::Fiber),
            websocket(
                features::WEBSOCKET_IMPORTS_FIBER,
                features::WEBSOCKET_ROUTE_FIBER,
                features::WEBSOCKET_HANDLER_FIBER,
            )
            .packages_from(&["github.com/gofiber/contrib/websocket"]),
        )
        .register(
            TemplateKey::FeatureFor(Feature::Htmx, Framework::Fiber),
            htmx(
                features::HTMX_IMPORTS_FIBER,
                features::HTMX_ROUTES_FIBER,
                features::HELLO_GO_FIBER,
            )
            .packages_from(&["github.com/gofiber/fiber/v2/middleware/adaptor"]),
        )
}

/// Frontend, build tool and the files every project gets
fn register_project(builder: TemplateRegistryBuilder) -> TemplateRegistryBuilder {
    builder
        .register(
            TemplateKey::Frontend(Frontend::React),
            Provider::new()
                .file("frontend", "package.json", frontend::PACKAGE_JSON)
                .file("frontend", "index.html", frontend::INDEX_HTML)
                .file("frontend/src", "main.tsx", frontend::MAIN_TSX)
                .file("frontend/src", "App.tsx", frontend::APP_TSX)
                .file("frontend", ".env", frontend::ENV),
        )
        .register(
            TemplateKey::BuildTool(BuildTool::Make),
            Provider::new()
                .with(Operation::Build, project::MAKEFILE)
                .with(Operation::BuildWithDocker, project::MAKEFILE_WITH_DOCKER),
        )
        .register(
            TemplateKey::BuildTool(BuildTool::Just),
            Provider::new()
                .with(Operation::Build, project::JUSTFILE)
                .with(Operation::BuildWithDocker, project::JUSTFILE_WITH_DOCKER),
        )
        .register(
            TemplateKey::Project,
            Provider::new()
                .with(Operation::Readme, project::README)
                .with(Operation::Gitignore, project::GITIGNORE)
                .with(Operation::AirToml, project::AIR_TOML)
                .with(Operation::Env, project::ENV)
                .packages_from(&["github.com/joho/godotenv"]),
        )
}

fn http_framework(routes: &'static str, routes_with_db: &'static str) -> Provider {
    Provider::new()
        .with(Operation::Main, framework::MAIN_HTTP)
        .with(Operation::Server, framework::SERVER_HTTP)
        .with(Operation::ServerWithDb, framework::SERVER_HTTP_WITH_DB)
        .with(Operation::Routes, routes)
        .with(Operation::RoutesWithDb, routes_with_db)
        .with(Operation::TestHandler, framework::TEST_HANDLER_HTTP)
}

fn websocket(imports: &'static str, route: &'static str, handler: &'static str) -> Provider {
    Provider::new()
        .with(Operation::Imports, imports)
        .with(Operation::RoutesFragment, route)
        .with(Operation::HandlersFragment, handler)
}

fn htmx(imports: &'static str, routes: &'static str, hello: &'static str) -> Provider {
    Provider::new()
        .with(Operation::Imports, imports)
        .with(Operation::RoutesFragment, routes)
        .file("cmd/web", "hello.go", hello)
}

fn register_databases(
    builder: TemplateRegistryBuilder,
) -> TemplateRegistryBuilder {
    const TESTCONTAINERS: &str = "github.com/testcontainers/testcontainers-go";

    builder
        .register(
            TemplateKey::Database(Database::MySql),
            Provider::new()
                .with(Operation::Service, database::MYSQL_SERVICE)
                .with(Operation::Env, database::MYSQL_ENV)
                .with(Operation::ComposeService, database::MYSQL_COMPOSE)
                .with(Operation::IntegrationTest, database::MYSQL_INTEGRATION_TEST)
                .packages_from(&[
                    "github.com/go-sql-driver/mysql",
                    TESTCONTAINERS,
                    "github.com/testcontainers/testcontainers-go/modules/mysql",
                ]),
        )
        .register(
            TemplateKey::Database(Database::Postgres),
            Provider::new()
                .with(Operation::Service, database::POSTGRES_SERVICE)
                .with(Operation::Env, database::POSTGRES_ENV)
                .with(Operation::ComposeService, database::POSTGRES_COMPOSE)
                .with(Operation::IntegrationTest, database::POSTGRES_INTEGRATION_TEST)
                .packages_from(&[
                    "github.com/lib/pq",
                    TESTCONTAINERS,
                    "github.com/testcontainers/testcontainers-go/modules/postgres",
                ]),
        )
        .register(
            TemplateKey::Database(Database::Sqlite),
            Provider::new()
                .with(Operation::Service, database::SQLITE_SERVICE)
                .with(Operation::Env, database::SQLITE_ENV)
                .packages_from(&["github.com/mattn/go-sqlite3"]),
        )
        .register(
            TemplateKey::Database(Database::Mongo),
            Provider::new()
                .with(Operation::Service, database::MONGO_SERVICE)
                .with(Operation::Env, database::MONGO_ENV)
                .with(Operation::ComposeService, database::MONGO_COMPOSE)
                .with(Operation::IntegrationTest, database::MONGO_INTEGRATION_TEST)
                .packages_from(&[
                    "go.mongodb.org/mongo-driver",
                    TESTCONTAINERS,
                    "github.com/testcontainers/testcontainers-go/modules/mongodb",
                ]),
        )
        .register(
            TemplateKey::Database(Database::Redis),
            Provider::new()
                .with(Operation::Service, database::REDIS_SERVICE)
                .with(Operation::Env, database::REDIS_ENV)
                .with(Operation::ComposeService, database::REDIS_COMPOSE)
                .with(Operation::IntegrationTest, database::REDIS_INTEGRATION_TEST)
                .packages_from(&[
                    "github.com/redis/go-redis/v9",
                    TESTCONTAINERS,
                    "github.com/testcontainers/testcontainers-go/modules/redis",
                ]),
        )
        .register(
            TemplateKey::Database(Database::Scylla),
            Provider::new()
                .with(Operation::Service, database::SCYLLA_SERVICE)
                .with(Operation::Env, database::SCYLLA_ENV)
                .with(Operation::ComposeService, database::SCYLLA_COMPOSE)
                .packages_from(&["github.com/gocql/gocql"]),
        )
        .register(
            TemplateKey::Database(Database::SqlServer),
            Provider::new()
                .with(Operation::Service, database::SQLSERVER_SERVICE)
                .with(Operation::Env, database::SQLSERVER_ENV)
                .with(Operation::ComposeService, database::SQLSERVER_COMPOSE)
                .packages_from(&["github.com/microsoft/go-mssqldb"]),
        )
}

fn register_generic_features(
    builder: TemplateRegistryBuilder,
) -> TemplateRegistryBuilder {
    builder
        .register(
            TemplateKey::Feature(Feature::Htmx),
            Provider::new()
                .file("cmd/web", "base.templ", features::BASE_TEMPL)
                .file("cmd/web", "hello.templ", features::HELLO_TEMPL)
                .file("cmd/web", "efs.go", features::EFS_GO)
                .file("cmd/web/assets/js", "app.js", features::APP_JS)
                .packages_from(&[TEMPL_PACKAGE]),
        )
        .register(
            TemplateKey::Feature(Feature::Tailwind),
            Provider::new()
                .with(Operation::HeadFragment, features::TAILWIND_HEAD)
                .file("", "tailwind.config.js", features::TAILWIND_CONFIG)
                .file("cmd/web/styles", "input.css", features::TAILWIND_INPUT_CSS),
        )
        .register(
            TemplateKey::Feature(Feature::Docker),
            Provider::new()
                .file("", "Dockerfile", features::DOCKERFILE)
                .file("", "docker-compose.yml", features::DOCKER_COMPOSE),
        )
        .register(
            TemplateKey::Feature(Feature::GithubAction),
            Provider::new()
                .file(".github/workflows", "release.yml", features::RELEASE_WORKFLOW)
                .file(".github/workflows", "go-test.yml", features::TEST_WORKFLOW)
                .file("", ".goreleaser.yml", features::GORELEASER),
        )
        .register(
            TemplateKey::Feature(Feature::Worker),
            Provider::new()
                .with(Operation::Env, features::WORKER_ENV)
                .file("cmd/worker", "main.go", features::WORKER_MAIN)
                .file("cmd/worker/tasks", "hello_world_task.go", features::WORKER_HELLO_TASK)
                .packages_from(&["github.com/hibiken/asynq"]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Category;

    #[test]
    fn test_every_framework_is_registered_with_required_operations() {
        let registry = bundled();
        for framework in Framework::ALL {
            let provider = registry
                .lookup(&TemplateKey::Framework(*framework))
                .unwrap_or_else(|| panic!("{framework} missing"));
            for op in [
                Operation::Main,
                Operation::Server,
                Operation::Routes,
                Operation::TestHandler,
            ] {
                assert!(provider.template(op).is_some(), "{framework} lacks {op}");
            }
        }
    }

    #[test]
    fn test_every_framework_has_websocket_and_htmx_providers() {
        let registry = bundled();
        for framework in Framework::ALL {
            for feature in [Feature::Websocket, Feature::Htmx] {
                let key = TemplateKey::FeatureFor(feature, *framework);
                let provider = registry.lookup(&key).unwrap();
                assert!(provider.template(Operation::Imports).is_some(), "{key}");
                assert!(provider.template(Operation::RoutesFragment).is_some(), "{key}");
            }
        }
    }

    #[test]
    fn test_sqlite_has_no_compose_service() {
        let registry = bundled();
        let sqlite = registry
            .lookup(&TemplateKey::Database(Database::Sqlite))
            .unwrap();
        assert!(sqlite.template(Operation::ComposeService).is_none());
        let postgres = registry
            .lookup(&TemplateKey::Database(Database::Postgres))
            .unwrap();
        assert!(postgres.template(Operation::ComposeService).is_some());
    }

    #[test]
    fn test_none_database_is_not_registered() {
        let registry = bundled();
        assert!(registry
            .lookup(&TemplateKey::Database(Database::None))
            .is_none());
        assert_eq!(
            registry.keys(Category::Database),
            vec!["mysql", "postgres", "sqlite", "mongo", "redis", "scylla", "sqlserver"]
        );
    }

    #[test]
    fn test_bundled_text_is_complete() {
        let registry = bundled();
        let keys = Framework::ALL
            .iter()
            .flat_map(|framework| {
                [
                    TemplateKey::Framework(*framework),
                    TemplateKey::FeatureFor(Feature::Websocket, *framework),
                    TemplateKey::FeatureFor(Feature::Htmx, *framework),
                ]
            })
            .chain(Database::ALL.iter().skip(1).map(|d| TemplateKey::Database(*d)))
            .chain(Feature::ALL.iter().skip(2).map(|f| TemplateKey::Feature(*f)))
            .chain([
                TemplateKey::Feature(Feature::Htmx),
                TemplateKey::Frontend(Frontend::React),
                TemplateKey::BuildTool(BuildTool::Make),
                TemplateKey::BuildTool(BuildTool::Just),
                TemplateKey::Project,
            ]);

        for key in keys {
            let provider = registry.lookup(&key).unwrap_or_else(|| panic!("{key} missing"));
            for operation in provider.operations() {
                let text = provider.template(operation).unwrap();
                assert!(!text.trim().is_empty(), "{key} {operation} is empty");
            }
            for file in provider.files() {
                assert!(file.text.ends_with('\n'), "{key} {} is truncated", file.name);
            }
        }
    }

    #[test]
    fn test_hello_templ_keeps_fragment_targets() {
        let registry = bundled();
        let htmx = registry.lookup(&TemplateKey::Feature(Feature::Htmx)).unwrap();
        let hello = htmx
            .files()
            .iter()
            .find(|file| file.name == "hello.templ")
            .unwrap();

        assert_eq!(hello.text, features::HELLO_TEMPL);
        assert!(hello.text.contains(r##"hx-target="#hello-container""##));
        assert!(hello.text.contains(r#"<div id="hello-container"></div>"#));
        assert!(hello.text.ends_with("\t\t<p>Hello, { name }</p>\n\t</div>\n}\n"));
    }

    #[test]
    fn test_routes_templates_carry_every_route_slot() {
        for routes in [
            framework::ROUTES_CHI,
            framework::ROUTES_FIBER_WITH_DB,
            framework::ROUTES_STANDARD_LIBRARY,
        ] {
            assert!(routes.contains("{@imports}"));
            assert!(routes.contains("{@routes}"));
            assert!(routes.contains("{@handlers}"));
        }
    }
}
