//! End-to-end `create` runs against a temporary directory

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use blueprint::options::{BuildTool, Database, Feature, Framework, GitPolicy};
use blueprint::compose::FileOperation;
use blueprint::prelude::{compose, TemplateRegistry};
use blueprint_cli_lib::commands::{CreateArgs, CreateCommand};
use blueprint_cli_lib::{BlueprintConfig, CommandRunner};
use walkdir::WalkDir;

/// Records commands without running them
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl CommandRunner for &Recorder {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<String> {
        self.calls
            .borrow_mut()
            .push(format!("{program} {}", args.join(" ")));
        Ok(String::new())
    }
}

fn files_under(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_written_tree_matches_composition() {
    let temp = tempfile::tempdir().unwrap();
    let args = CreateArgs {
        name: Some("github.com/acme/storefront".to_string()),
        framework: Some(Framework::Fiber),
        driver: Some(Database::Mongo),
        features: vec![Feature::Websocket, Feature::Tailwind, Feature::Docker],
        git: Some(GitPolicy::Skip),
        output: Some(temp.path().to_path_buf()),
        skip_toolchain: true,
        ..CreateArgs::default()
    };

    let command = CreateCommand::new(&args, &BlueprintConfig::default(), false).unwrap();
    let expected = compose(command.options(), TemplateRegistry::global()).unwrap();
    command.execute().unwrap();

    let root = temp.path().join("storefront");
    let written = files_under(&root);
    let planned: BTreeSet<String> = expected.files().iter().map(FileOperation::path).collect();
    assert_eq!(written, planned);

    for file in expected.files() {
        let on_disk = fs::read_to_string(root.join(file.path())).unwrap();
        assert_eq!(on_disk, file.content(), "{} differs", file.path());
    }

    let compose_file = fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose_file.contains("mongo"));
}

#[test]
fn test_config_defaults_drive_collaborators() {
    let temp = tempfile::tempdir().unwrap();
    let config = BlueprintConfig {
        framework: Framework::HttpRouter,
        driver: Database::Sqlite,
        git: GitPolicy::Stage,
        builder: BuildTool::Just,
        output: temp.path().to_path_buf(),
        ..BlueprintConfig::default()
    };
    let args = CreateArgs {
        name: Some("notes".to_string()),
        ..CreateArgs::default()
    };

    let recorder = Recorder::default();
    CreateCommand::new(&args, &config, false)
        .unwrap()
        .with_runner(&recorder)
        .execute()
        .unwrap();

    let root = temp.path().join("notes");
    assert!(root.join("justfile").is_file());
    assert!(!root.join("Makefile").exists());
    let env = fs::read_to_string(root.join(".env")).unwrap();
    assert!(env.contains("BLUEPRINT_DB_URL=./notes.db"));

    let calls = recorder.calls.borrow().clone();
    assert!(calls.contains(&"go mod init notes".to_string()));
    assert!(calls.contains(&"go get -u github.com/julienschmidt/httprouter".to_string()));
    assert!(calls.contains(&"go get -u github.com/mattn/go-sqlite3".to_string()));
    assert!(calls.contains(&"gofmt -s -w .".to_string()));
    assert_eq!(calls.last().unwrap(), "git add .");
}

#[test]
fn test_conflicting_frontend_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let args = CreateArgs {
        name: Some("app".to_string()),
        features: vec![Feature::Htmx],
        frontend: Some(blueprint::options::Frontend::React),
        git: Some(GitPolicy::Skip),
        output: Some(temp.path().to_path_buf()),
        skip_toolchain: true,
        ..CreateArgs::default()
    };

    let err = CreateCommand::new(&args, &BlueprintConfig::default(), false)
        .unwrap()
        .execute()
        .unwrap_err();

    assert!(err.to_string().contains("conflicts with"));
    assert!(!temp.path().join("app").exists());
}
