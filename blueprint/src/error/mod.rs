//! Error types for option validation and project composition

use std::path::PathBuf;

use thiserror::Error;

use crate::options::{Feature, Framework, Frontend};
use crate::registry::Operation;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Composition error type
///
/// Every variant is fatal: the engine never returns a partial set of file
/// operations alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested framework key is not registered
    #[error("unsupported framework `{key}`; valid frameworks: {}", .valid.join(", "))]
    UnsupportedFramework {
        /// The rejected key
        key: String,
        /// Every key the registry knows
        valid: Vec<String>,
    },

    /// Requested database driver key is not registered
    #[error("unsupported database driver `{key}`; valid drivers: {}", .valid.join(", "))]
    UnsupportedDatabase {
        /// The rejected key
        key: String,
        /// Every key the registry knows
        valid: Vec<String>,
    },

    /// A registered provider lacks an operation the engine requires
    #[error("template provider `{key}` is missing required operation `{operation}`")]
    IncompleteTemplate {
        /// Registry key of the provider
        key: String,
        /// The missing operation
        operation: Operation,
    },

    /// Feature has no provider for the chosen framework
    #[error("feature `{feature}` is not available for framework `{framework}`")]
    UnsupportedCombination {
        /// Requested feature
        feature: Feature,
        /// Chosen framework
        framework: Framework,
    },

    /// Mutually exclusive frontend selections
    #[error("frontend `{frontend}` conflicts with {}", describe_features(.features))]
    ConflictingFrontend {
        /// The separately chosen frontend
        frontend: Frontend,
        /// Selections that require the HTMX frontend
        features: Vec<Feature>,
    },

    /// Two file operations resolved to the same output path
    #[error("`{path}` is produced by both {first} and {second}")]
    PathCollision {
        /// Conflicting relative path
        path: String,
        /// Contributor of the first operation
        first: String,
        /// Contributor of the second operation
        second: String,
    },

    /// Unresolvable placeholder or malformed slot
    #[error("cannot render `{template}`: {reason} `{placeholder}`")]
    TemplateSubstitution {
        /// Identifier of the template being rendered
        template: String,
        /// The offending placeholder or slot text
        placeholder: String,
        /// Short description of the failure
        reason: &'static str,
    },

    /// Project name failed the sanitizer
    #[error("invalid project name `{name}`: {reason}")]
    InvalidProjectName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Module path failed the module grammar
    #[error("invalid module path `{0}`: expected `/`-separated segments of [A-Za-z0-9_.-]")]
    InvalidModulePath(String),

    /// Unknown key for a feature, frontend, git policy or build tool
    #[error("unknown {kind} `{key}`; allowed values: {}", .valid.join(", "))]
    UnknownKey {
        /// Which option axis was parsed
        kind: &'static str,
        /// The rejected key
        key: String,
        /// Allowed keys for that axis
        valid: Vec<String>,
    },

    /// Target project directory already exists
    #[error("directory `{}` already exists", .path.display())]
    TargetExists {
        /// The occupied path
        path: PathBuf,
    },

    /// Target directory could not be inspected
    #[error("could not inspect `{}`: {source}", .path.display())]
    TargetCheck {
        /// The inspected path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

fn describe_features(features: &[Feature]) -> String {
    let keys: Vec<&str> = features.iter().map(|f| f.key()).collect();
    format!("feature(s) {}", keys.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_framework_lists_valid_keys() {
        let err = Error::UnsupportedFramework {
            key: "rocket".to_string(),
            valid: vec!["chi".to_string(), "gin".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unsupported framework `rocket`; valid frameworks: chi, gin"
        );
    }

    #[test]
    fn test_conflicting_frontend_message() {
        let err = Error::ConflictingFrontend {
            frontend: Frontend::React,
            features: vec![Feature::Htmx, Feature::Tailwind],
        };
        assert_eq!(
            err.to_string(),
            "frontend `react` conflicts with feature(s) htmx, tailwind"
        );
    }

    #[test]
    fn test_unsupported_combination_names_both_sides() {
        let err = Error::UnsupportedCombination {
            feature: Feature::Websocket,
            framework: Framework::Fiber,
        };
        let message = err.to_string();
        assert!(message.contains("websocket"));
        assert!(message.contains("fiber"));
    }
}
