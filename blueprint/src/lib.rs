//! blueprint: template selection and composition for Go project scaffolding
//!
//! Given a validated set of choices (HTTP framework, database driver,
//! advanced features), the engine picks bundled templates from a registry,
//! splices framework-specific fragments into them, substitutes the project's
//! values and returns the files of a ready-to-build Go project together with
//! the Go modules it depends on.
//!
//! The crate performs no I/O beyond [`ProjectOptions::ensure_target_available`].
//! Writing files, running `go` and `git` are left to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use blueprint::prelude::*;
//!
//! # fn main() -> blueprint::Result<()> {
//! let options = ProjectOptions::builder("example.com/app")
//!     .framework(Framework::Chi)
//!     .database(Database::Postgres)
//!     .feature(Feature::Docker)
//!     .build()?;
//!
//! let registry = TemplateRegistry::global();
//! let composition = compose(&options, registry)?;
//! let manifest = build_manifest(&options, registry)?;
//!
//! for file in composition.files() {
//!     println!("{} ({} bytes)", file.path(), file.as_bytes().len());
//! }
//! assert!(manifest.contains("github.com/go-chi/chi/v5"));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`options`]: the option model and its validation
//! - [`registry`]: providers of template text keyed by choice
//! - [`templates`]: the bundled template text
//! - [`render`]: placeholder substitution and fragment splicing
//! - [`compose`]: the composition engine
//! - [`manifest`]: the Go package manifest

pub mod compose;
pub mod error;
pub mod manifest;
pub mod options;
pub mod registry;
pub mod render;
pub mod templates;

pub use error::{Error, Result};

pub mod prelude {
    //! Convenience re-exports for common types and functions

    pub use crate::compose::{compose, Composition, Contributor, FileOperation};
    pub use crate::error::{Error, Result};
    pub use crate::manifest::{build_manifest, PackageManifest};
    pub use crate::options::{
        BuildTool, Database, Feature, Framework, Frontend, GitPolicy, ProjectOptions,
    };
    pub use crate::registry::{TemplateKey, TemplateRegistry};
}
