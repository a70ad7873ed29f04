//! blueprint CLI library
//!
//! The `blueprint` binary is a thin layer over these modules: flags and
//! prompts in [`commands`], layered defaults in [`config`], and the
//! collaborators that turn a composition into a working Go module
//! ([`writer`], [`toolchain`], [`git`]).

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod git;
pub mod observability;
pub mod runner;
pub mod toolchain;
pub mod writer;

pub use config::BlueprintConfig;
pub use runner::{CommandRunner, SystemRunner};
