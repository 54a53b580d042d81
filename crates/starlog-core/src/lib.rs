//! Starlog Core - Foundational types and configuration
//!
//! This crate provides the commit record model, error handling, the preset
//! configuration (defaults, overrides, validation, loading) and template
//! expansion shared by the changelog engine.

pub mod config;
pub mod error;
pub mod template;
pub mod types;

pub use config::{Config, GitRawOptions, Overrides, ParserOptions, TypeEntry};
pub use error::{ConfigError, Result, StarlogError};
pub use template::expand_template;
pub use types::{
    CommitRecord, Note, Reference, ReleaseContext, RevertInfo, TransformContext,
};
