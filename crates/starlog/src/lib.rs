//! Starlog - Conventional-commit changelog preset
//!
//! Starlog classifies conventional commits into changelog sections,
//! recommends semantic-version bumps, and decides when a changelog block
//! should be generated. The preset is configured through typed overrides
//! merged over built-in defaults, and extended through ordered hook
//! pipelines at three points: commit transformation, release detection,
//! and bump recommendation.
//!
//! # Example
//!
//! ```
//! use starlog::{derive_preset, Overrides};
//! use starlog::{CommitRecord, TransformContext};
//!
//! let preset = derive_preset(Overrides::default()).unwrap();
//! let context = TransformContext::new("https://github.com", "acme", "rocket");
//!
//! let commit = CommitRecord::new("feat(engine): add thrust control")
//!     .with_type("feat")
//!     .with_scope("engine")
//!     .with_subject("add thrust control");
//!
//! let commit = preset.transform(commit, &context).unwrap();
//! assert_eq!(commit.section.as_deref(), Some("Features"));
//! ```

pub mod hooks;
pub mod preset;

pub use hooks::{GenerateOnStage, HookPipelines, TransformStage, WhatBumpStage};
pub use preset::{derive_preset, derive_preset_with, Preset};

// Re-export the data model and engine surface so callers depend on one crate
pub use starlog_changelog::{
    add_bang_notes, compare_commits, compare_note_groups, generate_on, transform, what_bump,
    BumpLevel, Recommendation, SectionOrdering,
};
pub use starlog_core::config::{
    find_overrides, load_overrides, load_overrides_from_dir, load_overrides_or_default,
};
pub use starlog_core::{
    CommitRecord, Config, ConfigError, GitRawOptions, Note, Overrides, ParserOptions, Reference,
    ReleaseContext, Result, RevertInfo, StarlogError, TransformContext, TypeEntry,
};
