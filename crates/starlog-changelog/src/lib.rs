//! Starlog Changelog - Commit classification and bump recommendation
//!
//! This crate provides the commit transformer, the semantic-version bump
//! recommender, release detection and section ordering for the Starlog
//! changelog preset.

pub mod bump;
pub mod ordering;
pub mod release;
pub mod transform;

pub use bump::{what_bump, BumpLevel, Recommendation};
pub use ordering::{compare_commits, compare_note_groups, SectionOrdering};
pub use release::generate_on;
pub use transform::{add_bang_notes, transform};
