//! Hook pipelines for the three extension points
//!
//! Each extension point is an ordered list of stages. The built-in
//! implementation always runs first; every registered stage receives the
//! original arguments plus the previous stage's result, so customization is
//! additive and the last-registered stage has the final word.

use starlog_changelog::Recommendation;
use starlog_core::types::{CommitRecord, ReleaseContext, TransformContext};

/// A transform stage: receives the untransformed commit, the repository
/// context, and the previous stage's result
pub type TransformStage = Box<
    dyn Fn(&CommitRecord, &TransformContext, Option<CommitRecord>) -> Option<CommitRecord>
        + Send
        + Sync,
>;

/// A generate-on stage: receives the release context and the previous
/// stage's decision
pub type GenerateOnStage = Box<dyn Fn(&ReleaseContext, bool) -> bool + Send + Sync>;

/// A what-bump stage: receives the raw commit set and the previous stage's
/// recommendation
pub type WhatBumpStage =
    Box<dyn Fn(&[CommitRecord], Recommendation) -> Recommendation + Send + Sync>;

/// Registered hook stages, one ordered list per extension point
#[derive(Default)]
pub struct HookPipelines {
    pub(crate) transform: Vec<TransformStage>,
    pub(crate) generate_on: Vec<GenerateOnStage>,
    pub(crate) what_bump: Vec<WhatBumpStage>,
}

impl HookPipelines {
    /// Append a transform stage
    pub fn push_transform(&mut self, stage: TransformStage) {
        self.transform.push(stage);
    }

    /// Append a generate-on stage
    pub fn push_generate_on(&mut self, stage: GenerateOnStage) {
        self.generate_on.push(stage);
    }

    /// Append a what-bump stage
    pub fn push_what_bump(&mut self, stage: WhatBumpStage) {
        self.what_bump.push(stage);
    }
}

impl std::fmt::Debug for HookPipelines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookPipelines")
            .field("transform", &self.transform.len())
            .field("generate_on", &self.generate_on.len())
            .field("what_bump", &self.what_bump.len())
            .finish()
    }
}
