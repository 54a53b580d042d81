//! Preset assembly
//!
//! Composes the default configuration, caller overrides, and the hook
//! pipelines into one preset object consumed by the changelog pipeline.

use tracing::{debug, info, instrument};

use starlog_changelog::{bump, release, transform, Recommendation, SectionOrdering};
use starlog_core::config::{Config, Overrides, ParserOptions};
use starlog_core::error::Result;
use starlog_core::types::{CommitRecord, ReleaseContext, TransformContext};

use crate::hooks::HookPipelines;

/// A finalized changelog preset.
///
/// Constructed once per pipeline run, strictly before any commit is
/// processed; each instance owns an independent configuration and its own
/// hook stages.
#[derive(Debug)]
pub struct Preset {
    /// The merged, finalized configuration
    pub config: Config,
    ordering: SectionOrdering,
    hooks: HookPipelines,
}

/// Build a preset from the default configuration merged with typed
/// overrides.
///
/// `types` overrides concatenate after the defaults; every other field
/// replaces its default when present. Finalization derives the header and
/// commit template partials from the URL formats and validates that every
/// token in the section ordering has a type table entry.
#[instrument(skip_all)]
pub fn derive_preset(overrides: Overrides) -> Result<Preset> {
    let mut config = Config::default();
    overrides.apply(&mut config);
    finish(config)
}

/// Build a preset by mutating the default configuration directly
pub fn derive_preset_with(customize: impl FnOnce(&mut Config)) -> Result<Preset> {
    let mut config = Config::default();
    customize(&mut config);
    finish(config)
}

fn finish(mut config: Config) -> Result<Preset> {
    config.finalize()?;
    let ordering = SectionOrdering::from_config(&config)?;
    info!(types = config.types.len(), "preset derived");
    Ok(Preset {
        config,
        ordering,
        hooks: HookPipelines::default(),
    })
}

impl Preset {
    /// Append a transform stage running after the built-in transformer
    pub fn with_transform_stage(
        mut self,
        stage: impl Fn(&CommitRecord, &TransformContext, Option<CommitRecord>) -> Option<CommitRecord>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        debug!("registering transform stage");
        self.hooks.push_transform(Box::new(stage));
        self
    }

    /// Append a generate-on stage running after the built-in predicate
    pub fn with_generate_on_stage(
        mut self,
        stage: impl Fn(&ReleaseContext, bool) -> bool + Send + Sync + 'static,
    ) -> Self {
        debug!("registering generate-on stage");
        self.hooks.push_generate_on(Box::new(stage));
        self
    }

    /// Append a what-bump stage running after the built-in recommender
    pub fn with_what_bump_stage(
        mut self,
        stage: impl Fn(&[CommitRecord], Recommendation) -> Recommendation + Send + Sync + 'static,
    ) -> Self {
        debug!("registering what-bump stage");
        self.hooks.push_what_bump(Box::new(stage));
        self
    }

    /// Classify and rewrite one commit, or discard it.
    ///
    /// Runs the built-in transformer first, then folds registered stages in
    /// order over the prior result.
    #[instrument(skip_all, fields(header = %commit.header))]
    pub fn transform(
        &self,
        commit: CommitRecord,
        context: &TransformContext,
    ) -> Option<CommitRecord> {
        let original = commit.clone();
        let mut result = transform::transform(commit, context, &self.config);
        for stage in &self.hooks.transform {
            result = stage(&original, context, result);
        }
        result
    }

    /// Decide whether a changelog block should be generated for a version
    pub fn generate_on(&self, context: &ReleaseContext) -> bool {
        let mut decision = release::generate_on(context);
        for stage in &self.hooks.generate_on {
            decision = stage(context, decision);
        }
        decision
    }

    /// Recommend a bump level for the commits since the last release
    #[instrument(skip_all, fields(commit_count = commits.len()))]
    pub fn what_bump(&self, commits: &[CommitRecord]) -> Recommendation {
        let mut recommendation = bump::what_bump(commits, &self.config);
        for stage in &self.hooks.what_bump {
            recommendation = stage(commits, recommendation);
        }
        recommendation
    }

    /// Section precedence derived from the configured type order
    pub fn section_ordering(&self) -> &SectionOrdering {
        &self.ordering
    }

    /// The parser contract for the upstream commit-history parser
    pub fn parser_options(&self) -> ParserOptions {
        self.config.parser_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlog_changelog::BumpLevel;
    use starlog_core::config::TypeEntry;
    use starlog_core::types::Note;

    fn ctx() -> TransformContext {
        TransformContext::new("https://github.com", "fake-user", "fake-repo")
    }

    #[test]
    fn test_derive_preset_defaults() {
        let preset = derive_preset(Overrides::default()).unwrap();
        assert!(preset.config.header_partial.is_some());
        assert!(preset.config.commit_partial.is_some());
    }

    #[test]
    fn test_derive_preset_with_callback() {
        let preset = derive_preset_with(|config| {
            config.pre_major = true;
        })
        .unwrap();
        assert!(preset.config.pre_major);
    }

    #[test]
    fn test_additional_types_are_matched() {
        let default_len = Config::default().types.len();
        let preset = derive_preset(Overrides {
            types: vec![TypeEntry::new("mytype", "Custom")],
            ..Overrides::default()
        })
        .unwrap();

        assert_eq!(preset.config.types.len(), default_len + 1);
        assert_eq!(preset.config.types[0].commit_type, "feat");

        let commit = CommitRecord::new("mytype: new type from @fake")
            .with_type("mytype")
            .with_subject("new type from @fake");
        let commit = preset.transform(commit, &ctx()).unwrap();
        assert_eq!(commit.section.as_deref(), Some("Custom"));
    }

    #[test]
    fn test_bad_type_order_fails_construction() {
        let result = derive_preset(Overrides {
            type_order: Some(vec!["feat".to_string(), "warpdrive".to_string()]),
            ..Overrides::default()
        });
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("warpdrive"));
    }

    #[test]
    fn test_transform_stage_receives_builtin_result() {
        let preset = derive_preset(Overrides::default())
            .unwrap()
            .with_transform_stage(|_, _, result| {
                result.map(|mut commit| {
                    commit.subject = commit.subject.map(|s| format!("{s}!"));
                    commit
                })
            });

        let commit = CommitRecord::new("feat: ship it")
            .with_type("feat")
            .with_subject("ship it");
        let commit = preset.transform(commit, &ctx()).unwrap();
        assert_eq!(commit.subject.as_deref(), Some("Ship it!"));
    }

    #[test]
    fn test_transform_stage_can_rescue_discarded_commit() {
        let preset = derive_preset(Overrides::default())
            .unwrap()
            .with_transform_stage(|original, _, result| {
                result.or_else(|| Some(original.clone()))
            });

        let commit = CommitRecord::new("chore: normally hidden")
            .with_type("chore")
            .with_subject("normally hidden");
        assert!(preset.transform(commit, &ctx()).is_some());
    }

    #[test]
    fn test_stages_run_in_registration_order() {
        let preset = derive_preset(Overrides::default())
            .unwrap()
            .with_what_bump_stage(|_, mut rec| {
                rec.reason = format!("{} (first)", rec.reason);
                rec
            })
            .with_what_bump_stage(|_, mut rec| {
                rec.reason = format!("{} (second)", rec.reason);
                rec
            });

        let rec = preset.what_bump(&[]);
        assert!(rec.reason.ends_with("(first) (second)"));
    }

    #[test]
    fn test_what_bump_stage_observes_builtin_recommendation() {
        let preset = derive_preset(Overrides::default())
            .unwrap()
            .with_what_bump_stage(|_, rec| {
                assert_eq!(rec.level, BumpLevel::Minor);
                Recommendation {
                    level: BumpLevel::Patch,
                    reason: "held back".to_string(),
                }
            });

        let commits = vec![CommitRecord::new("feat: a").with_type("feat")];
        let rec = preset.what_bump(&commits);
        assert_eq!(rec.level, BumpLevel::Patch);
        assert_eq!(rec.reason, "held back");
    }

    #[test]
    fn test_generate_on_stage_overrides_decision() {
        let preset = derive_preset(Overrides::default())
            .unwrap()
            .with_generate_on_stage(|_, decision| !decision);

        assert!(!preset.generate_on(&ReleaseContext::new("1.0.0")));
        assert!(preset.generate_on(&ReleaseContext::new("1.0.0-rc.1")));
    }

    #[test]
    fn test_end_to_end_breaking_build_commit() {
        let preset = derive_preset(Overrides::default()).unwrap();

        let commit = CommitRecord::new("build!: first build setup")
            .with_type("build")
            .with_subject("first build setup")
            .with_body("BREAKING CHANGE: New build system.")
            .with_note(Note::new("New build system."))
            .with_hash("deadbeefcafe1234");
        let commit = preset.transform(commit, &ctx()).unwrap();

        assert_eq!(commit.section.as_deref(), Some("Build System"));
        assert_eq!(commit.notes.len(), 1);
        assert_eq!(commit.notes[0].text, "**New build system.**");
        assert_eq!(commit.notes[0].title, "BREAKING CHANGES");
        assert_eq!(commit.short_hash.as_deref(), Some("deadbee"));
    }

    #[test]
    fn test_section_ordering_from_preset() {
        let preset = derive_preset(Overrides::default()).unwrap();
        let ordering = preset.section_ordering();
        assert!(ordering.compare_groups("Features", "Reverts").is_lt());
    }

    #[test]
    fn test_parser_options_share_issue_prefixes() {
        let preset = derive_preset(Overrides {
            issue_prefixes: Some(vec!["#".to_string(), "GH-".to_string()]),
            ..Overrides::default()
        })
        .unwrap();

        // One owned source of truth per config instance
        assert_eq!(preset.parser_options().issue_prefixes, preset.config.issue_prefixes);
        assert_eq!(preset.config.issue_prefixes, vec!["#", "GH-"]);
    }
}
