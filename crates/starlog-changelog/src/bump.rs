//! Semantic-version bump recommendation

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use starlog_core::config::Config;
use starlog_core::types::CommitRecord;

use crate::transform::add_bang_notes;

/// Recommended semantic-versioning severity for the next release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    /// Incompatible change detected
    Major,
    /// New feature detected
    Minor,
    /// Default severity for any other change
    Patch,
}

impl BumpLevel {
    /// Numeric level: 0 = major, 1 = minor, 2 = patch
    pub fn rank(self) -> u8 {
        match self {
            Self::Major => 0,
            Self::Minor => 1,
            Self::Patch => 2,
        }
    }

    /// Level name as a string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

/// A bump recommendation with a human-readable justification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended severity
    pub level: BumpLevel,
    /// Why this level was chosen
    pub reason: String,
}

/// Compute the bump level for the full set of commits since the last
/// release.
///
/// Breaking changes force a sticky major; features raise patch to minor but
/// never override a detected major. With `pre_major` set, a detected
/// major/minor is downgraded one tier: breaking and feature changes before
/// the first stable release carry one severity less.
#[instrument(skip_all, fields(commit_count = commits.len()))]
pub fn what_bump(commits: &[CommitRecord], config: &Config) -> Recommendation {
    let mut level = BumpLevel::Patch;
    let mut breakings = 0usize;
    let mut features = 0usize;

    for commit in commits {
        // Receives raw commits, so bang notes are synthesized here as well
        let mut commit = commit.clone();
        add_bang_notes(&mut commit);

        if !commit.notes.is_empty() {
            breakings += commit.notes.len();
            level = BumpLevel::Major;
        } else if commit
            .commit_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("feat") || t.eq_ignore_ascii_case("feature"))
        {
            features += 1;
            if level == BumpLevel::Patch {
                level = BumpLevel::Minor;
            }
        }
    }

    if config.pre_major && level != BumpLevel::Patch {
        debug!("pre-major release detected, restricted to minor and patch bumps");
        level = match level {
            BumpLevel::Major => BumpLevel::Minor,
            BumpLevel::Minor | BumpLevel::Patch => BumpLevel::Patch,
        };
    }

    let reason = format!(
        "There {} {} breaking {} and {} {}",
        if breakings == 1 { "is" } else { "are" },
        breakings,
        if breakings == 1 { "change" } else { "changes" },
        features,
        if features == 1 { "feature" } else { "features" },
    );

    debug!(level = level.as_str(), reason, "bump recommendation");
    Recommendation { level, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlog_core::types::Note;

    fn commit(header: &str, commit_type: &str) -> CommitRecord {
        CommitRecord::new(header).with_type(commit_type)
    }

    #[test]
    fn test_feature_and_fix_recommend_minor() {
        let commits = vec![commit("feat: a", "feat"), commit("fix: b", "fix")];
        let rec = what_bump(&commits, &Config::default());

        assert_eq!(rec.level, BumpLevel::Minor);
        assert_eq!(rec.level.rank(), 1);
        assert_eq!(rec.reason, "There are 0 breaking changes and 1 feature");
    }

    #[test]
    fn test_fixes_only_recommend_patch() {
        let commits = vec![commit("fix: b", "fix"), commit("chore: c", "chore")];
        let rec = what_bump(&commits, &Config::default());
        assert_eq!(rec.level, BumpLevel::Patch);
    }

    #[test]
    fn test_breaking_note_recommends_major() {
        let commits = vec![
            commit("fix: b", "fix").with_note(Note::new("Everything changed.")),
        ];
        let rec = what_bump(&commits, &Config::default());

        assert_eq!(rec.level, BumpLevel::Major);
        assert_eq!(rec.reason, "There is 1 breaking change and 0 features");
    }

    #[test]
    fn test_major_is_sticky() {
        // A later feature-only commit cannot raise the level back up
        let commits = vec![
            commit("feat!: breaking feature", "feat"),
            commit("feat: harmless feature", "feat"),
        ];
        let rec = what_bump(&commits, &Config::default());
        assert_eq!(rec.level, BumpLevel::Major);
        assert_eq!(rec.reason, "There is 1 breaking change and 1 feature");
    }

    #[test]
    fn test_bang_header_synthesizes_note() {
        let commits = vec![commit("refactor(core)!: rewrite internals", "refactor")];
        let rec = what_bump(&commits, &Config::default());
        assert_eq!(rec.level, BumpLevel::Major);
    }

    #[test]
    fn test_bang_does_not_double_count_existing_note() {
        let commits = vec![
            commit("feat!: redo", "feat").with_note(Note::new("Redone.")),
        ];
        let rec = what_bump(&commits, &Config::default());
        assert_eq!(rec.reason, "There is 1 breaking change and 0 features");
    }

    #[test]
    fn test_feature_alias_counts() {
        let commits = vec![commit("feature: some more features", "feature")];
        let rec = what_bump(&commits, &Config::default());
        assert_eq!(rec.level, BumpLevel::Minor);
    }

    #[test]
    fn test_pre_major_downgrades_major_to_minor() {
        let mut config = Config::default();
        config.pre_major = true;

        let commits = vec![commit("feat!: breaking feature", "feat")];
        let rec = what_bump(&commits, &config);
        assert_eq!(rec.level, BumpLevel::Minor);
    }

    #[test]
    fn test_pre_major_downgrades_minor_to_patch() {
        let mut config = Config::default();
        config.pre_major = true;

        let commits = vec![commit("feat: a", "feat")];
        let rec = what_bump(&commits, &config);
        assert_eq!(rec.level, BumpLevel::Patch);
    }

    #[test]
    fn test_pre_major_leaves_patch_alone() {
        let mut config = Config::default();
        config.pre_major = true;

        let commits = vec![commit("fix: b", "fix")];
        let rec = what_bump(&commits, &config);
        assert_eq!(rec.level, BumpLevel::Patch);
    }

    #[test]
    fn test_empty_commit_set() {
        let rec = what_bump(&[], &Config::default());
        assert_eq!(rec.level, BumpLevel::Patch);
        assert_eq!(rec.reason, "There are 0 breaking changes and 0 features");
    }
}
