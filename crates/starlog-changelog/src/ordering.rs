//! Section and commit ordering
//!
//! Commit groups appear in the changelog by the importance encoded in the
//! configured type-token order; unlisted sections follow in their configured
//! order. Ordering is keyed by type token and resolved to section titles at
//! construction time, since section strings are display-only and can collide
//! across aliased types.

use std::cmp::Ordering;

use starlog_core::config::validation::section_order;
use starlog_core::config::Config;
use starlog_core::error::Result;
use starlog_core::types::CommitRecord;

/// Precomputed section precedence derived from the configured type order
#[derive(Debug, Clone)]
pub struct SectionOrdering {
    order: Vec<String>,
}

impl SectionOrdering {
    /// Resolve the type-token order against the type table.
    ///
    /// Fails when a token has no entry in the table; callers surface this at
    /// preset construction time.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            order: section_order(config)?,
        })
    }

    /// Compare two commit groups by section title.
    ///
    /// Listed sections sort by list position before unlisted ones; unlisted
    /// sections compare equal so a stable sort keeps their configured order.
    pub fn compare_groups(&self, a: &str, b: &str) -> Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn rank(&self, title: &str) -> Option<usize> {
        self.order.iter().position(|section| section == title)
    }
}

/// Compare commits within a group by scope, then subject
pub fn compare_commits(a: &CommitRecord, b: &CommitRecord) -> Ordering {
    a.scope
        .cmp(&b.scope)
        .then_with(|| a.subject.cmp(&b.subject))
}

/// Compare note groups by title
pub fn compare_note_groups(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlog_core::types::CommitRecord;

    #[test]
    fn test_listed_sections_sort_by_importance() {
        let ordering = SectionOrdering::from_config(&Config::default()).unwrap();

        let mut titles = vec!["Reverts", "Bug Fixes", "Features", "Performance Improvements"];
        titles.sort_by(|a, b| ordering.compare_groups(a, b));
        assert_eq!(
            titles,
            vec!["Features", "Bug Fixes", "Performance Improvements", "Reverts"]
        );
    }

    #[test]
    fn test_unlisted_sections_follow_listed() {
        let ordering = SectionOrdering::from_config(&Config::default()).unwrap();

        let mut titles = vec!["Documentation", "Features", "Miscellaneous"];
        titles.sort_by(|a, b| ordering.compare_groups(a, b));
        assert_eq!(titles[0], "Features");
        // Stable sort preserves the configured order of unlisted sections
        assert_eq!(&titles[1..], &["Documentation", "Miscellaneous"]);
    }

    #[test]
    fn test_unknown_order_token_is_an_error() {
        let mut config = Config::default();
        config.type_order = vec!["warpdrive".to_string()];
        assert!(SectionOrdering::from_config(&config).is_err());
    }

    #[test]
    fn test_commits_sort_by_scope_then_subject() {
        let a = CommitRecord::new("fix(api): b").with_scope("api").with_subject("b");
        let b = CommitRecord::new("fix(api): a").with_scope("api").with_subject("a");
        let c = CommitRecord::new("fix(cli): a").with_scope("cli").with_subject("a");

        let mut commits = vec![c.clone(), a.clone(), b.clone()];
        commits.sort_by(compare_commits);

        assert_eq!(commits[0].subject, b.subject);
        assert_eq!(commits[1].subject, a.subject);
        assert_eq!(commits[2].scope, c.scope);
    }

    #[test]
    fn test_note_groups_sort_by_title() {
        let mut titles = vec!["Features", "BREAKING CHANGES"];
        titles.sort_by(|a, b| compare_note_groups(a, b));
        assert_eq!(titles, vec!["BREAKING CHANGES", "Features"]);
    }
}
