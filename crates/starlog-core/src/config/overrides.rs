//! Caller-supplied configuration overrides
//!
//! Every field carries an explicit merge strategy selected by field
//! identity: `types` concatenates after the defaults, everything else
//! replaces the default outright when present. Hook stages are code, not
//! data; they are registered on the preset, not deserialized here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Config, GitRawOptions, TypeEntry};

/// Typed overrides merged into the default [`Config`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Extra type entries, appended after the default table. Defaults can
    /// be shadowed by earlier position but never deleted.
    pub types: Vec<TypeEntry>,

    /// Replace the changelog preamble
    pub changelog_title: Option<String>,
    /// Replace the skip-command set
    pub skip_commands: Option<Vec<String>>,
    /// Replace the issue-prefix set
    pub issue_prefixes: Option<Vec<String>>,
    /// Replace the section-precedence token list
    pub type_order: Option<Vec<String>>,
    /// Set the pre-1.0 bump downgrade flag
    pub pre_major: Option<bool>,

    /// Replace the commit URL format
    pub commit_url_format: Option<String>,
    /// Replace the compare URL format
    pub compare_url_format: Option<String>,
    /// Replace the issue URL format
    pub issue_url_format: Option<String>,
    /// Replace the user URL format
    pub user_url_format: Option<String>,

    /// Replace the main writer template
    pub main_template: Option<String>,
    /// Set the header partial explicitly, disabling derivation
    pub header_partial: Option<String>,
    /// Set the commit partial explicitly, disabling derivation
    pub commit_partial: Option<String>,
    /// Replace the footer partial
    pub footer_partial: Option<String>,

    /// Replace the commit grouping key
    pub group_by: Option<String>,
    /// Replace the commit sort keys
    pub commits_sort: Option<Vec<String>>,
    /// Replace the note group sort key
    pub note_groups_sort: Option<String>,

    /// Replace the raw git log options
    pub git_raw_opts: Option<GitRawOptions>,
}

impl Overrides {
    /// Merge these overrides into a configuration
    pub fn apply(&self, config: &mut Config) {
        if !self.types.is_empty() {
            debug!(count = self.types.len(), "merging types via concatenation");
            config.types.extend(self.types.iter().cloned());
        }

        replace(&mut config.changelog_title, &self.changelog_title, "changelog_title");
        replace_vec(&mut config.skip_commands, &self.skip_commands, "skip_commands");
        replace_vec(&mut config.issue_prefixes, &self.issue_prefixes, "issue_prefixes");
        replace_vec(&mut config.type_order, &self.type_order, "type_order");

        if let Some(pre_major) = self.pre_major {
            debug!(pre_major, "merging pre_major via overwrite");
            config.pre_major = pre_major;
        }

        replace(&mut config.commit_url_format, &self.commit_url_format, "commit_url_format");
        replace(&mut config.compare_url_format, &self.compare_url_format, "compare_url_format");
        replace(&mut config.issue_url_format, &self.issue_url_format, "issue_url_format");
        replace(&mut config.user_url_format, &self.user_url_format, "user_url_format");

        replace(&mut config.main_template, &self.main_template, "main_template");
        if self.header_partial.is_some() {
            debug!("merging header_partial via overwrite");
            config.header_partial = self.header_partial.clone();
        }
        if self.commit_partial.is_some() {
            debug!("merging commit_partial via overwrite");
            config.commit_partial = self.commit_partial.clone();
        }
        replace(&mut config.footer_partial, &self.footer_partial, "footer_partial");

        replace(&mut config.group_by, &self.group_by, "group_by");
        replace_vec(&mut config.commits_sort, &self.commits_sort, "commits_sort");
        replace(&mut config.note_groups_sort, &self.note_groups_sort, "note_groups_sort");

        if let Some(opts) = &self.git_raw_opts {
            debug!("merging git_raw_opts via overwrite");
            config.git_raw_opts = opts.clone();
        }
    }
}

fn replace(target: &mut String, source: &Option<String>, field: &str) {
    if let Some(value) = source {
        debug!(field, "merging via overwrite");
        *target = value.clone();
    }
}

fn replace_vec(target: &mut Vec<String>, source: &Option<Vec<String>>, field: &str) {
    if let Some(value) = source {
        debug!(field, "merging via overwrite");
        *target = value.clone();
    }
}
