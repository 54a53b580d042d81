//! Configuration types

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::template::expand_template;

use super::defaults;
use super::validation::validate_config;

/// A mapping rule from a commit-type token to a display section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Lowercase type token this entry matches (e.g. "feat")
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Section title commits of this type are filed under
    pub section: String,
    /// Whether commits of this type are hidden by default
    #[serde(default)]
    pub hidden: bool,
    /// Optional scope qualifier; when set, the entry only matches commits
    /// with exactly this scope
    #[serde(default)]
    pub scope: Option<String>,
}

impl TypeEntry {
    /// Create a visible entry for a type token
    pub fn new(commit_type: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            section: section.into(),
            hidden: false,
            scope: None,
        }
    }

    /// Mark the entry as hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Restrict the entry to a specific scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

/// Parser contract exposed to the upstream commit-history parser.
///
/// The bang-note and revert-fallback logic in the transformer depend on the
/// upstream parser applying exactly these patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Pattern splitting the header line into type/scope/subject
    pub header_pattern: String,
    /// Header pattern variant requiring the breaking-change bang
    pub breaking_header_pattern: String,
    /// Capture names for the header pattern
    pub header_correspondence: Vec<String>,
    /// Pattern matching merge commit headers
    pub merge_pattern: String,
    /// Capture names for the merge pattern
    pub merge_correspondence: Vec<String>,
    /// Pattern matching revert commit messages
    pub revert_pattern: String,
    /// Capture names for the revert pattern
    pub revert_correspondence: Vec<String>,
    /// Issue prefixes, shared with the transformer via [`Config`]
    pub issue_prefixes: Vec<String>,
    /// Keywords starting a breaking-change note
    pub note_keywords: Vec<String>,
}

/// Options forwarded to the raw git log extraction stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitRawOptions {
    /// Whether merge commits are excluded from the history walk
    pub no_merges: bool,
}

impl Default for GitRawOptions {
    fn default() -> Self {
        Self { no_merges: true }
    }
}

/// The composed changelog preset configuration.
///
/// Constructed once from defaults, optionally merged with caller overrides,
/// then finalized. `issue_prefixes` is the single source of truth for both
/// the parser contract and the transformer; there is no hidden accessor
/// aliasing between configuration paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preamble prefixed to the generated changelog
    pub changelog_title: String,

    /// Case-insensitive substrings causing unconditional commit discard
    pub skip_commands: Vec<String>,

    /// Issue prefixes recognized in commit subjects
    pub issue_prefixes: Vec<String>,

    /// Commit type table
    pub types: Vec<TypeEntry>,

    /// Type tokens controlling section precedence in the rendered output
    pub type_order: Vec<String>,

    /// Downgrade major/minor bumps one tier before the first stable release
    pub pre_major: bool,

    /// URL format for commit links
    pub commit_url_format: String,
    /// URL format for compare links
    pub compare_url_format: String,
    /// URL format for issue links
    pub issue_url_format: String,
    /// URL format for user links
    pub user_url_format: String,

    /// Main writer template
    pub main_template: String,
    /// Header partial; derived from `compare_url_format` at finalization
    /// unless explicitly set
    pub header_partial: Option<String>,
    /// Commit partial; derived from `commit_url_format`/`issue_url_format`
    /// at finalization unless explicitly set
    pub commit_partial: Option<String>,
    /// Footer partial rendering note groups
    pub footer_partial: String,

    /// Commit grouping key forwarded to the writer
    pub group_by: String,
    /// Commit sort keys within a group
    pub commits_sort: Vec<String>,
    /// Note group sort key
    pub note_groups_sort: String,

    /// Raw git log options
    pub git_raw_opts: GitRawOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changelog_title: defaults::CHANGELOG_TITLE.to_string(),
            skip_commands: defaults::SKIP_COMMANDS.iter().map(|s| s.to_string()).collect(),
            issue_prefixes: defaults::ISSUE_PREFIXES.iter().map(|s| s.to_string()).collect(),
            types: defaults::default_types(),
            type_order: defaults::TYPE_CHANGELOG_ORDER
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pre_major: false,
            commit_url_format: defaults::COMMIT_URL_FORMAT.to_string(),
            compare_url_format: defaults::COMPARE_URL_FORMAT.to_string(),
            issue_url_format: defaults::ISSUE_URL_FORMAT.to_string(),
            user_url_format: defaults::USER_URL_FORMAT.to_string(),
            main_template: defaults::MAIN_TEMPLATE.to_string(),
            header_partial: None,
            commit_partial: None,
            footer_partial: defaults::FOOTER_TEMPLATE.to_string(),
            group_by: "section".to_string(),
            commits_sort: vec!["scope".to_string(), "subject".to_string()],
            note_groups_sort: "title".to_string(),
            git_raw_opts: GitRawOptions::default(),
        }
    }
}

impl Config {
    /// Find the first type entry matching a type key and commit scope.
    ///
    /// Matching is case-insensitive on the type token. An entry with a scope
    /// only matches commits carrying exactly that scope; an entry without a
    /// scope matches any commit scope or none.
    pub fn find_type_entry(&self, type_key: &str, scope: Option<&str>) -> Option<&TypeEntry> {
        self.types.iter().find(|entry| {
            entry.commit_type.eq_ignore_ascii_case(type_key)
                && entry
                    .scope
                    .as_deref()
                    .map_or(true, |entry_scope| Some(entry_scope) == scope)
        })
    }

    /// Build the parser contract view over this configuration
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            header_pattern: defaults::HEADER_PATTERN.to_string(),
            breaking_header_pattern: defaults::BREAKING_HEADER_PATTERN.to_string(),
            header_correspondence: vec![
                "type".to_string(),
                "scope".to_string(),
                "subject".to_string(),
            ],
            merge_pattern: defaults::MERGE_PATTERN.to_string(),
            merge_correspondence: vec!["id".to_string(), "source".to_string()],
            revert_pattern: defaults::REVERT_PATTERN.to_string(),
            revert_correspondence: vec!["header".to_string(), "hash".to_string()],
            issue_prefixes: self.issue_prefixes.clone(),
            note_keywords: defaults::NOTE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Finalize the configuration: derive the header/commit partials from
    /// the (possibly overridden) URL formats and validate integrity.
    ///
    /// Explicitly overridden partials are left untouched.
    pub fn finalize(&mut self) -> Result<()> {
        if self.header_partial.is_none() {
            debug!("deriving header partial from compare URL format");
            let compare_url = expand_template(
                &self.compare_url_format,
                &[
                    ("host", defaults::HOST_PARTIAL),
                    ("owner", defaults::OWNER_PARTIAL),
                    ("repository", defaults::REPOSITORY_PARTIAL),
                ],
            );
            self.header_partial = Some(expand_template(
                defaults::HEADER_TEMPLATE,
                &[("compareUrlFormat", &compare_url)],
            ));
        }

        if self.commit_partial.is_none() {
            debug!("deriving commit partial from commit/issue URL formats");
            let commit_url = expand_template(
                &self.commit_url_format,
                &[
                    ("host", defaults::HOST_PARTIAL),
                    ("owner", defaults::OWNER_PARTIAL),
                    ("repository", defaults::REPOSITORY_PARTIAL),
                ],
            );
            let issue_url = expand_template(
                &self.issue_url_format,
                &[
                    ("host", defaults::HOST_PARTIAL),
                    ("owner", defaults::OWNER_PARTIAL),
                    ("repository", defaults::REPOSITORY_PARTIAL),
                    ("id", "{{this.issue}}"),
                    ("prefix", "{{this.prefix}}"),
                ],
            );
            self.commit_partial = Some(expand_template(
                defaults::COMMIT_TEMPLATE,
                &[
                    ("commitUrlFormat", &commit_url),
                    ("issueUrlFormat", &issue_url),
                ],
            ));
        }

        validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.issue_prefixes, vec!["#"]);
        assert_eq!(config.types.len(), 11);
        assert!(config.skip_commands.contains(&"[skip ci]".to_string()));
    }

    #[test]
    fn test_find_type_entry_case_insensitive() {
        let config = Config::default();
        let entry = config.find_type_entry("FEAT", None).unwrap();
        assert_eq!(entry.section, "Features");
    }

    #[test]
    fn test_find_type_entry_scope_exact() {
        let mut config = Config::default();
        config
            .types
            .push(TypeEntry::new("feat", "API Features").with_scope("api"));

        // Entry without a scope wins for any commit scope
        let entry = config.find_type_entry("feat", Some("api")).unwrap();
        assert_eq!(entry.section, "Features");

        // Scoped entry only matches its exact scope
        config.types.retain(|e| e.scope.is_some() || e.commit_type != "feat");
        let entry = config.find_type_entry("feat", Some("api")).unwrap();
        assert_eq!(entry.section, "API Features");
        assert!(config.find_type_entry("feat", Some("cli")).is_none());
        assert!(config.find_type_entry("feat", None).is_none());
    }

    #[test]
    fn test_finalize_derives_partials() {
        let mut config = Config::default();
        config.finalize().unwrap();

        let header = config.header_partial.unwrap();
        assert!(header.contains("/compare/"));
        assert!(header.contains("{{~@root.host}}"));

        let commit = config.commit_partial.unwrap();
        assert!(commit.contains("/commit/{{hash}}"));
        assert!(commit.contains("{{this.issue}}"));
    }

    #[test]
    fn test_finalize_keeps_explicit_partials() {
        let mut config = Config {
            header_partial: Some("custom header".to_string()),
            ..Config::default()
        };
        config.finalize().unwrap();
        assert_eq!(config.header_partial.as_deref(), Some("custom header"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("type: feat"));
        assert!(yaml.contains("section: Features"));
    }
}
