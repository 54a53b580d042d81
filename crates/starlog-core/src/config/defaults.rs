//! Default configuration values and embedded writer templates

use super::types::TypeEntry;

/// Preamble prefixed to any generated changelog
pub const CHANGELOG_TITLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Conventional Commits](https://conventionalcommits.org),\n\
and this project adheres to [Semantic Versioning](https://semver.org).";

/// Strings in commit messages that, when found, cause the commit to be skipped
pub const SKIP_COMMANDS: &[&str] = &["[skip ci]", "[ci skip]", "[skip cd]", "[cd skip]"];

/// Commit types, grouped by section, appear in the changelog in this order.
/// Types not listed here follow in their configured order.
pub const TYPE_CHANGELOG_ORDER: &[&str] = &["feat", "fix", "perf", "build", "revert"];

/// Issue prefixes recognized in commit subjects and footers
pub const ISSUE_PREFIXES: &[&str] = &["#"];

/// Default URL format for commit links
pub const COMMIT_URL_FORMAT: &str = "{{host}}/{{owner}}/{{repository}}/commit/{{hash}}";

/// Default URL format for compare links
pub const COMPARE_URL_FORMAT: &str =
    "{{host}}/{{owner}}/{{repository}}/compare/{{previousTag}}...{{currentTag}}";

/// Default URL format for issue links
pub const ISSUE_URL_FORMAT: &str = "{{host}}/{{owner}}/{{repository}}/issues/{{id}}";

/// Default URL format for user links
pub const USER_URL_FORMAT: &str = "{{host}}/{{user}}";

/// Header pattern the upstream parser applies to the first message line
pub const HEADER_PATTERN: &str = r"^(\w*)(?:\((.*)\))?!?: (.*)$";

/// Header pattern variant requiring the breaking-change bang
pub const BREAKING_HEADER_PATTERN: &str = r"^(\w*)(?:\((.*)\))?!: (.*)$";

/// Pattern matching merge commit headers
pub const MERGE_PATTERN: &str = r"^Merge pull request #(\d+) from (.*)$";

/// Pattern matching revert commit messages
pub const REVERT_PATTERN: &str =
    r#"^(?:Revert|revert:)\s"?([\s\S]+?)"?\s*This reverts commit (\w*)\."#;

/// Keywords starting a breaking-change note in body or footer
pub const NOTE_KEYWORDS: &[&str] = &["BREAKING CHANGE", "BREAKING CHANGES", "BREAKING"];

/// Group title assigned to breaking-change notes
pub const BREAKING_CHANGES_TITLE: &str = "BREAKING CHANGES";

/// Main handlebars template consumed by the downstream writer
pub const MAIN_TEMPLATE: &str = "{{> header}}\n\n\
{{#each commitGroups}}\n\
{{#if title}}\n### {{title}}\n\n{{/if}}\n\
{{#each commits}}\n{{> commit root=@root}}\n{{/each}}\n\
{{/each}}\n\n\
{{> footer}}\n";

/// Header partial template; `{{compareUrlFormat}}` is spliced at finalization
pub const HEADER_TEMPLATE: &str = "\
{{#if isPatch~}} ## {{~else~}} # {{~/if}} \
{{#if @root.linkCompare~}} [{{version}}]({{compareUrlFormat}}) \
{{~else}} {{~version}} {{~/if}} \
{{~#if title}} \"{{title}}\" {{~/if}} \
{{~#if date}} ({{date}}){{/if}}\n";

/// Commit partial template; `{{commitUrlFormat}}` and `{{issueUrlFormat}}`
/// are spliced at finalization
pub const COMMIT_TEMPLATE: &str = "\
* {{#if scope}}**{{scope}}:** {{/if}}\
{{#if subject}}{{~subject}}{{~else}}{{~header}}{{~/if}} \
{{#if @root.linkReferences~}}([{{shortHash}}]({{commitUrlFormat}})){{~else}}{{shortHash}}{{~/if}}\
{{~#if references}} \
<sup>closes {{#each references}}[{{this.prefix}}{{this.issue}}]({{issueUrlFormat}}){{/each}}</sup>\
{{~/if}}\n";

/// Footer partial template rendering note groups
pub const FOOTER_TEMPLATE: &str = "\
{{#if noteGroups}}{{#each noteGroups}}\n\
### {{title}}\n\n\
{{#each notes}}\
* {{#if commit.scope}}**_{{commit.scope}}_:** {{/if}}{{text}}\n\
{{/each}}\
{{/each}}{{/if}}";

/// Context partial resolving the owner from commit or root context
pub const OWNER_PARTIAL: &str =
    "{{#if this.owner}}{{~this.owner}}{{else}}{{~@root.owner}}{{/if}}";

/// Context partial resolving the host from the root context
pub const HOST_PARTIAL: &str = "{{~@root.host}}";

/// Context partial resolving the repository from commit or root context
pub const REPOSITORY_PARTIAL: &str =
    "{{#if this.repository}}{{~this.repository}}{{else}}{{~@root.repository}}{{/if}}";

/// Default commit type table mapping type tokens to display sections
pub fn default_types() -> Vec<TypeEntry> {
    vec![
        TypeEntry::new("feat", "Features"),
        TypeEntry::new("fix", "Bug Fixes"),
        TypeEntry::new("perf", "Performance Improvements"),
        TypeEntry::new("revert", "Reverts"),
        TypeEntry::new("build", "Build System"),
        TypeEntry::new("docs", "Documentation").hidden(),
        TypeEntry::new("style", "Styles").hidden(),
        TypeEntry::new("refactor", "Refactoring").hidden(),
        TypeEntry::new("test", "Tests").hidden(),
        TypeEntry::new("ci", "Continuous Integration").hidden(),
        TypeEntry::new("chore", "Miscellaneous").hidden(),
    ]
}

/// Get list of overrides file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        "starlog.toml",
        "starlog.yaml",
        "starlog.json",
        ".starlog.toml",
        ".starlog.yaml",
    ]
}
