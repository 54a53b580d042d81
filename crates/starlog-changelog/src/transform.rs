//! Commit classification and transformation
//!
//! Decides, for each parsed commit, whether it appears in the changelog,
//! which section it belongs to, and how its text is rewritten (issue/user
//! links, casing, revert decoration).

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, instrument};

use starlog_core::config::{defaults, Config};
use starlog_core::template::expand_template;
use starlog_core::types::{CommitRecord, Note, TransformContext};

/// Matches `type(scope)!: subject` headers carrying the breaking bang
static BREAKING_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(defaults::BREAKING_HEADER_PATTERN).expect("invalid breaking header pattern")
});

/// Matches the release-as footer forcing an explicit next version
static RELEASE_AS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)release-as:\s*\w*@?[0-9]+\.[0-9]+\.[0-9a-z]+(?:-[0-9a-z.]+)?")
        .expect("invalid release-as pattern")
});

/// Matches `@username` mentions; candidates are validated positionally in
/// [`replace_user_refs`]
static USER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\B@([a-z0-9](?:-?[a-z0-9]){0,38})").expect("invalid user pattern")
});

/// Usernames longer than this are package scopes or noise, never mentions
const MAX_USERNAME_LEN: usize = 39;

/// Synthesize a breaking-change note from a bang header.
///
/// Covers `test(system)!: hello world` with no `BREAKING CHANGE` in the
/// body: when the header carries the bang and the commit has zero notes, a
/// single note is added whose text is the header's subject portion. A
/// body-derived note always takes precedence since synthesis only fires on
/// an empty note list.
pub fn add_bang_notes(commit: &mut CommitRecord) {
    if !commit.notes.is_empty() {
        return;
    }
    if let Some(caps) = BREAKING_HEADER_REGEX.captures(&commit.header) {
        let subject = caps.get(3).map_or("", |m| m.as_str());
        debug!(subject, "synthesizing breaking-change note from bang header");
        commit.notes.push(Note::new(subject));
    }
}

/// Classify and rewrite one commit, or discard it.
///
/// Returns `None` when the commit should not appear in the changelog. Skip
/// commands win outright, even over breaking-change content; breaking
/// changes are otherwise never discarded regardless of type visibility.
#[instrument(skip_all, fields(header = %commit.header))]
pub fn transform(
    mut commit: CommitRecord,
    context: &TransformContext,
    config: &Config,
) -> Option<CommitRecord> {
    if let Some(scope) = &commit.scope {
        commit.scope = Some(scope.to_lowercase());
    }

    // Skip commands have absolute priority
    let search_target = format!(
        "{}{}",
        commit.subject.as_deref().unwrap_or(""),
        commit.header
    )
    .to_lowercase();
    if config
        .skip_commands
        .iter()
        .any(|cmd| search_target.contains(&cmd.to_lowercase()))
    {
        debug!("skip command in commit message, discarding");
        return None;
    }

    // A revert sub-record forces the type key; a literal "revert" type
    // without one is a plain lookup by type key
    let type_key = if commit.revert.is_some() {
        debug!("coercing to type \"revert\"");
        "revert".to_string()
    } else {
        commit.commit_type.as_deref().unwrap_or("").to_lowercase()
    };

    let entry = config.find_type_entry(&type_key, commit.scope.as_deref());

    // Must run before the discard decision: a synthesized note can rescue
    // the commit
    add_bang_notes(&mut commit);

    if type_key == "revert" && commit.subject.as_deref().map_or(true, str::is_empty) {
        let fallback = commit
            .header
            .strip_prefix("Revert ")
            .unwrap_or(&commit.header);
        commit.subject = Some(fallback.to_string());
    }

    let mut discard = true;

    // Keep the commit if the special release-as footer is used
    if commit
        .footer
        .as_deref()
        .is_some_and(|f| RELEASE_AS_REGEX.is_match(f))
        || commit
            .body
            .as_deref()
            .is_some_and(|b| RELEASE_AS_REGEX.is_match(b))
    {
        debug!("release-as in body/footer, keeping commit");
        discard = false;
    }

    // Never discard breaking changes. Note headings are bolded; scope-less
    // first lines become sentence case.
    let scoped = commit.scope.as_deref().is_some_and(|s| !s.is_empty());
    for note in &mut commit.notes {
        if note.text.is_empty() {
            continue;
        }
        discard = false;

        let trimmed = note.text.trim();
        let mut lines = trimmed.split('\n');
        let first_line = lines.next().unwrap_or("");
        let heading = if scoped {
            first_line.to_string()
        } else {
            sentence_case(first_line)
        };

        let mut text = format!("**{heading}**");
        for line in lines {
            text.push('\n');
            text.push_str(line);
        }
        note.title = defaults::BREAKING_CHANGES_TITLE.to_string();
        note.text = text;
    }

    // Discard entries of unknown or hidden types unless rescued above
    if discard && entry.map_or(true, |e| e.hidden) {
        debug!("decision: commit discarded");
        return None;
    }
    debug!("decision: commit kept");

    commit.original_type = Some(type_key.clone());
    commit.commit_type = if type_key.is_empty() {
        None
    } else {
        Some(type_key.clone())
    };
    commit.section = entry.map(|e| e.section.clone());

    if commit.scope.as_deref() == Some("*") {
        commit.scope = Some(String::new());
    }

    if let Some(hash) = &commit.hash {
        commit.short_hash = Some(hash.chars().take(7).collect());
    }

    let mut linked_issues: Vec<String> = Vec::new();

    if let Some(subject) = commit.subject.take() {
        let mut subject = replace_issue_refs(&subject, context, config, &mut linked_issues);
        subject = replace_user_refs(&subject, context, config);

        let has_scope = commit.scope.as_deref().is_some_and(|s| !s.is_empty());
        if !has_scope {
            subject = sentence_case(&subject);
        }

        if type_key == "revert" {
            subject = format!("*{subject}*");
        }

        commit.subject = Some(subject);
    }

    // Drop references that already appear inline in the subject
    commit
        .references
        .retain(|r| !linked_issues.contains(&format!("{}{}", r.prefix, r.issue)));

    Some(commit)
}

/// Replace `<prefix><digits>` issue references with markdown links,
/// recording each replaced reference string
fn replace_issue_refs(
    subject: &str,
    context: &TransformContext,
    config: &Config,
    linked: &mut Vec<String>,
) -> String {
    if config.issue_prefixes.is_empty() {
        return subject.to_string();
    }

    let alternation = config
        .issue_prefixes
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(issue_regex) = Regex::new(&format!("({alternation})([0-9]+)")) else {
        return subject.to_string();
    };

    issue_regex
        .replace_all(subject, |caps: &Captures| {
            let prefix = &caps[1];
            let issue = &caps[2];
            let issue_str = format!("{prefix}{issue}");
            let url = expand_template(
                &config.issue_url_format,
                &[
                    ("host", context.host.as_str()),
                    ("owner", context.owner.as_str()),
                    ("repository", context.repository.as_str()),
                    ("id", issue),
                    ("prefix", prefix),
                ],
            );
            linked.push(issue_str.clone());
            format!("[{issue_str}]({url})")
        })
        .into_owned()
}

/// Replace `@username` mentions with markdown links.
///
/// A candidate followed by a path segment (`@scope/pkg`) is a scoped
/// package name and is left alone, unless the segment is itself a mention
/// (`@user1/@user2`). Candidates longer than [`MAX_USERNAME_LEN`] are left
/// entirely unlinked rather than linking a truncated prefix.
fn replace_user_refs(subject: &str, context: &TransformContext, config: &Config) -> String {
    let mut result = String::with_capacity(subject.len());
    let mut last = 0;

    for matched in USER_REGEX.find_iter(subject) {
        let user = &matched.as_str()[1..];
        result.push_str(&subject[last..matched.start()]);
        last = matched.end();

        let rest = &subject[matched.end()..];
        let package_like = rest.starts_with('/') && !rest.starts_with("/@");
        if user.len() > MAX_USERNAME_LEN || package_like {
            result.push_str(matched.as_str());
            continue;
        }

        let url = expand_template(
            &config.user_url_format,
            &[
                ("host", context.host.as_str()),
                ("owner", context.owner.as_str()),
                ("repository", context.repository.as_str()),
                ("user", user),
            ],
        );
        result.push_str(&format!("[@{user}]({url})"));
    }

    result.push_str(&subject[last..]);
    result
}

/// Transform a string into sentence case capitalization
fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
