//! Commit record types consumed by the changelog engine
//!
//! These records are produced upstream by a commit-history parser that
//! tokenizes the header line into type/scope/subject. The engine only
//! classifies and rewrites them; it never parses raw git log text.

use serde::{Deserialize, Serialize};

/// A structured commit as delivered by the upstream history parser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRecord {
    /// Lowercased commit-type token (e.g. "feat"), if the header carried one
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    /// Optional scope qualifier; `"*"` is treated as "no scope"
    pub scope: Option<String>,
    /// One-line description, rewritten in place by the transformer
    pub subject: Option<String>,
    /// Raw first line of the commit message (type+scope+subject combined)
    pub header: String,
    /// Message body
    pub body: Option<String>,
    /// Message footer
    pub footer: Option<String>,
    /// Breaking-change annotations
    pub notes: Vec<Note>,
    /// Present when the commit reverts another commit
    pub revert: Option<RevertInfo>,
    /// Issue references detected upstream
    pub references: Vec<Reference>,
    /// Full commit hash
    pub hash: Option<String>,
    /// First 7 characters of `hash`, derived by the transformer
    pub short_hash: Option<String>,
    /// Display section assigned by the transformer
    pub section: Option<String>,
    /// Type token as it was before section assignment
    pub original_type: Option<String>,
}

impl CommitRecord {
    /// Create a record from a raw header line and its parsed pieces
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// Set the commit type
    pub fn with_type(mut self, commit_type: impl Into<String>) -> Self {
        self.commit_type = Some(commit_type.into());
        self
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the footer
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the commit hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Add a breaking-change note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Add an issue reference
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    /// Mark the commit as a revert of another commit
    pub fn with_revert(mut self, revert: RevertInfo) -> Self {
        self.revert = Some(revert);
        self
    }
}

/// A breaking-change annotation on a commit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    /// Annotation text
    pub text: String,
    /// Note group title (set to the breaking-changes group by the engine)
    pub title: String,
}

impl Note {
    /// Create a note with text and no group title
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: String::new(),
        }
    }
}

/// An issue reference such as `#123` or `GH-7`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Issue prefix (e.g. "#")
    pub prefix: String,
    /// Issue identifier (digits)
    pub issue: String,
}

impl Reference {
    /// Create a reference from prefix and issue id
    pub fn new(prefix: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issue: issue.into(),
        }
    }
}

/// Revert metadata captured by the upstream revert pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevertInfo {
    /// Header line of the reverted commit
    pub header: Option<String>,
    /// Hash of the reverted commit
    pub hash: Option<String>,
}

/// Repository context used for URL expansion during transformation
#[derive(Debug, Clone, Default)]
pub struct TransformContext {
    /// Host URL (e.g. "https://github.com")
    pub host: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repository: String,
}

impl TransformContext {
    /// Create a context from host, owner and repository
    pub fn new(
        host: impl Into<String>,
        owner: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            repository: repository.into(),
        }
    }
}

/// Release context consulted by the generate-on predicate
#[derive(Debug, Clone, Default)]
pub struct ReleaseContext {
    /// Candidate version for the next changelog block
    pub version: Option<String>,
}

impl ReleaseContext {
    /// Create a context for a candidate version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }
}
