//! Shapes for `differential.revision.search`.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevisionStatus {
    Draft,
    NeedsReview,
    NeedsRevision,
    ChangesPlanned,
    Accepted,
    Published,
    Abandoned,
}

impl RevisionStatus {
    /// Published and abandoned revisions are closed.
    pub fn is_closed(self) -> bool {
        matches!(self, RevisionStatus::Published | RevisionStatus::Abandoned)
    }

    pub fn is_open(self) -> bool {
        !self.is_closed()
    }
}

/// Parameters of `differential.revision.search`, minus the cursor fields
/// [`Paginated`](crate::Paginated) contributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSearchParams {
    /// Builtin or saved query to start from, e.g. `"active"` or `"all"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<RevisionSearchConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<RevisionSearchAttachments>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSearchConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phids: Option<Vec<String>>,
    #[serde(rename = "responsiblePHIDs", skip_serializing_if = "Option::is_none")]
    pub responsible_phids: Option<Vec<String>>,
    #[serde(rename = "authorPHIDs", skip_serializing_if = "Option::is_none")]
    pub author_phids: Option<Vec<String>>,
    #[serde(rename = "reviewerPHIDs", skip_serializing_if = "Option::is_none")]
    pub reviewer_phids: Option<Vec<String>>,
    #[serde(rename = "repositoryPHIDs", skip_serializing_if = "Option::is_none")]
    pub repository_phids: Option<Vec<String>>,
    /// Status filter names, e.g. `"needs-review"` or the `open()` /
    /// `closed()` functions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_paths: Option<Vec<String>>,
    /// Full-text search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
}

/// Extra result data the server attaches per revision when asked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionSearchAttachments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<bool>,
    #[serde(rename = "reviewers-extra", skip_serializing_if = "Option::is_none")]
    pub reviewers_extra: Option<bool>,
}

/// One `differential.revision.search` result item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: u32,
    /// Object type tag, `"DREV"` for revisions.
    #[serde(rename = "type")]
    pub object_type: String,
    pub phid: String,
    pub fields: RevisionFields,
    #[serde(default)]
    pub attachments: RevisionAttachments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionFields {
    pub title: String,
    pub uri: String,
    #[serde(rename = "authorPHID")]
    pub author_phid: String,
    pub status: RevisionStatusField,
    #[serde(rename = "repositoryPHID", default)]
    pub repository_phid: Option<String>,
    #[serde(rename = "diffPHID")]
    pub diff_phid: String,
    pub summary: String,
    pub test_plan: String,
    pub is_draft: bool,
    pub hold_as_draft: bool,
    pub date_created: i64,
    pub date_modified: i64,
    pub policy: RevisionPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionStatusField {
    pub value: RevisionStatus,
    /// Display name, e.g. `"Needs Review"`.
    pub name: String,
    pub closed: bool,
    #[serde(rename = "color.ansi", default)]
    pub color_ansi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPolicy {
    pub view: String,
    pub edit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionAttachments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribers: Option<SubscribersAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<ReviewersAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectsAttachment>,
    #[serde(
        rename = "reviewers-extra",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reviewers_extra: Option<ReviewersExtraAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribersAttachment {
    #[serde(rename = "subscriberPHIDs")]
    pub subscriber_phids: Vec<String>,
    pub subscriber_count: u32,
    pub viewer_is_subscribed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewersAttachment {
    pub reviewers: Vec<Reviewer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    #[serde(rename = "reviewerPHID")]
    pub reviewer_phid: String,
    /// Review state, e.g. `"accepted"` or `"blocking"`.
    pub status: String,
    pub is_blocking: bool,
    #[serde(rename = "actorPHID", default)]
    pub actor_phid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsAttachment {
    #[serde(rename = "projectPHIDs")]
    pub project_phids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewersExtraAttachment {
    #[serde(rename = "reviewers-extra")]
    pub reviewers_extra: Vec<ReviewerExtra>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerExtra {
    #[serde(rename = "reviewerPHID")]
    pub reviewer_phid: String,
    #[serde(rename = "voidedPHID", default)]
    pub voided_phid: Option<String>,
    #[serde(rename = "diffPHID", default)]
    pub diff_phid: Option<String>,
}
