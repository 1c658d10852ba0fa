use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{RawMember, RawRepository, RawUserProfile};

/// Branch ref namespace prepended to a default branch name.
pub const BRANCH_PREFIX: &str = "refs/heads/";

/// Repository in the internal SCM schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RepositoryNode {
    #[serde(rename = "repoScmId")]
    pub repo_scm_id: u64,
    pub name: String,
    pub url: String,
    pub visibility: RepoVisibility,
    #[serde(rename = "defaultLanguage")]
    pub default_language: String,
    #[serde(rename = "defaultBranch")]
    pub default_branch: DefaultBranch,
    #[serde(rename = "updatedOn")]
    pub updated_on: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultBranch {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RepoVisibility {
    Public,
    Private,
    Fork,
}

impl RepoVisibility {
    /// Private wins over fork; a public non-fork is plain public.
    pub fn from_flags(private: bool, fork: bool) -> Self {
        if private {
            RepoVisibility::Private
        } else if fork {
            RepoVisibility::Fork
        } else {
            RepoVisibility::Public
        }
    }
}

impl RepositoryNode {
    /// Normalizes a raw GitHub repository record. A missing language
    /// becomes an empty string; a missing default branch leaves both the
    /// branch name and its ref prefix empty.
    pub fn from_raw(raw: RawRepository) -> Self {
        let default_branch = match raw.default_branch {
            Some(name) => DefaultBranch {
                name,
                prefix: BRANCH_PREFIX.to_string(),
            },
            None => DefaultBranch {
                name: String::new(),
                prefix: String::new(),
            },
        };

        Self {
            repo_scm_id: raw.id,
            name: raw.name,
            url: raw.html_url,
            visibility: RepoVisibility::from_flags(raw.private, raw.fork),
            default_language: raw.language.unwrap_or_default(),
            default_branch,
            updated_on: raw.updated_at,
        }
    }
}

/// Accumulator for one repository pagination session. `total_count`
/// always holds the figure reported by the most recently fetched page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryList {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    pub repositories: Vec<RepositoryNode>,
}

/// Organization member in the internal schema, enriched with the
/// profile fields the member listing does not carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserNode {
    pub slug: String,
    pub id: u64,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    #[serde(rename = "accountType")]
    pub account_type: String,
    #[serde(rename = "profileUrl")]
    pub profile_url: String,
    pub email: Option<String>,
    pub name: Option<String>,
    /// False when the account is already integrated on our side.
    pub visibility: bool,
}

impl UserNode {
    pub fn from_member(member: RawMember, profile: RawUserProfile, visibility: bool) -> Self {
        Self {
            slug: member.login,
            id: member.id,
            avatar_url: member.avatar_url,
            account_type: member.account_type,
            profile_url: member.html_url,
            email: profile.email,
            name: profile.name,
            visibility,
        }
    }
}

/// Result of one member enumeration. `estimated_total` is only known
/// when the cursor strategy saw a `Link` header with a last page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberList {
    #[serde(rename = "estimatedTotal")]
    pub estimated_total: Option<u32>,
    pub users: Vec<UserNode>,
}

/// Caller-owned state for one repository fetch. Consumed by the pager;
/// a session cannot be reused once it has run.
#[derive(Debug, Clone)]
pub struct RepoPayload {
    pub access_token: String,
    pub installation_id: u64,
    pub page: u32,
    pub repositories: RepositoryList,
    /// Repository names already integrated, skipped during mapping.
    pub integrated_repositories: HashSet<String>,
}

impl RepoPayload {
    pub fn new(access_token: impl Into<String>, installation_id: u64) -> Self {
        Self {
            access_token: access_token.into(),
            installation_id,
            page: 1,
            repositories: RepositoryList::default(),
            integrated_repositories: HashSet::new(),
        }
    }
}

/// Caller-owned state for one member enumeration.
#[derive(Debug, Clone)]
pub struct MemberPayload {
    pub access_token: String,
    pub org_slug: String,
    pub page: u32,
    /// Account ids already integrated on our side.
    pub integrated_users: HashSet<u64>,
}

impl MemberPayload {
    pub fn new(access_token: impl Into<String>, org_slug: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            org_slug: org_slug.into(),
            page: 1,
            integrated_users: HashSet::new(),
        }
    }
}

/// Organization in the internal schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub slug: String,
    pub id: u64,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgProfile {
    pub name: String,
    pub avatar: String,
}

/// Shared state the organization lister fills in while paging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgMetadata {
    pub profile: OrgProfile,
    #[serde(rename = "organizationList")]
    pub organization_list: Vec<Organization>,
}
