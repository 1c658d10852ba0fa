use serde::Deserialize;

// GitHub API response structures

/// One page of `GET /user/installations/{id}/repositories`.
///
/// `total_count` reports the size of the whole result set, not of this
/// page; GitHub repeats it on every page.
#[derive(Debug, Deserialize)]
pub struct RepositoryPage {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub repositories: Vec<RawRepository>,
}

#[derive(Debug, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    pub language: Option<String>,
    pub default_branch: Option<String>,
    #[serde(default)]
    pub updated_at: String,
}

/// Entry of an `/orgs/{slug}/members` listing. `url` is the absolute
/// API URL of the account, used for the per-member detail lookup.
#[derive(Debug, Deserialize)]
pub struct RawMember {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(rename = "type", default)]
    pub account_type: String,
    pub url: String,
}

/// Detail record behind a member's `url`. Only the fields the member
/// listing omits.
#[derive(Debug, Deserialize)]
pub struct RawUserProfile {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Response of `GET /user/installations`.
#[derive(Debug, Deserialize)]
pub struct InstallationsPage {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub installations: Vec<RawInstallation>,
}

#[derive(Debug, Deserialize)]
pub struct RawInstallation {
    pub id: u64,
    pub account: InstallationAccount,
    #[serde(default)]
    pub target_type: String,
}

#[derive(Debug, Deserialize)]
pub struct InstallationAccount {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(rename = "type", default)]
    pub account_type: String,
}

/// Response of `GET /user/memberships/orgs/{slug}`.
#[derive(Debug, Deserialize)]
pub struct OrgMembership {
    pub state: String,
    pub role: String,
    pub organization: RawOrganization,
}

#[derive(Debug, Deserialize)]
pub struct RawOrganization {
    pub login: String,
    pub id: u64,
    #[serde(default)]
    pub avatar_url: String,
    pub description: Option<String>,
}
