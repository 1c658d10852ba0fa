use crate::config::GitHubConfig;
use crate::error::{ConnectorError, Result};
use crate::pagination::{parse_link_header, PageLinks};
use crate::types::{InstallationsPage, OrgMembership, RawMember, RawUserProfile, RepositoryPage};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info};

/// Thin authenticated wrapper over the GitHub REST API. Credentials are
/// supplied per call; the client itself only owns the HTTP machinery and
/// the connector configuration.
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, config })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Issues one authenticated GET and maps non-success statuses to
    /// errors. 404 becomes `NotFound`, everything else non-success
    /// becomes `Api` with the response body as message.
    async fn get(&self, token: &str, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("token {}", token))
            .header("User-Agent", &self.config.user_agent)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::NOT_FOUND => {
                Err(ConnectorError::NotFound(format!("Resource not found: {}", url)))
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ConnectorError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// App installations visible to the authenticated user.
    pub async fn user_installations(&self, token: &str) -> Result<InstallationsPage> {
        let url = format!("{}/user/installations", self.config.api_url);
        debug!(operation = "installations", %url, "fetching user installations");

        let response = self.get(token, &url).await?;
        let page: InstallationsPage = response.json().await?;
        Ok(page)
    }

    /// One page of repositories accessible through an installation.
    pub async fn installation_repositories_page(
        &self,
        token: &str,
        installation_id: u64,
        page: u32,
    ) -> Result<RepositoryPage> {
        let url = format!(
            "{}/user/installations/{}/repositories?per_page={}&page={}",
            self.config.api_url, installation_id, self.config.page_size, page
        );
        debug!(operation = "installation_repos", installation_id, page, "fetching repository page");

        let response = self.get(token, &url).await?;
        let body: RepositoryPage = response.json().await?;
        Ok(body)
    }

    /// Whole member listing of an organization, unpaginated.
    pub async fn org_members(&self, token: &str, org_slug: &str) -> Result<Vec<RawMember>> {
        let url = format!("{}/orgs/{}/members", self.config.api_url, org_slug);
        debug!(operation = "organisation_members", org = org_slug, "fetching members");

        let response = self.get(token, &url).await?;
        let members: Vec<RawMember> = response.json().await?;
        Ok(members)
    }

    /// One member page plus whatever the `Link` header says about the
    /// pages around it.
    pub async fn org_members_page(
        &self,
        token: &str,
        org_slug: &str,
        page: u32,
    ) -> Result<(Vec<RawMember>, PageLinks)> {
        let url = format!(
            "{}/orgs/{}/members?per_page={}&page={}",
            self.config.api_url, org_slug, self.config.member_page_limit, page
        );
        debug!(operation = "organisation_members", org = org_slug, page, "fetching member page");

        let response = self.get(token, &url).await?;
        let links = response
            .headers()
            .get("link")
            .and_then(|value| value.to_str().ok())
            .map(parse_link_header)
            .unwrap_or_default();

        let members: Vec<RawMember> = response.json().await?;
        Ok((members, links))
    }

    /// Profile details behind a member's own API URL. Member listings
    /// omit email and display name, so every member costs one extra call.
    pub async fn user_details(&self, token: &str, user_url: &str) -> Result<RawUserProfile> {
        debug!(operation = "user_email", url = user_url, "fetching user details");

        let response = self.get(token, user_url).await?;
        let profile: RawUserProfile = response.json().await?;
        Ok(profile)
    }

    /// The authenticated user's membership in one organization. A 404
    /// only means the slug names a personal account, so it is logged as
    /// information; every other failure is logged as an error. The error
    /// propagates either way and the caller decides what it means.
    pub async fn org_membership(&self, token: &str, org_slug: &str) -> Result<OrgMembership> {
        let url = format!("{}/user/memberships/orgs/{}", self.config.api_url, org_slug);
        debug!(operation = "memberships", org = org_slug, "fetching membership");

        match self.get(token, &url).await {
            Ok(response) => {
                let membership: OrgMembership = response.json().await?;
                Ok(membership)
            }
            Err(err) => {
                if err.is_not_found() {
                    info!(org = org_slug, "membership for personal account {} not found", org_slug);
                } else {
                    error!(%url, error = %err, "membership lookup failed");
                }
                Err(err)
            }
        }
    }
}
