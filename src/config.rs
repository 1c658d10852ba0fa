/// How organization members are enumerated.
///
/// `WholeList` issues a single unpaginated members call and drops
/// already-integrated accounts. `LinkCursor` walks fixed-size pages and
/// keeps every account, flagging integrated ones instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberPagination {
    WholeList,
    LinkCursor,
}

/// Connector-wide settings. An alternate `api_url` points the client at
/// a GitHub Enterprise host.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub api_url: String,
    /// Page size for repository and organization listing calls.
    pub page_size: u32,
    /// Page size for the cursor-based member enumeration.
    pub member_page_limit: u32,
    /// Upper bound on pages fetched in one pagination session.
    pub max_pages: u32,
    /// Value sent in the User-Agent header on every request.
    pub user_agent: String,
    pub member_pagination: MemberPagination,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            page_size: 100,
            member_page_limit: 100,
            max_pages: 1000,
            user_agent: "github-scm-connector/0.1.0".to_string(),
            member_pagination: MemberPagination::LinkCursor,
        }
    }
}
