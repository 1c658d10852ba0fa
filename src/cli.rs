use clap::{Parser, Subcommand};

use crate::config::{GitHubConfig, MemberPagination};

#[derive(Parser)]
#[command(name = "github-scm-connector")]
#[command(about = "Fetches GitHub org, repository, and user data into the internal SCM schema")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Page size for repository and organization listings
    #[arg(long, default_value_t = 100)]
    pub page_size: u32,

    /// Page size for cursor-based member enumeration
    #[arg(long, default_value_t = 100)]
    pub member_page_limit: u32,

    /// Upper bound on pages fetched in one pagination session
    #[arg(long, default_value_t = 1000)]
    pub max_pages: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List app installations visible to the token
    Installations,
    /// Fetch and normalize every repository of an installation
    Repos {
        /// Installation id to enumerate
        installation_id: u64,

        /// Repository names already integrated, skipped during mapping
        #[arg(long = "integrated", value_delimiter = ',')]
        integrated: Vec<String>,
    },
    /// Enumerate an organization's members with profile enrichment
    Members {
        /// Organization slug
        org: String,

        /// Account ids already integrated on our side
        #[arg(long = "integrated", value_delimiter = ',')]
        integrated: Vec<u64>,

        /// Fetch the whole list in one call instead of cursor pages
        #[arg(long)]
        whole_list: bool,
    },
    /// Look up the token owner's membership in an organization
    Membership {
        /// Organization slug
        org: String,
    },
}

impl Cli {
    pub fn github_config(&self) -> GitHubConfig {
        let member_pagination = match self.command {
            Command::Members { whole_list: true, .. } => MemberPagination::WholeList,
            _ => MemberPagination::LinkCursor,
        };

        GitHubConfig {
            api_url: self.api_url.trim_end_matches('/').to_string(),
            page_size: self.page_size,
            member_page_limit: self.member_page_limit,
            max_pages: self.max_pages,
            member_pagination,
            ..GitHubConfig::default()
        }
    }
}
