use anyhow::Context;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use github_scm_connector::cli::{Cli, Command};
use github_scm_connector::github::GitHubClient;
use github_scm_connector::models::{MemberPayload, RepoPayload};
use github_scm_connector::{members, repos};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.github_config();
    let client = GitHubClient::new(config).context("failed to build HTTP client")?;

    println!("{}", "GitHub SCM Connector".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    match &cli.command {
        Command::Installations => {
            let page = client.user_installations(&cli.token).await?;

            println!("📦 {} installations", page.total_count.to_string().bold());
            for installation in &page.installations {
                println!(
                    "  {} {} ({})",
                    installation.id.to_string().dimmed(),
                    installation.account.login.cyan(),
                    installation.account.account_type
                );
            }
        }
        Command::Repos {
            installation_id,
            integrated,
        } => {
            let mut payload = RepoPayload::new(cli.token.clone(), *installation_id);
            payload.integrated_repositories = integrated.iter().cloned().collect();

            let list = repos::fetch_installation_repositories(&client, payload).await?;

            println!(
                "📦 {} of {} repositories new",
                list.repositories.len().to_string().bold(),
                list.total_count
            );
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Command::Members {
            org, integrated, ..
        } => {
            let mut payload = MemberPayload::new(cli.token.clone(), org.clone());
            payload.integrated_users = integrated.iter().copied().collect();

            let list = members::fetch_org_members(&client, payload).await?;

            match list.estimated_total {
                Some(total) => println!(
                    "👥 {} members collected (~{} estimated)",
                    list.users.len().to_string().bold(),
                    total
                ),
                None => println!("👥 {} members collected", list.users.len().to_string().bold()),
            }
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        Command::Membership { org } => match client.org_membership(&cli.token, org).await {
            Ok(membership) => {
                println!(
                    "✅ membership in {}: {} ({})",
                    membership.organization.login.cyan(),
                    membership.state,
                    membership.role
                );
            }
            Err(err) if err.is_not_found() => {
                println!("{}", format!("No membership found for {}", org).yellow());
            }
            Err(err) => return Err(err).context("membership lookup failed"),
        },
    }

    Ok(())
}
