use tracing::{debug, info};

use crate::error::{ConnectorError, Result};
use crate::github::GitHubClient;
use crate::models::{RepoPayload, RepositoryList, RepositoryNode};
use crate::types::RepositoryPage;

/// Fetches every repository page of an installation and returns the
/// folded accumulator.
///
/// The loop trusts the total reported by the most recent page: it stops
/// once a page comes back empty or the accumulated node count reaches
/// that total. Skipped (already integrated) names never count toward the
/// total, so a heavily deduplicated run terminates on the empty page
/// instead. `max_pages` caps the session in case the API keeps
/// reporting a total the pages never add up to.
pub async fn fetch_installation_repositories(
    client: &GitHubClient,
    mut payload: RepoPayload,
) -> Result<RepositoryList> {
    let max_pages = client.config().max_pages;
    let mut pages_fetched = 0u32;

    loop {
        if pages_fetched >= max_pages {
            return Err(ConnectorError::PaginationLimit {
                operation: "installation repositories".to_string(),
                max_pages,
            });
        }

        let page = client
            .installation_repositories_page(
                &payload.access_token,
                payload.installation_id,
                payload.page,
            )
            .await?;
        pages_fetched += 1;

        let fetched = page.repositories.len();
        let reported_total = page.total_count;
        collect_repository_page(&mut payload, page);

        info!(
            installation_id = payload.installation_id,
            page = payload.page,
            fetched,
            collected = payload.repositories.repositories.len(),
            reported_total,
            "folded repository page"
        );

        if fetched == 0 || payload.repositories.repositories.len() as u32 >= reported_total {
            return Ok(payload.repositories);
        }

        payload.page += 1;
    }
}

/// Folds one page into the payload's accumulator.
///
/// The page's reported total always overwrites the accumulator's, even
/// on later pages. Records whose name is already integrated are dropped;
/// everything else is appended in API order.
pub fn collect_repository_page(payload: &mut RepoPayload, page: RepositoryPage) {
    payload.repositories.total_count = page.total_count;

    if page.total_count == 0 {
        return;
    }

    for repo in page.repositories {
        if payload.integrated_repositories.contains(&repo.name) {
            debug!(name = %repo.name, "skipping already integrated repository");
            continue;
        }
        payload
            .repositories
            .repositories
            .push(RepositoryNode::from_raw(repo));
    }
}
