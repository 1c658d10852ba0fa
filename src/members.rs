use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::MemberPagination;
use crate::error::{ConnectorError, Result};
use crate::github::GitHubClient;
use crate::models::{MemberList, MemberPayload, UserNode};
use crate::types::RawMember;

/// A member plus the visibility flag the strategy decided for it.
pub struct MemberEntry {
    pub member: RawMember,
    pub visibility: bool,
}

/// One batch of members handed back by a page source.
pub struct MemberPage {
    pub entries: Vec<MemberEntry>,
    /// Size estimate for the whole listing, when the source has one.
    pub estimated_total: Option<u32>,
}

/// Supplies successive member batches. The enumerator never learns which
/// pagination style produced them; how integrated accounts are treated
/// (dropped or flagged) is the source's decision too.
#[async_trait]
pub trait MemberPageSource: Send {
    /// Next batch, or `None` once the listing is exhausted.
    async fn next_page(&mut self, client: &GitHubClient) -> Result<Option<MemberPage>>;
}

/// Single unpaginated members call. Integrated accounts are dropped
/// outright and every emitted entry is visible.
pub struct WholeListSource {
    payload: MemberPayload,
    done: bool,
}

impl WholeListSource {
    pub fn new(payload: MemberPayload) -> Self {
        Self { payload, done: false }
    }
}

#[async_trait]
impl MemberPageSource for WholeListSource {
    async fn next_page(&mut self, client: &GitHubClient) -> Result<Option<MemberPage>> {
        if self.done {
            return Ok(None);
        }
        self.done = true;

        let members = client
            .org_members(&self.payload.access_token, &self.payload.org_slug)
            .await?;

        let mut entries = Vec::with_capacity(members.len());
        for member in members {
            if self.payload.integrated_users.contains(&member.id) {
                debug!(slug = %member.login, "skipping already integrated member");
                continue;
            }
            entries.push(MemberEntry {
                member,
                visibility: true,
            });
        }

        Ok(Some(MemberPage {
            entries,
            estimated_total: None,
        }))
    }
}

/// Fixed-size pages driven by the `Link` response header. Every member
/// is emitted; integrated ones come through with `visibility` false. The
/// first non-empty page fixes the total estimate
/// (`member_page_limit × last page`); a missing header makes the current
/// page the last one.
pub struct LinkCursorSource {
    payload: MemberPayload,
    page: u32,
    pages_fetched: u32,
    estimated_total: Option<u32>,
    exhausted: bool,
}

impl LinkCursorSource {
    pub fn new(payload: MemberPayload) -> Self {
        let page = payload.page;
        Self {
            payload,
            page,
            pages_fetched: 0,
            estimated_total: None,
            exhausted: false,
        }
    }
}

#[async_trait]
impl MemberPageSource for LinkCursorSource {
    async fn next_page(&mut self, client: &GitHubClient) -> Result<Option<MemberPage>> {
        if self.exhausted {
            return Ok(None);
        }

        let max_pages = client.config().max_pages;
        if self.pages_fetched >= max_pages {
            return Err(ConnectorError::PaginationLimit {
                operation: "organisation members".to_string(),
                max_pages,
            });
        }

        let (members, links) = client
            .org_members_page(&self.payload.access_token, &self.payload.org_slug, self.page)
            .await?;
        self.pages_fetched += 1;

        if members.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        if self.estimated_total.is_none() {
            let last_page = links.last_page.unwrap_or(self.page);
            self.estimated_total = Some(client.config().member_page_limit * last_page);
        }

        match links.next_page {
            Some(next) => self.page = next,
            None => self.exhausted = true,
        }

        let entries = members
            .into_iter()
            .map(|member| {
                let visibility = !self.payload.integrated_users.contains(&member.id);
                MemberEntry { member, visibility }
            })
            .collect();

        Ok(Some(MemberPage {
            entries,
            estimated_total: self.estimated_total,
        }))
    }
}

/// Enumerates an organization's members with the strategy picked by
/// configuration, enriching each entry with its profile details before
/// it is appended.
///
/// Enrichment is strictly sequential, so at most one detail request is
/// in flight at any time. Any failure mid-batch propagates and the
/// partially collected batch is discarded with it.
pub async fn fetch_org_members(
    client: &GitHubClient,
    payload: MemberPayload,
) -> Result<MemberList> {
    let token = payload.access_token.clone();
    let org_slug = payload.org_slug.clone();

    let mut source: Box<dyn MemberPageSource> = match client.config().member_pagination {
        MemberPagination::WholeList => Box::new(WholeListSource::new(payload)),
        MemberPagination::LinkCursor => Box::new(LinkCursorSource::new(payload)),
    };

    let mut pages_pulled = 0u32;
    let mut list = MemberList::default();

    loop {
        let page = match source.next_page(client).await? {
            Some(page) => page,
            None => break,
        };
        pages_pulled += 1;

        if list.estimated_total.is_none() {
            list.estimated_total = page.estimated_total;
        }

        let fetched = page.entries.len();
        for entry in page.entries {
            let profile = client.user_details(&token, &entry.member.url).await?;
            list.users
                .push(UserNode::from_member(entry.member, profile, entry.visibility));
        }

        info!(
            org = %org_slug,
            page = pages_pulled,
            fetched,
            collected = list.users.len(),
            "enriched member page"
        );
    }

    Ok(list)
}
