use url::Url;

/// Page numbers advertised by a GitHub `Link` response header.
///
/// Headers look like:
/// `<https://api.github.com/orgs/acme/members?per_page=100&page=2>; rel="next", <...&page=7>; rel="last"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next_page: Option<u32>,
    pub last_page: Option<u32>,
}

impl PageLinks {
    /// True when the header announced no further page.
    pub fn is_last(&self) -> bool {
        self.next_page.is_none()
    }
}

/// Parses a `Link` header into the next/last page numbers. Relations
/// other than `next` and `last`, and targets without a `page` query
/// parameter, are ignored.
pub fn parse_link_header(header: &str) -> PageLinks {
    let mut links = PageLinks::default();

    for entry in header.split(',') {
        let mut target = None;
        let mut rel = None;

        for segment in entry.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                target = Some(&segment[1..segment.len() - 1]);
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rel = Some(value.trim_matches('"'));
            }
        }

        let page = target.and_then(page_param);
        match (rel, page) {
            (Some("next"), Some(page)) => links.next_page = Some(page),
            (Some("last"), Some(page)) => links.last_page = Some(page),
            _ => {}
        }
    }

    links
}

/// `page` query parameter of a link target, if it parses as a URL.
fn page_param(target: &str) -> Option<u32> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
