use std::sync::Mutex;

use async_trait::async_trait;
use github_scm_connector::config::GitHubConfig;
use github_scm_connector::error::{ConnectorError, Result};
use github_scm_connector::models::{Organization, OrgMetadata, OrgProfile};
use github_scm_connector::orgs::{fetch_organizations, OrganizationLister, TokenCipher};

/// Decrypts by reversing the ciphertext, enough to prove the decrypted
/// token is what reaches the lister.
struct ReversingCipher;

impl TokenCipher for ReversingCipher {
    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(ciphertext.chars().rev().collect())
    }
}

struct FailingCipher;

impl TokenCipher for FailingCipher {
    fn decrypt(&self, _ciphertext: &str) -> Result<String> {
        Err(ConnectorError::Decrypt("bad key".to_string()))
    }
}

#[derive(Default)]
struct RecordingLister {
    calls: Mutex<Vec<(String, u32)>>,
}

#[async_trait]
impl OrganizationLister for RecordingLister {
    async fn list_organizations(
        &self,
        metadata: &mut OrgMetadata,
        access_token: &str,
        limit: u32,
    ) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((access_token.to_string(), limit));

        metadata.profile = OrgProfile {
            name: "acme".to_string(),
            avatar: "https://a.test/acme.png".to_string(),
        };
        metadata.organization_list.push(Organization {
            slug: "acme".to_string(),
            id: 7,
            avatar_url: "https://a.test/acme.png".to_string(),
            description: Some("tooling".to_string()),
        });
        metadata.organization_list.push(Organization {
            slug: "globex".to_string(),
            id: 8,
            avatar_url: "https://a.test/globex.png".to_string(),
            description: None,
        });
        Ok(())
    }
}

struct FailingLister;

#[async_trait]
impl OrganizationLister for FailingLister {
    async fn list_organizations(
        &self,
        _metadata: &mut OrgMetadata,
        _access_token: &str,
        _limit: u32,
    ) -> Result<()> {
        Err(ConnectorError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        })
    }
}

#[tokio::test]
async fn test_returns_what_the_lister_accumulated() {
    let lister = RecordingLister::default();
    let mut config = GitHubConfig::default();
    config.page_size = 25;

    let organizations = fetch_organizations(&ReversingCipher, &lister, "nekot-tset", &config)
        .await
        .expect("listing failed");

    let slugs: Vec<&str> = organizations.iter().map(|o| o.slug.as_str()).collect();
    assert_eq!(slugs, vec!["acme", "globex"]);

    let calls = lister.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "test-token", "lister must see the decrypted token");
    assert_eq!(calls[0].1, 25, "page limit comes from configuration");
}

#[tokio::test]
async fn test_decrypt_failure_short_circuits() {
    let lister = RecordingLister::default();
    let config = GitHubConfig::default();

    let err = fetch_organizations(&FailingCipher, &lister, "whatever", &config)
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Decrypt(_)));
    assert!(lister.calls.lock().unwrap().is_empty(), "lister must not run");
}

#[tokio::test]
async fn test_lister_failure_propagates() {
    let config = GitHubConfig::default();

    let err = fetch_organizations(&ReversingCipher, &FailingLister, "nekot", &config)
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Api { status: 502, .. }));
}
