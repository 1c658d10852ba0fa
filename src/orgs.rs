use async_trait::async_trait;
use tracing::info;

use crate::config::GitHubConfig;
use crate::error::Result;
use crate::models::{Organization, OrgMetadata};

/// Decrypts a stored credential into a usable access token.
pub trait TokenCipher: Send + Sync {
    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}

/// Pages through the organizations a token can see, appending them to
/// the shared metadata as it goes.
#[async_trait]
pub trait OrganizationLister: Send + Sync {
    async fn list_organizations(
        &self,
        metadata: &mut OrgMetadata,
        access_token: &str,
        limit: u32,
    ) -> Result<()>;
}

/// Lists the organizations behind a stored credential. Decrypts the
/// token, hands an empty metadata shell to the lister, and returns the
/// list the lister accumulated. All paging lives in the lister.
pub async fn fetch_organizations(
    cipher: &dyn TokenCipher,
    lister: &dyn OrganizationLister,
    encrypted_token: &str,
    config: &GitHubConfig,
) -> Result<Vec<Organization>> {
    let access_token = cipher.decrypt(encrypted_token)?;

    let mut metadata = OrgMetadata::default();
    lister
        .list_organizations(&mut metadata, &access_token, config.page_size)
        .await?;

    info!(
        count = metadata.organization_list.len(),
        "organization listing complete"
    );
    Ok(metadata.organization_list)
}
