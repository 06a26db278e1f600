//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::foreman::traits::ForemanResource;
use crate::foreman::ForemanClient;

use super::models::{ForemanOrganization, OrganizationsResponse};

/// Build an exact-match scoped search on `name`
///
/// The value is double-quoted; embedded quotes and backslashes are
/// backslash-escaped so they cannot terminate the quoted value.
pub fn name_search_filter(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("name=\"{}\"", escaped)
}

impl ForemanClient {
    /// Create an organization; the returned value carries the server-assigned id
    pub async fn create_organization(
        &self,
        org: &ForemanOrganization,
    ) -> Result<ForemanOrganization> {
        let url = self.url(&format!("/{}", api::ORGANIZATIONS));
        let body = serde_json::to_vec(org)?;
        debug!(
            "Creating organization at {}: {}",
            url,
            String::from_utf8_lossy(&body)
        );

        let created: ForemanOrganization = self
            .send_and_parse(
                self.post(&url).body(body),
                &format!("organization '{}'", org.name()),
            )
            .await?;

        debug!("Created organization: {:?}", created);
        Ok(created)
    }

    /// Read the organization with the given id
    pub async fn read_organization(&self, id: i64) -> Result<ForemanOrganization> {
        let url = self.url(&format!("/{}/{}", api::ORGANIZATIONS, id));
        debug!("Reading organization from: {}", url);

        let read: ForemanOrganization = self
            .send_and_parse(self.get(&url), &format!("organization {}", id))
            .await?;

        debug!("Read organization: {:?}", read);
        Ok(read)
    }

    /// Replace the attributes of the organization identified by `org.id()`
    pub async fn update_organization(
        &self,
        org: &ForemanOrganization,
    ) -> Result<ForemanOrganization> {
        let url = self.url(&format!("/{}/{}", api::ORGANIZATIONS, org.id()));
        let body = serde_json::to_vec(org)?;
        debug!(
            "Updating organization at {}: {}",
            url,
            String::from_utf8_lossy(&body)
        );

        let updated: ForemanOrganization = self
            .send_and_parse(
                self.put(&url).body(body),
                &format!("organization {}", org.id()),
            )
            .await?;

        debug!("Updated organization: {:?}", updated);
        Ok(updated)
    }

    /// Delete the organization with the given id
    pub async fn delete_organization(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("/{}/{}", api::ORGANIZATIONS, id));
        debug!("Deleting organization: {}", url);

        self.send_and_discard(self.delete(&url), &format!("organization {}", id))
            .await
    }

    /// Search organizations whose name exactly matches `org.name()`
    pub async fn query_organization(
        &self,
        org: &ForemanOrganization,
    ) -> Result<OrganizationsResponse> {
        let search = name_search_filter(org.name());
        let url = format!(
            "{}?search={}",
            self.url(&format!("/{}", api::ORGANIZATIONS)),
            urlencoding::encode(&search)
        );
        debug!("Querying organizations: {}", url);

        let response: OrganizationsResponse = self
            .send_and_parse(
                self.get(&url),
                &format!("organizations matching {}", search),
            )
            .await?;

        debug!(
            "Query returned subtotal {} with {} results",
            response.subtotal,
            response.results.len()
        );
        Ok(response)
    }
}
