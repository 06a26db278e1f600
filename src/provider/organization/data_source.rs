//! `foreman_organization` data source: exact lookup by name

use log::{debug, trace};

use crate::error::{ForemanError, Result};
use crate::provider::schema::{Attribute, AttributeType, Schema, META_EXAMPLE};
use crate::provider::{ProviderContext, ResourceData};

use super::resource::{
    build_foreman_organization, resource_schema, set_resource_data_from_foreman_organization,
    RESOURCE_NAME,
};

/// Schema of the organization data source
///
/// Mirrors the resource schema as computed attributes, with `name` as the
/// required search key.
pub fn data_source_schema() -> Schema {
    let mut schema = Schema::data_source_from_resource(&resource_schema());
    schema.set(
        "name",
        Attribute::required(AttributeType::String).with_description(format!(
            "The name of the organization to look up. {} \"production\"",
            META_EXAMPLE
        )),
    );
    schema
}

/// Resolve the organization whose name exactly matches the `name` attribute
///
/// Fails unless the search matches exactly one organization.
pub async fn read(ctx: &ProviderContext, d: &mut ResourceData) -> Result<()> {
    trace!("data.{}#read", RESOURCE_NAME);

    let org = build_foreman_organization(d);
    debug!("ForemanOrganization: {:?}", org);

    let response = ctx.client().query_organization(&org).await?;

    match response.subtotal {
        0 => {
            return Err(ForemanError::DataSource(
                "Data source organization returned no results".to_string(),
            ))
        }
        1 => {}
        _ => {
            return Err(ForemanError::DataSource(
                "Data source organization returned more than 1 result".to_string(),
            ))
        }
    }

    let found = response
        .into_results()
        .into_iter()
        .next()
        .ok_or_else(|| ForemanError::UnexpectedResult {
            expected: "ForemanOrganization".to_string(),
            got: "empty result list".to_string(),
        })?;
    debug!("ForemanOrganization: {:?}", found);

    set_resource_data_from_foreman_organization(d, &found);
    Ok(())
}
