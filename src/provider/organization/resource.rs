//! `foreman_organization` resource: schema, conversion helpers and lifecycle

use log::{debug, trace};

use crate::error::{ForemanError, Result};
use crate::foreman::{ForemanOrganization, ForemanResource};
use crate::provider::schema::{
    Attribute, AttributeType, Schema, META_ATTRIBUTE, META_EXAMPLE, META_SUMMARY,
};
use crate::provider::{ProviderContext, ResourceData};

/// Resource type name
pub const RESOURCE_NAME: &str = "foreman_organization";

/// Schema of the organization resource
pub fn resource_schema() -> Schema {
    Schema::new()
        .with_attribute(
            META_ATTRIBUTE,
            Attribute::computed(AttributeType::Bool).with_description(format!(
                "{} A named organization grouping hosts and settings in Foreman.",
                META_SUMMARY
            )),
        )
        .with_attribute(
            "name",
            Attribute::required(AttributeType::String).with_description(format!(
                "Name of the organization. {} \"production\"",
                META_EXAMPLE
            )),
        )
}

// Conversion helpers

/// Build an organization from resource data
///
/// A missing or non-numeric id becomes 0; a missing name becomes "".
pub fn build_foreman_organization(d: &ResourceData) -> ForemanOrganization {
    trace!("build_foreman_organization");

    let id = d.id().parse::<i64>().unwrap_or(0);
    let name = d.get_str("name").unwrap_or("");
    ForemanOrganization::new(name).with_id(id)
}

/// Copy an organization's attributes into resource data
pub fn set_resource_data_from_foreman_organization(
    d: &mut ResourceData,
    org: &ForemanOrganization,
) {
    trace!("set_resource_data_from_foreman_organization");

    d.set_id(org.id().to_string());
    d.set("name", org.name());
}

// Lifecycle

pub async fn create(ctx: &ProviderContext, d: &mut ResourceData) -> Result<()> {
    trace!("{}#create", RESOURCE_NAME);

    let org = build_foreman_organization(d);
    debug!("ForemanOrganization: {:?}", org);

    let created = ctx.client().create_organization(&org).await?;
    debug!("Created ForemanOrganization: {:?}", created);

    set_resource_data_from_foreman_organization(d, &created);
    Ok(())
}

pub async fn read(ctx: &ProviderContext, d: &mut ResourceData) -> Result<()> {
    trace!("{}#read", RESOURCE_NAME);

    let org = build_foreman_organization(d);
    debug!("ForemanOrganization: {:?}", org);

    let read = ctx.client().read_organization(org.id()).await?;
    debug!("Read ForemanOrganization: {:?}", read);

    set_resource_data_from_foreman_organization(d, &read);
    Ok(())
}

pub async fn update(ctx: &ProviderContext, d: &mut ResourceData) -> Result<()> {
    trace!("{}#update", RESOURCE_NAME);

    let org = build_foreman_organization(d);
    debug!("ForemanOrganization: {:?}", org);

    let updated = ctx.client().update_organization(&org).await?;
    debug!("Updated ForemanOrganization: {:?}", updated);

    set_resource_data_from_foreman_organization(d, &updated);
    Ok(())
}

/// Delete the organization and clear the id on success
pub async fn delete(ctx: &ProviderContext, d: &mut ResourceData) -> Result<()> {
    trace!("{}#delete", RESOURCE_NAME);

    let org = build_foreman_organization(d);
    debug!("ForemanOrganization: {:?}", org);

    ctx.client().delete_organization(org.id()).await?;
    d.set_id("");
    Ok(())
}

/// Import an existing organization by its numeric id
pub async fn import(ctx: &ProviderContext, id: &str) -> Result<ResourceData> {
    trace!("{}#import", RESOURCE_NAME);

    let id = id.trim();
    if id.parse::<i64>().is_err() {
        return Err(ForemanError::InvalidId(id.to_string()));
    }

    let mut d = ResourceData::with_id(id);
    read(ctx, &mut d).await?;
    Ok(d)
}
