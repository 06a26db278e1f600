//! Organization resource and data source

pub mod data_source;
pub mod resource;

pub use data_source::data_source_schema;
pub use resource::{
    build_foreman_organization, resource_schema, set_resource_data_from_foreman_organization,
    RESOURCE_NAME,
};
