//! Foreman API client module
//!
//! This module provides functionality to interact with the Foreman REST API.

mod client;
mod credentials;
mod host;
pub mod models;
pub mod organizations;
pub mod traits;

pub use client::{ClientConfig, ForemanClient};
pub use credentials::{CredentialsResolver, Login};
pub use host::HostResolver;
pub use models::ForemanObject;
pub use organizations::{
    name_search_filter, run_org_command, ForemanOrganization, OrganizationsResponse,
};
pub use traits::{ForemanResource, QueryResponse};
