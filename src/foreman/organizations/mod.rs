//! Organization module

mod api;
mod commands;
mod models;

pub use api::name_search_filter;
pub use commands::run_org_command;
pub use models::{ForemanOrganization, OrganizationsResponse};
