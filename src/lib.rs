//! foremanctl - Manage Foreman organizations
//!
//! A Foreman REST client with a provider-style resource layer for the
//! organization resource, plus a CLI that drives it.
//!
//! # Features
//!
//! - Create, read, update, delete and import organizations
//! - Exact-match lookup by name (data source semantics)
//! - Resource and data source schemas
//! - Multiple output formats (table, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Create an organization
//! foremanctl -H foreman.example.com org create --name production
//!
//! # Read it back by id
//! foremanctl org get 7 -o json
//!
//! # Resolve exactly one organization by name
//! foremanctl org lookup --name production
//!
//! # Print the resource and data source schemas
//! foremanctl schema -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod foreman;
pub mod output;
pub mod provider;
pub mod ui;

pub use cli::{Cli, Command, OrgCommand, OutputFormat};
pub use error::{ForemanError, Result};
pub use foreman::{
    run_org_command, ClientConfig, CredentialsResolver, ForemanClient, ForemanObject,
    ForemanOrganization, ForemanResource, HostResolver, QueryResponse,
};
pub use output::{output_organization, output_schema};
pub use provider::{provider_schema, ProviderContext, ResourceData};
