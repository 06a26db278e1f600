//! Organization command definitions and arguments

use clap::{Parser, Subcommand};

/// Operations on Foreman organizations
#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// Create an organization
    Create(OrgCreateArgs),

    /// Read an organization by id
    Get(OrgIdArgs),

    /// Rename an organization
    Update(OrgUpdateArgs),

    /// Delete an organization
    #[command(visible_alias = "rm")]
    Delete(OrgDeleteArgs),

    /// Import an existing organization into local state by numeric id
    Import(OrgImportArgs),

    /// Look up exactly one organization by name
    #[command(visible_alias = "find")]
    Lookup(OrgLookupArgs),
}

/// Arguments for 'org create'
#[derive(Parser, Debug)]
pub struct OrgCreateArgs {
    /// Name of the new organization
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for commands addressing an organization by id
#[derive(Parser, Debug)]
pub struct OrgIdArgs {
    /// Numeric organization id
    pub id: i64,
}

/// Arguments for 'org update'
#[derive(Parser, Debug)]
pub struct OrgUpdateArgs {
    /// Numeric organization id
    pub id: i64,

    /// New organization name
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for 'org delete'
#[derive(Parser, Debug)]
pub struct OrgDeleteArgs {
    /// Numeric organization id
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'org import'
#[derive(Parser, Debug)]
pub struct OrgImportArgs {
    /// Organization id as stored by Foreman
    pub id: String,
}

/// Arguments for 'org lookup'
#[derive(Parser, Debug)]
pub struct OrgLookupArgs {
    /// Exact organization name
    #[arg(short, long)]
    pub name: String,
}
