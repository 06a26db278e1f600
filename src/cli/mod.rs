//! CLI argument parsing

mod common;
mod org;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use crate::config::{credentials, defaults, host};

pub use common::OutputFormat;
pub use org::{
    OrgCommand, OrgCreateArgs, OrgDeleteArgs, OrgIdArgs, OrgImportArgs, OrgLookupArgs,
    OrgUpdateArgs,
};

/// Foreman organization manager
#[derive(Parser, Debug)]
#[command(name = "foremanctl")]
#[command(version)]
#[command(about = "Manage Foreman organizations", long_about = None)]
pub struct Cli {
    /// Foreman server hostname, optionally with a port
    #[arg(short = 'H', long, env = host::ENV_VAR, global = true)]
    pub host: Option<String>,

    /// Server protocol (http or https)
    #[arg(long, env = host::PROTOCOL_ENV_VAR, default_value = defaults::PROTOCOL, global = true)]
    pub protocol: String,

    /// API username
    #[arg(short = 'u', long, env = credentials::USERNAME_ENV_VAR, global = true)]
    pub username: Option<String>,

    /// API password
    #[arg(
        short = 'p',
        long,
        env = credentials::PASSWORD_ENV_VAR,
        hide_env_values = true,
        global = true
    )]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(
        long,
        env = host::INSECURE_ENV_VAR,
        value_parser = BoolishValueParser::new(),
        default_value_t = false,
        global = true
    )]
    pub insecure: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short, long, default_value_t = false, global = true)]
    pub batch: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage organizations
    #[command(visible_alias = "organization")]
    Org {
        #[command(subcommand)]
        command: OrgCommand,
    },

    /// Print provider, resource and data source schemas
    Schema,
}
