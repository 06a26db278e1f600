//! foremanctl - Main entry point

use clap::Parser;
use log::{debug, info};

use foremanctl::{
    output_schema, provider_schema, run_org_command, Cli, ClientConfig, Command,
    CredentialsResolver, ForemanClient, HostResolver, ProviderContext,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting foremanctl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Schema => output_schema(&provider_schema(), cli.output),
        Command::Org { command } => {
            let ctx = connect(cli)?;
            run_org_command(&ctx, cli, command).await?;
        }
    }

    info!("Completed successfully");
    Ok(())
}

/// Resolve connection settings and build the provider context
fn connect(cli: &Cli) -> Result<ProviderContext, Box<dyn std::error::Error>> {
    let host = HostResolver::new().resolve(cli.host.as_deref(), cli.batch)?;
    let login = CredentialsResolver::new(&host)
        .resolve(cli.username.as_deref(), cli.password.as_deref())?;

    debug!(
        "Connecting to {}://{} as {} (insecure={})",
        cli.protocol, host, login.username, cli.insecure
    );

    let client = ForemanClient::new(ClientConfig {
        host,
        protocol: cli.protocol.clone(),
        username: login.username,
        password: login.password,
        insecure: cli.insecure,
    })?;
    Ok(ProviderContext::new(client))
}
