//! Organization command handlers

use log::debug;

use crate::cli::{Cli, OrgCommand};
use crate::error::Result;
use crate::output::output_organization;
use crate::provider::organization::{data_source, resource};
use crate::provider::{ProviderContext, ResourceData};
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run an `org` subcommand through the resource/data source lifecycle
pub async fn run_org_command(ctx: &ProviderContext, cli: &Cli, command: &OrgCommand) -> Result<()> {
    match command {
        OrgCommand::Create(args) => {
            let mut d = ResourceData::new();
            d.set("name", args.name.as_str());

            let spinner = create_spinner(
                &format!("Creating organization '{}'...", args.name),
                cli.batch,
            );
            let result = resource::create(ctx, &mut d).await;
            finish_spinner(spinner);
            result?;

            output_organization(&d, cli.output);
        }
        OrgCommand::Get(args) => {
            let mut d = ResourceData::with_id(&args.id.to_string());

            let spinner = create_spinner("Fetching organization...", cli.batch);
            let result = resource::read(ctx, &mut d).await;
            finish_spinner(spinner);
            result?;

            output_organization(&d, cli.output);
        }
        OrgCommand::Update(args) => {
            let mut d = ResourceData::with_id(&args.id.to_string());
            d.set("name", args.name.as_str());

            let spinner = create_spinner(
                &format!("Updating organization {}...", args.id),
                cli.batch,
            );
            let result = resource::update(ctx, &mut d).await;
            finish_spinner(spinner);
            result?;

            output_organization(&d, cli.output);
        }
        OrgCommand::Delete(args) => {
            let prompt = format!("Delete organization {}?", args.id);
            if !confirm_action(&prompt, args.yes || cli.batch)? {
                eprintln!("Aborted.");
                return Ok(());
            }

            let mut d = ResourceData::with_id(&args.id.to_string());
            let spinner = create_spinner(
                &format!("Deleting organization {}...", args.id),
                cli.batch,
            );
            let result = resource::delete(ctx, &mut d).await;
            finish_spinner(spinner);
            result?;

            debug!("Organization {} deleted", args.id);
            eprintln!("Deleted organization {}", args.id);
        }
        OrgCommand::Import(args) => {
            let spinner = create_spinner(
                &format!("Importing organization {}...", args.id),
                cli.batch,
            );
            let result = resource::import(ctx, &args.id).await;
            finish_spinner(spinner);

            output_organization(&result?, cli.output);
        }
        OrgCommand::Lookup(args) => {
            let mut d = ResourceData::new();
            d.set("name", args.name.as_str());

            let spinner = create_spinner(
                &format!("Looking up organization '{}'...", args.name),
                cli.batch,
            );
            let result = data_source::read(ctx, &mut d).await;
            finish_spinner(spinner);
            result?;

            output_organization(&d, cli.output);
        }
    }
    Ok(())
}
