//! Organization state output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{cell, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::provider::ResourceData;

/// Output the state of one organization in the specified format
pub fn output_organization(d: &ResourceData, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", organization_table(d)),
        OutputFormat::Json => print_json(&d.to_state_json()),
        OutputFormat::Yaml => print_yaml(&d.to_state_json()),
    }
}

fn organization_table(d: &ResourceData) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["ID", "Name"]);
    table.add_row(vec![d.id().to_string(), cell(d.get("name"))]);
    table
}
