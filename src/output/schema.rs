//! Schema output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::provider::{ProviderSchema, Schema};

/// Output every provider schema in the specified format
pub fn output_schema(schema: &ProviderSchema, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(schema),
        OutputFormat::Yaml => print_yaml(schema),
        OutputFormat::Table => {
            println!("provider\n{}\n", schema_table(&schema.provider));
            for (name, s) in &schema.resources {
                println!("resource \"{}\"\n{}\n", name, schema_table(s));
            }
            for (name, s) in &schema.data_sources {
                println!("data \"{}\"\n{}\n", name, schema_table(s));
            }
        }
    }
}

fn schema_table(schema: &Schema) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["Attribute", "Type", "Mode", "Description"]);
    for (name, attr) in schema.iter() {
        let mode = if attr.required {
            "required"
        } else if attr.optional {
            "optional"
        } else {
            "computed"
        };
        table.add_row(vec![
            name.clone(),
            attr.attr_type.to_string(),
            mode.to_string(),
            attr.description.clone(),
        ]);
    }
    table
}
