//! Output formatters for command results

mod common;
mod organizations;
mod schema;

pub use common::{print_json, print_yaml};
pub use organizations::output_organization;
pub use schema::output_schema;
