use anyhow::bail;
use mtx_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

#[derive(Debug, Serialize)]
struct SchemaList {
    schemas: Vec<&'static str>,
}

/// Handle `mtx schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let name = match (&args.name, args.list) {
        (Some(name), false) => name,
        _ => {
            let list = SchemaList {
                schemas: registry.list(),
            };
            if flags.format == OutputFormat::Table {
                let rows = list
                    .schemas
                    .iter()
                    .map(|name| vec![(*name).to_string()])
                    .collect::<Vec<_>>();
                println!("{}", output::table(&["schema"], &rows));
                return Ok(());
            }
            return output::output(&list, flags.format);
        }
    };

    let Some(schema) = registry.get(name) else {
        bail!(
            "unknown schema `{name}`; available: {}",
            registry.list().join(", ")
        );
    };
    // A schema is a JSON document whatever the requested format.
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output::output(schema, format)
}
