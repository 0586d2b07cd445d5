//! `helperkit helpers` - list registered helpers.

use helperkit_adapters::InMemoryRegistry;
use helperkit_core::{
    application::{ArgumentInfo, HelperInfo, HelperService},
    error::Context,
};

use crate::{
    cli::{HelpersArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: HelpersArgs, output: OutputManager) -> CliResult<()> {
    let service = HelperService::new(Box::new(InMemoryRegistry::with_builtin()?));
    let helpers = service.list_info()?;

    match args.format {
        ListFormat::Table => {
            output.header("Registered Helpers:")?;
            for helper in &helpers {
                output.result(&format!("  {}  {}", helper.id, output.dim(&helper.summary)))?;
                for argument in &helper.arguments {
                    output.result(&format!(
                        "      {}  {}",
                        argument_line(argument),
                        output.dim(&argument.description)
                    ))?;
                }
            }
        }

        ListFormat::List => {
            for helper in &helpers {
                output.result(&helper.id)?;
            }
        }

        // JSON goes through `result` so it stays parseable under --quiet.
        ListFormat::Json => {
            output.result(&to_json(&helpers)?)?;
        }
    }

    Ok(())
}

fn argument_line(argument: &ArgumentInfo) -> String {
    let mut line = format!("{} ({})", argument.name, argument.type_tag);
    if argument.required {
        line.push_str(" required");
    }
    if let Some(default) = &argument.default_value {
        line.push_str(&format!(" = {default}"));
    }
    line
}

fn to_json(helpers: &[HelperInfo]) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(helpers).context("failed to serialise helper list")?)
}
