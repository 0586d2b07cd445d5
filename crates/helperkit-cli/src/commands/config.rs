//! `helperkit config` - inspect configuration values.

use helperkit_core::error::Context;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.result(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::Show => {
            let serialised = match output.format() {
                OutputFormat::Json => serde_json::to_string_pretty(&config)
                    .context("failed to serialise config")?,
                _ => {
                    output.header("Current Configuration:")?;
                    toml::to_string_pretty(&config)
                        .with_cli_context(|| "Failed to serialise config")?
                }
            };
            output.result(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_ref());
            output.result(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "report.open_delimiter" => Ok(config.report.open_delimiter.clone()),
        "report.close_delimiter" => Ok(config.report.close_delimiter.clone()),
        "report.dump_depth" => Ok(config.report.dump_depth.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "report.open_delimiter").unwrap(), "<pre>");
        assert_eq!(get_config_value(&cfg, "report.dump_depth").unwrap(), "4");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
