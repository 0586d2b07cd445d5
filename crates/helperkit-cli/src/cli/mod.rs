//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "helperkit",
    bin_name = "helperkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Inspect and run template view helpers",
    long_about = "Helperkit drives the debug and replace template helpers without a \
                  template engine: debug reports come from fixture files describing \
                  the scope and the helper's child nodes.",
    after_help = "EXAMPLES:\n\
        \x20 helperkit debug fixtures/post.json\n\
        \x20 helperkit replace 'Hello World' -s world -r there -i\n\
        \x20 helperkit helpers --format json\n\
        \x20 helperkit completions bash > /usr/share/bash-completion/completions/helperkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the debug report for a fixture.
    #[command(
        visible_alias = "d",
        about = "Render a debug report from a fixture",
        after_help = "EXAMPLES:\n\
            \x20 helperkit debug post.json\n\
            \x20 helperkit debug post.toml --depth 2"
    )]
    Debug(DebugArgs),

    /// Replace a substring.
    #[command(
        visible_alias = "r",
        about = "Replace a substring in some content",
        after_help = "EXAMPLES:\n\
            \x20 helperkit replace 'aAbBaA' -s a -r X\n\
            \x20 helperkit replace 'aAbBaA' -s a -r X --ignore-case\n\
            \x20 echo 'aaa' | helperkit replace -s a -r b -n 2"
    )]
    Replace(ReplaceArgs),

    /// List registered helpers.
    #[command(
        visible_alias = "ls",
        about = "List registered helpers and their arguments",
        after_help = "EXAMPLES:\n\
            \x20 helperkit helpers\n\
            \x20 helperkit helpers --format json"
    )]
    Helpers(HelpersArgs),

    /// Initialise a Helperkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 helperkit init          # default location\n\
            \x20 helperkit init --force  # overwrite existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 helperkit completions bash > ~/.local/share/bash-completion/completions/helperkit\n\
            \x20 helperkit completions zsh  > ~/.zfunc/_helperkit"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Helperkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 helperkit config show\n\
            \x20 helperkit config get report.dump_depth\n\
            \x20 helperkit config path"
    )]
    Config(ConfigCommands),
}

// ── debug ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DebugArgs {
    /// Fixture file (`.json` or `.toml`).
    #[arg(value_name = "FIXTURE", help = "Fixture file (.json or .toml)")]
    pub fixture: PathBuf,

    /// Override the configured dump depth.
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "N",
        help = "Nesting depth after which dumps are summarized"
    )]
    pub depth: Option<usize>,
}

// ── replace ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReplaceArgs {
    /// Content to work on. Read from stdin when omitted.
    #[arg(value_name = "CONTENT", help = "Content (read from stdin when omitted)")]
    pub content: Option<String>,

    #[arg(
        short = 's',
        long = "substring",
        value_name = "TEXT",
        help = "Substring to replace"
    )]
    pub substring: String,

    #[arg(
        short = 'r',
        long = "replacement",
        value_name = "TEXT",
        default_value = "",
        help = "Replacement to insert"
    )]
    pub replacement: String,

    /// Maximum number of replacements.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Maximum number of replacements"
    )]
    pub count: Option<i64>,

    #[arg(
        short = 'i',
        long = "ignore-case",
        help = "Match case-insensitively"
    )]
    pub ignore_case: bool,
}

// ── helpers ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HelpersArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `helpers` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Helpers with their argument tables.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Print one configuration value.
    Get {
        /// Dotted key path, e.g. `report.dump_depth`.
        key: String,
    },
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_debug_command() {
        let cli = Cli::parse_from(["helperkit", "debug", "post.json", "--depth", "2"]);
        let Commands::Debug(args) = cli.command else {
            panic!("expected Debug command");
        };
        assert_eq!(args.fixture, PathBuf::from("post.json"));
        assert_eq!(args.depth, Some(2));
    }

    #[test]
    fn parse_replace_command() {
        let cli = Cli::parse_from(["helperkit", "replace", "aaa", "-s", "a", "-n", "-1", "-i"]);
        let Commands::Replace(args) = cli.command else {
            panic!("expected Replace command");
        };
        assert_eq!(args.content.as_deref(), Some("aaa"));
        assert_eq!(args.replacement, "");
        assert_eq!(args.count, Some(-1));
        assert!(args.ignore_case);
    }

    #[test]
    fn replace_requires_substring() {
        assert!(Cli::try_parse_from(["helperkit", "replace", "aaa"]).is_err());
    }

    #[test]
    fn helpers_alias_and_format() {
        let cli = Cli::parse_from(["helperkit", "ls", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Helpers(HelpersArgs {
                format: ListFormat::Json
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["helperkit", "--quiet", "--verbose", "helpers"]);
        assert!(result.is_err());
    }
}
