//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = resolve_format(
            args.output_format,
            &config.output.format,
            io::stdout().is_terminal(),
        );

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// The command's result. Written even in quiet mode.
    pub fn result(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed secondary text, unstyled without colour.
    pub fn dim(&self, text: &str) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Resolve `Auto`: the configured format first, then terminal detection.
fn resolve_format(flag: OutputFormat, configured: &str, is_terminal: bool) -> OutputFormat {
    let chosen = match flag {
        OutputFormat::Auto => OutputFormat::from_str(configured, true).unwrap_or_default(),
        other => other,
    };

    match chosen {
        OutputFormat::Auto if is_terminal => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print_but_not_result() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
        assert!(out.result("report").is_ok());
    }

    #[test]
    fn colour_only_for_human_output() {
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
        assert!(make_manager(false, false, OutputFormat::Json).no_color);
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_format(OutputFormat::Json, "human", true), OutputFormat::Json);
    }

    #[test]
    fn auto_uses_configured_format() {
        assert_eq!(resolve_format(OutputFormat::Auto, "json", false), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Auto, "PLAIN", true), OutputFormat::Plain);
    }

    #[test]
    fn auto_falls_back_to_terminal_detection() {
        assert_eq!(resolve_format(OutputFormat::Auto, "auto", true), OutputFormat::Human);
        assert_eq!(resolve_format(OutputFormat::Auto, "bogus", false), OutputFormat::Plain);
    }

    #[test]
    fn dim_is_plain_without_colour() {
        let out = make_manager(false, true, OutputFormat::Plain);
        assert_eq!(out.dim("note"), "note");
    }
}
