//! `helperkit replace` - run the `format.replace` helper.

use std::io::Read;

use tracing::instrument;

use helperkit_core::{
    application::ReplaceHelper,
    domain::{Arguments, Value},
    error::{Context, HelperError},
};

use crate::{
    cli::{OutputFormat, ReplaceArgs},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ReplaceArgs, output: OutputManager) -> CliResult<()> {
    let helper = ReplaceHelper::new().map_err(HelperError::from)?;

    // Stdin plays the part of the helper's rendered children.
    let children = match args.content {
        Some(_) => String::new(),
        None => read_stdin()?,
    };
    let supplied = build_arguments(&args);

    let result = helper.render(&supplied, move || children)?;

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::json!({ "result": result });
            let text = serde_json::to_string_pretty(&json).context("failed to serialise result")?;
            output.result(&text)?;
        }
        _ => output.result(&result)?,
    }

    Ok(())
}

/// Map the flags onto the helper's call-site arguments.
fn build_arguments(args: &ReplaceArgs) -> Arguments {
    let mut supplied = Arguments::new();
    if let Some(content) = &args.content {
        supplied.insert("content".into(), Value::from(content.as_str()));
    }
    supplied.insert("substring".into(), Value::from(args.substring.as_str()));
    supplied.insert("replacement".into(), Value::from(args.replacement.as_str()));
    if let Some(count) = args.count {
        supplied.insert("count".into(), Value::from(count));
    }
    if args.ignore_case {
        supplied.insert("caseSensitive".into(), Value::from(false));
    }
    supplied
}

/// Read stdin, dropping one trailing line ending.
fn read_stdin() -> CliResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .with_cli_context(|| "failed to read content from stdin")?;
    Ok(strip_line_ending(buffer))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(content: Option<&str>, count: Option<i64>, ignore_case: bool) -> ReplaceArgs {
        ReplaceArgs {
            content: content.map(str::to_string),
            substring: "a".into(),
            replacement: "X".into(),
            count,
            ignore_case,
        }
    }

    #[test]
    fn flags_map_to_helper_arguments() {
        let supplied = build_arguments(&args(Some("aAbBaA"), Some(2), true));
        let names: Vec<_> = supplied.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["content", "substring", "replacement", "count", "caseSensitive"]
        );
        assert_eq!(supplied.get("count"), Some(&Value::from(2i64)));
        assert_eq!(supplied.get("caseSensitive"), Some(&Value::from(false)));
    }

    #[test]
    fn omitted_flags_leave_defaults_to_the_schema() {
        let supplied = build_arguments(&args(None, None, false));
        assert!(!supplied.contains_key("content"));
        assert!(!supplied.contains_key("count"));
        assert!(!supplied.contains_key("caseSensitive"));
    }

    #[test]
    fn helper_renders_mapped_arguments() {
        let helper = ReplaceHelper::new().unwrap();
        let supplied = build_arguments(&args(Some("aAbBaA"), None, true));
        assert_eq!(helper.render(&supplied, String::new).unwrap(), "XXbBXX");
    }

    #[test]
    fn single_trailing_line_ending_is_dropped() {
        assert_eq!(strip_line_ending("aaa\n".into()), "aaa");
        assert_eq!(strip_line_ending("aaa\r\n".into()), "aaa");
        assert_eq!(strip_line_ending("aaa\n\n".into()), "aaa\n");
        assert_eq!(strip_line_ending("aaa".into()), "aaa");
    }
}
