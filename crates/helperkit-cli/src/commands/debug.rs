//! `helperkit debug` - render a debug report from a fixture.

use tracing::{debug, instrument};

use helperkit_adapters::{FixtureLoader, InMemoryRegistry, PlainTextDumper};
use helperkit_core::{
    application::{DebugHelper, IntrospectionReporter},
    domain::ReportOptions,
    error::Context,
};

use crate::{
    cli::{DebugArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(fixture = %args.fixture.display()))]
pub fn execute(args: DebugArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fixture = FixtureLoader::new(args.fixture.clone()).load()?;
    debug!(
        variables = fixture.scope.len(),
        nodes = fixture.nodes.len(),
        "Fixture loaded"
    );

    let options = report_options(config.report, args.depth);
    let reporter = IntrospectionReporter::new(
        Box::new(InMemoryRegistry::with_builtin()?),
        Box::new(PlainTextDumper::new()),
    )
    .with_options(options);

    let mut helper = DebugHelper::new(reporter);
    helper.set_child_nodes(fixture.nodes);
    let report = helper.render(&fixture.scope)?;

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "fixture": args.fixture.display().to_string(),
                "report": report,
            });
            let text = serde_json::to_string_pretty(&json).context("failed to serialise report")?;
            output.result(&text)?;
        }
        _ => output.result(&report)?,
    }

    Ok(())
}

/// `--depth` wins over the configured dump depth.
fn report_options(configured: ReportOptions, depth: Option<usize>) -> ReportOptions {
    match depth {
        Some(dump_depth) => ReportOptions {
            dump_depth,
            ..configured
        },
        None => configured,
    }
}
