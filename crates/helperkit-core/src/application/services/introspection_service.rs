//! Introspection Reporter - builds the debug report.
//!
//! Given the helper invocations and variable accessors found among a debug
//! helper's children, the reporter produces one section per helper (its
//! documentation, declared arguments and call-site arguments) followed by a
//! `[VARIABLE ACCESSORS]` block describing each variable path.

use html_escape::encode_double_quoted_attribute;
use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{HelperRegistry, ValueDumper},
    },
    domain::{
        ChildHelperReference, PropertyError, Report, ReportOptions, ReportSection, Scope,
        UNDEFINED_LABEL, Value, VariableAccessorReference,
    },
    error::HelperResult,
};

pub const CLASS_DOC_HEADER: &str = "[CLASS DOC]";
pub const ARGUMENTS_LABEL: &str = "[ARGUMENTS]";
pub const CURRENT_ARGUMENTS_LABEL: &str = "[CURRENT ARGUMENTS]";
pub const RENDER_DOC_HEADER: &str = "[RENDER METHOD DOC]";
pub const VARIABLE_ACCESSORS_HEADER: &str = "[VARIABLE ACCESSORS]";

/// Produces debug reports for helper invocations and variable paths.
pub struct IntrospectionReporter {
    registry: Box<dyn HelperRegistry>,
    dumper: Box<dyn ValueDumper>,
    options: ReportOptions,
}

impl IntrospectionReporter {
    /// Create a reporter with default [`ReportOptions`].
    pub fn new(registry: Box<dyn HelperRegistry>, dumper: Box<dyn ValueDumper>) -> Self {
        Self {
            registry,
            dumper,
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Render the full report, wrapped in the configured delimiters.
    #[instrument(
        skip_all,
        fields(helpers = helpers.len(), variables = variables.len())
    )]
    pub fn render(
        &self,
        helpers: &[ChildHelperReference],
        variables: &[VariableAccessorReference],
        scope: &Scope,
    ) -> HelperResult<String> {
        let report = self.build_report(helpers, variables, scope)?;
        Ok(report.render(&self.options))
    }

    /// Build the report sections without wrapping them.
    pub fn build_report(
        &self,
        helpers: &[ChildHelperReference],
        variables: &[VariableAccessorReference],
        scope: &Scope,
    ) -> HelperResult<Report> {
        let mut report = Report::new();

        for helper in helpers {
            report.push(self.helper_section(helper)?);
        }

        if !variables.is_empty() {
            report.push(ReportSection::from_iter([VARIABLE_ACCESSORS_HEADER]));
            for variable in variables {
                report.push(self.variable_section(variable, scope)?);
            }
        }

        debug!(sections = report.len(), "Report built");
        Ok(report)
    }

    /// Describe one helper invocation.
    pub fn helper_section(&self, reference: &ChildHelperReference) -> HelperResult<ReportSection> {
        let descriptor = self.registry.get(reference.helper())?;
        trace!(helper = %descriptor.id(), "Describing helper");

        let depth = self.options.dump_depth;
        let mut section = ReportSection::new();

        section.push_line(CLASS_DOC_HEADER);
        section.push_block(&encode_double_quoted_attribute(descriptor.class_doc()));
        section.push_blank();

        let declared: Value = descriptor
            .schema()
            .iter()
            .map(|definition| {
                (
                    definition.name().to_string(),
                    Value::Map(definition.gettable_properties()),
                )
            })
            .collect();
        section.push_block(&self.dumper.dump(&declared, ARGUMENTS_LABEL, depth)?);
        section.push_blank();

        let supplied: Value = reference
            .arguments()
            .iter()
            .map(|(name, argument)| (name.clone(), argument.to_dump_value()))
            .collect();
        section.push_block(&self.dumper.dump(&supplied, CURRENT_ARGUMENTS_LABEL, depth)?);
        section.push_blank();

        section.push_line(RENDER_DOC_HEADER);
        let render_doc = encode_double_quoted_attribute(descriptor.render_doc());
        for line in render_doc.lines() {
            section.push_line(line.trim());
        }

        Ok(section)
    }

    /// Describe one variable path.
    pub fn variable_section(
        &self,
        reference: &VariableAccessorReference,
        scope: &Scope,
    ) -> HelperResult<ReportSection> {
        let path = reference.path();
        let (value, type_label) = match resolve_path(reference, scope)? {
            Some(value) => {
                let label = value.type_label();
                (value, label)
            }
            None => (Value::Null, UNDEFINED_LABEL),
        };
        trace!(path, type_label, "Variable resolved");

        let mut section = ReportSection::new();
        section.push_line(format!("Path: {{{path}}}"));
        section.push_line(format!("Value type: {type_label}"));

        match &value {
            Value::Object(object) => {
                section.push_line(format!("Accessible properties on {{{path}}}:"));
                let names = object
                    .gettable_property_names()
                    .map_err(|e| introspection_failure(path, e))?;

                // Index 0 is the host's synthetic entry, not a real property.
                for name in names.iter().skip(1) {
                    let property_path = format!("{path}.{name}");
                    let label = match object.property(name) {
                        Ok(property) => property.type_label(),
                        Err(e) if e.is_not_accessible() => UNDEFINED_LABEL,
                        Err(e) => return Err(introspection_failure(&property_path, e)),
                    };
                    section.push_line(format!("   {{{property_path}}} ({label})"));
                }
            }
            Value::Null => {}
            other => {
                let label = format!("Dump of variable \"{path}\"");
                section.push_block(&self.dumper.dump(other, &label, self.options.dump_depth)?);
            }
        }

        Ok(section)
    }
}

/// Walk a dotted path through the scope.
///
/// Returns `None` when some segment is not accessible. Any other failure
/// propagates.
fn resolve_path(reference: &VariableAccessorReference, scope: &Scope) -> HelperResult<Option<Value>> {
    let path = reference.path();
    let mut segments = reference.segments();

    let first = segments.next().unwrap_or_default();
    let Some(mut value) = recover(scope.lookup(first), path)? else {
        return Ok(None);
    };

    for segment in segments {
        match recover(value.property(segment), path)? {
            Some(next) => value = next,
            None => return Ok(None),
        }
    }

    Ok(Some(value))
}

fn recover(result: Result<Value, PropertyError>, path: &str) -> HelperResult<Option<Value>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_accessible() => {
            trace!(path, error = %e, "Path segment not accessible");
            Ok(None)
        }
        Err(e) => Err(introspection_failure(path, e)),
    }
}

fn introspection_failure(path: &str, error: PropertyError) -> crate::error::HelperError {
    ApplicationError::IntrospectionFailure {
        path: path.to_string(),
        reason: error.to_string(),
    }
    .into()
}
