//! Debug Helper - reports on its own child nodes.
//!
//! Wrap other helper invocations or variable accessors in the debug helper to
//! see what they accept and what they currently hold:
//!
//! ```text
//! <debug><format.replace substring="a">{post.title}</format.replace></debug>
//! ```

use tracing::{debug, instrument};

use crate::{
    application::services::IntrospectionReporter,
    domain::{
        ArgumentSchema, ChildHelperReference, DomainError, HelperDescriptor, HelperId, RenderNode,
        Scope, VariableAccessorReference,
    },
    error::HelperResult,
};

const CLASS_DOC: &str = "Debugs instances of other helpers and variable accessors.
Wrap helper invocations to inspect their documentation, their declared
arguments and the arguments given at the call site, for example
<debug><format.replace substring=\"a\">{post.title}</format.replace></debug>.
Wrap variable accessors to see the resolved type of each path. Objects are not
dumped; instead their accessible properties are listed with the type each one
currently holds. Paths that cannot be read are reported as UNDEFINED/INACCESSIBLE.";

const RENDER_DOC: &str = "Renders the debug report for all helper invocations
    and variable accessors among the direct children. Text children are ignored.
    The report is wrapped in a preformatted block.";

/// The debug helper.
///
/// The host hands over the direct children through
/// [`set_child_nodes`](Self::set_child_nodes) before calling
/// [`render`](Self::render).
pub struct DebugHelper {
    reporter: IntrospectionReporter,
    child_helpers: Vec<ChildHelperReference>,
    child_variables: Vec<VariableAccessorReference>,
}

impl DebugHelper {
    pub const ID: &'static str = "debug";

    pub fn new(reporter: IntrospectionReporter) -> Self {
        Self {
            reporter,
            child_helpers: Vec::new(),
            child_variables: Vec::new(),
        }
    }

    /// Registration record for the debug helper itself. It takes no arguments.
    pub fn descriptor() -> Result<HelperDescriptor, DomainError> {
        Ok(HelperDescriptor::new(HelperId::parse(Self::ID)?, ArgumentSchema::new())
            .with_class_doc(CLASS_DOC)
            .with_render_doc(RENDER_DOC))
    }

    /// Replace the children with `nodes`, keeping only helper invocations and
    /// variable accessors, each kind in encounter order.
    pub fn set_child_nodes(&mut self, nodes: impl IntoIterator<Item = RenderNode>) {
        self.child_helpers.clear();
        self.child_variables.clear();

        for node in nodes {
            match node {
                RenderNode::HelperInvocation(helper) => self.child_helpers.push(helper),
                RenderNode::VariableAccessor(variable) => self.child_variables.push(variable),
                RenderNode::Text(_) => {}
            }
        }

        debug!(
            helpers = self.child_helpers.len(),
            variables = self.child_variables.len(),
            "Child nodes partitioned"
        );
    }

    pub fn child_helpers(&self) -> &[ChildHelperReference] {
        &self.child_helpers
    }

    pub fn child_variables(&self) -> &[VariableAccessorReference] {
        &self.child_variables
    }

    #[instrument(skip_all)]
    pub fn render(&self, scope: &Scope) -> HelperResult<String> {
        self.reporter
            .render(&self.child_helpers, &self.child_variables, scope)
    }
}
