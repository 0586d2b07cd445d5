//! References into the host's render tree.
//!
//! The host owns the parsed template. When it renders a helper that wants to
//! look at its children (the debug helper does), it hands over the direct
//! child nodes as [`RenderNode`] values, tagged by kind.

use indexmap::IndexMap;

use crate::domain::entities::{helper::HelperId, value::Value};

/// An argument as written at a call site.
#[derive(Debug, Clone, PartialEq)]
pub enum SuppliedArgument {
    /// A literal value.
    Value(Value),
    /// An unevaluated accessor expression, kept as source text (`{post.title}`).
    Expression(String),
}

impl SuppliedArgument {
    /// The value shown for this argument in a structured dump.
    pub fn to_dump_value(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Expression(source) => Value::String(source.clone()),
        }
    }
}

/// A child node that invokes another helper.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildHelperReference {
    helper: HelperId,
    arguments: IndexMap<String, SuppliedArgument>,
}

impl ChildHelperReference {
    pub fn new(helper: HelperId) -> Self {
        Self {
            helper,
            arguments: IndexMap::new(),
        }
    }

    /// Add a literal argument.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments
            .insert(name.into(), SuppliedArgument::Value(value.into()));
        self
    }

    /// Add an argument given as an accessor expression.
    pub fn with_expression(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.arguments
            .insert(name.into(), SuppliedArgument::Expression(source.into()));
        self
    }

    /// Add an argument of either kind.
    pub fn with_supplied(mut self, name: impl Into<String>, argument: SuppliedArgument) -> Self {
        self.arguments.insert(name.into(), argument);
        self
    }

    pub fn helper(&self) -> &HelperId {
        &self.helper
    }

    /// Arguments in call-site order.
    pub fn arguments(&self) -> &IndexMap<String, SuppliedArgument> {
        &self.arguments
    }
}

/// A child node that reads a dotted path from the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAccessorReference {
    path: String,
}

impl VariableAccessorReference {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }
}

/// A direct child node, as handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Literal template text.
    Text(String),
    HelperInvocation(ChildHelperReference),
    VariableAccessor(VariableAccessorReference),
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn helper(reference: ChildHelperReference) -> Self {
        Self::HelperInvocation(reference)
    }

    pub fn variable(path: impl Into<String>) -> Self {
        Self::VariableAccessor(VariableAccessorReference::new(path))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::HelperInvocation(_) => "helper",
            Self::VariableAccessor(_) => "variable",
        }
    }
}
