pub mod helper;
pub mod node;
pub mod report;
pub mod schema;
pub mod scope;
pub mod value;

pub use crate::domain::DomainError;
pub use helper::{HelperDescriptor, HelperId};
pub use node::{ChildHelperReference, RenderNode, SuppliedArgument, VariableAccessorReference};
pub use report::{Report, ReportOptions, ReportSection};
pub use schema::{ArgumentDefinition, ArgumentSchema, Arguments};
pub use scope::Scope;
pub use value::{HostObject, PropertyError, UNDEFINED_LABEL, Value};
