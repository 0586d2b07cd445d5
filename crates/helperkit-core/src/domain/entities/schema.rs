//! Typed argument contracts for helpers.
//!
//! A helper declares its arguments once, when it is registered, and the
//! resulting [`ArgumentSchema`] never changes afterwards. At render time the
//! schema turns whatever the call site supplied into the full, ordered
//! argument map the helper works with.

use indexmap::IndexMap;
use tracing::trace;

use crate::domain::{entities::value::Value, error::DomainError, value_objects::TypeTag};

/// Ordered argument map, keyed by argument name.
pub type Arguments = IndexMap<String, Value>;

/// One declared argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDefinition {
    name: String,
    declared_type: TypeTag,
    description: String,
    required: bool,
    default_value: Option<Value>,
}

impl ArgumentDefinition {
    /// An optional argument without a default.
    pub fn new(name: impl Into<String>, declared_type: TypeTag, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type,
            description: description.into(),
            required: false,
            default_value: None,
        }
    }

    /// Mark the argument as required. Any default is kept but never consulted.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> TypeTag {
        self.declared_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The definition's publicly readable properties, in a fixed order.
    ///
    /// This is what the debug report prints under `[ARGUMENTS]`.
    pub fn gettable_properties(&self) -> IndexMap<String, Value> {
        let mut properties = IndexMap::with_capacity(5);
        properties.insert("name".to_string(), Value::from(self.name.as_str()));
        properties.insert("type".to_string(), Value::from(self.declared_type.as_str()));
        properties.insert("description".to_string(), Value::from(self.description.as_str()));
        properties.insert("required".to_string(), Value::Boolean(self.required));
        properties.insert(
            "defaultValue".to_string(),
            self.default_value.clone().unwrap_or_default(),
        );
        properties
    }
}

/// Ordered set of argument definitions owned by one helper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentSchema {
    arguments: IndexMap<String, ArgumentDefinition>,
}

impl ArgumentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one argument from loosely typed authoring input.
    ///
    /// # Errors
    /// - `InvalidArgumentName` if the name is empty or contains whitespace or dots
    /// - `InvalidTypeTag` if `type_tag` is not a known tag
    /// - `DuplicateArgument` if the name is already registered
    pub fn register_argument(
        &mut self,
        name: impl Into<String>,
        type_tag: &str,
        description: impl Into<String>,
        required: bool,
        default_value: Option<Value>,
    ) -> Result<&mut Self, DomainError> {
        let name = name.into();
        let declared_type = TypeTag::parse(type_tag, &name)?;

        let mut definition = ArgumentDefinition::new(name, declared_type, description);
        definition.required = required;
        definition.default_value = default_value;

        self.register(definition)?;
        Ok(self)
    }

    /// Register a prebuilt definition.
    pub fn register(&mut self, definition: ArgumentDefinition) -> Result<(), DomainError> {
        validate_name(definition.name())?;

        if self.arguments.contains_key(definition.name()) {
            return Err(DomainError::DuplicateArgument {
                name: definition.name().to_string(),
            });
        }

        trace!(argument = definition.name(), tag = %definition.declared_type(), "argument registered");
        self.arguments.insert(definition.name().to_string(), definition);
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_argument(mut self, definition: ArgumentDefinition) -> Result<Self, DomainError> {
        self.register(definition)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.get(name)
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ArgumentDefinition> {
        self.arguments.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arguments.keys().map(String::as_str)
    }

    /// Complete the supplied values against the schema.
    ///
    /// The result has one entry per declared argument, in declared order.
    /// Missing optional arguments take their default (or null); names the
    /// schema does not declare are dropped.
    pub fn resolve(&self, supplied: &Arguments) -> Result<Arguments, DomainError> {
        let mut resolved = Arguments::with_capacity(self.arguments.len());

        for definition in self.arguments.values() {
            let value = match supplied.get(definition.name()) {
                Some(value) => value.clone(),
                None if definition.required => {
                    return Err(DomainError::MissingRequiredArgument {
                        name: definition.name().to_string(),
                    });
                }
                None => definition.default_value.clone().unwrap_or_default(),
            };
            resolved.insert(definition.name().to_string(), value);
        }

        Ok(resolved)
    }

    /// Check resolved values against the declared types.
    pub fn validate(&self, resolved: &Arguments) -> Result<(), DomainError> {
        for definition in self.arguments.values() {
            let Some(value) = resolved.get(definition.name()) else {
                continue;
            };
            if !definition.declared_type.accepts(value) {
                return Err(DomainError::InvalidArgumentValue {
                    name: definition.name().to_string(),
                    expected: definition.declared_type.to_string(),
                    actual: value.type_label().to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let reason = if name.is_empty() {
        "name cannot be empty"
    } else if name.chars().any(char::is_whitespace) {
        "name cannot contain whitespace"
    } else if name.contains('.') {
        "name cannot contain '.'"
    } else {
        return Ok(());
    };

    Err(DomainError::InvalidArgumentName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
