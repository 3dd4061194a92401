//! Structural traversal of a JSON sample
//!
//! A single recursive descent registers every object sub-tree in the
//! [`ObjectRegistry`] under a name derived from its nearest enclosing key
//! and annotates scalars and arrays with dialect tokens. Emission is a
//! separate pass over the finished registry (see `emit`).

use super::emit;
use super::names::{is_valid_identifier, pascal_case};
use super::types::{Declarations, Dialect, Field, TypeExpr, DEFAULT_ROOT_NAME};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Registry slot for one hoisted object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RegistryKey {
    /// The sample root, or any object reached from the root only through
    /// arrays; emitted under the configured root name
    Root,
    /// Derived PascalCase name of the nearest enclosing key, before any
    /// prefix is applied
    Named(String),
}

#[derive(Debug)]
pub(crate) struct RegistryEntry {
    /// Ticket of the owning visit; assigned on entry
    epoch: u64,
    pub(crate) fields: Vec<Field>,
}

/// Per-invocation collection of hoisted objects, in first-registration order.
///
/// Colliding names resolve to one entry: the object whose visit *entered*
/// last owns the fields, while the entry keeps its first-insertion position.
/// Ownership is tracked with an entry ticket taken on entry, so a nested
/// object that derives its ancestor's name wins even though its visit
/// finishes first.
#[derive(Debug, Default)]
pub(crate) struct ObjectRegistry {
    entries: IndexMap<RegistryKey, RegistryEntry>,
    next_epoch: u64,
}

impl ObjectRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claim a slot on entry into an object; returns the ticket the visit
    /// must present when writing its fields
    fn begin(&mut self, key: RegistryKey) -> u64 {
        let epoch = self.next_epoch;
        self.next_epoch += 1;

        match self.entries.get_mut(&key) {
            Some(entry) => entry.epoch = epoch,
            None => {
                self.entries.insert(
                    key,
                    RegistryEntry {
                        epoch,
                        fields: Vec::new(),
                    },
                );
            }
        }
        epoch
    }

    /// Write the visited fields if the ticket still owns the slot
    fn finish(&mut self, key: &RegistryKey, epoch: u64, fields: Vec<Field>) {
        if let Some(entry) = self.entries.get_mut(key) {
            if entry.epoch == epoch {
                entry.fields = fields;
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, key: &RegistryKey) -> Option<&RegistryEntry> {
        self.entries.get(key)
    }

    /// Consume the registry in first-registration order
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (RegistryKey, RegistryEntry)> {
        self.entries.into_iter()
    }
}

/// Type inferrer with configuration options
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    /// Name for the root declaration
    root_name: String,
    /// Prefix combined into every non-root declaration name
    prefix: String,
    /// Output dialect
    dialect: Dialect,
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferrer {
    /// Create a new inferrer with default settings
    pub fn new() -> Self {
        Self {
            root_name: DEFAULT_ROOT_NAME.to_string(),
            prefix: String::new(),
            dialect: Dialect::TypeScript,
        }
    }

    /// Set the root declaration name (usually the resource name)
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set the prefix combined into non-root declaration names
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the output dialect
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// The configured dialect
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Infer declarations from a single JSON sample.
    ///
    /// Fails with [`Error::InvalidSample`] when the sample contains no object
    /// to declare (scalar, null or array-of-scalars roots) or when the root
    /// object has no fields. Field keys must be valid identifiers and every
    /// name derived for a declaration, the root's included, must be one too.
    pub fn infer(&self, sample: &Value) -> Result<Declarations> {
        if !is_valid_identifier(&pascal_case(&self.root_name)) {
            return Err(Error::invalid_declaration_name(&self.root_name));
        }

        let mut registry = ObjectRegistry::new();
        self.visit(sample, None, &mut registry)?;

        if registry.is_empty() {
            return Err(Error::invalid_sample("nothing to convert"));
        }
        if let Some(root) = registry.get(&RegistryKey::Root) {
            if root.fields.is_empty() {
                return Err(Error::invalid_sample("the root object has no fields"));
            }
        }

        Ok(emit::assemble(registry, self))
    }

    /// Visit one node. `key` is the nearest enclosing object key; array
    /// nesting does not change it.
    fn visit(
        &self,
        value: &Value,
        key: Option<&str>,
        registry: &mut ObjectRegistry,
    ) -> Result<TypeExpr> {
        match value {
            Value::Null => Ok(TypeExpr::Null),
            Value::Bool(_) => Ok(TypeExpr::ident(self.dialect.boolean_token())),
            Value::Number(_) => Ok(TypeExpr::ident(self.dialect.number_token())),
            Value::String(_) => Ok(TypeExpr::ident(self.dialect.string_token())),
            Value::Object(map) => self.visit_object(map, key, registry),
            Value::Array(elements) => self.visit_array(elements, key, registry),
        }
    }

    fn visit_object(
        &self,
        map: &serde_json::Map<String, Value>,
        key: Option<&str>,
        registry: &mut ObjectRegistry,
    ) -> Result<TypeExpr> {
        let registry_key = match key {
            Some(k) => {
                let derived = pascal_case(k);
                if !is_valid_identifier(&derived) {
                    return Err(Error::invalid_declaration_name(k));
                }
                RegistryKey::Named(derived)
            }
            None => RegistryKey::Root,
        };
        let epoch = registry.begin(registry_key.clone());

        let mut fields = Vec::with_capacity(map.len());
        for (field_name, field_value) in map {
            if !is_valid_identifier(field_name) {
                return Err(Error::invalid_field_name(field_name));
            }
            let ty = self.visit(field_value, Some(field_name), registry)?;
            fields.push(Field::new(field_name, ty));
        }

        registry.finish(&registry_key, epoch, fields);
        Ok(TypeExpr::Ident(self.emitted_name(&registry_key)))
    }

    /// Arrays take their element token from the first element only. A scalar
    /// head types the whole array and the remaining elements are never
    /// visited, so objects after a scalar head do not register. Any other
    /// head keeps full element visitation, letting objects in later elements
    /// register (and overwrite).
    fn visit_array(
        &self,
        elements: &[Value],
        key: Option<&str>,
        registry: &mut ObjectRegistry,
    ) -> Result<TypeExpr> {
        let scalar_token = match elements.first() {
            None => return Ok(TypeExpr::List(Vec::new())),
            Some(Value::Bool(_)) => Some(self.dialect.boolean_token()),
            Some(Value::Number(_)) => Some(self.dialect.number_token()),
            Some(Value::String(_)) => Some(self.dialect.string_token()),
            Some(_) => None,
        };
        if let Some(token) = scalar_token {
            return Ok(TypeExpr::Ident(self.dialect.array_of(token)));
        }

        let mut annotated = Vec::with_capacity(elements.len());
        for element in elements {
            annotated.push(self.visit(element, key, registry)?);
        }

        match annotated.first() {
            Some(TypeExpr::Ident(token)) => Ok(TypeExpr::Ident(self.dialect.array_of(token))),
            _ => Ok(TypeExpr::List(annotated)),
        }
    }

    /// Final declaration name for a registry slot
    pub(crate) fn emitted_name(&self, key: &RegistryKey) -> String {
        match key {
            RegistryKey::Root => pascal_case(&self.root_name),
            RegistryKey::Named(name) => {
                if self.prefix.is_empty() {
                    name.clone()
                } else {
                    pascal_case(&format!("{}{}", self.prefix, name))
                }
            }
        }
    }
}

/// Infer declarations from a sample with default settings (convenience)
pub fn infer_declarations(sample: &Value) -> Result<Declarations> {
    TypeInferrer::new().infer(sample)
}
