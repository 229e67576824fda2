//! Constructible type descriptors and registry

use std::collections::HashMap;
use std::sync::Arc;

use cbx_domain::Value;
use cbx_domain::error::{Error, Result};
use cbx_domain::ports::Instantiable;
use cbx_domain::value_objects::{ParameterSpec, ResolvedArguments};

/// Constructor closure invoked with the fully resolved argument list
pub type ConstructorFn = Arc<dyn Fn(ResolvedArguments) -> Result<Value> + Send + Sync>;

/// Registration-table descriptor of a constructible type.
///
/// A type with no declared initializer parameters is constructed with an
/// empty argument list; the constructor closure decides what "zero
/// arguments" means for the concrete type.
pub struct TypeDef {
    /// Described type name
    type_name: String,
    /// Declared initializer parameters; `None` when no initializer exists
    initializer: Option<Vec<ParameterSpec>>,
    /// Constructor closure
    constructor: ConstructorFn,
}

impl TypeDef {
    /// Start describing a type
    pub fn builder(type_name: impl Into<String>) -> TypeBuilder {
        TypeBuilder {
            type_name: type_name.into(),
            parameters: Vec::new(),
        }
    }
}

impl Instantiable for TypeDef {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn initializer(&self) -> Option<&[ParameterSpec]> {
        self.initializer.as_deref()
    }

    fn instantiate(&self, arguments: ResolvedArguments) -> Result<Value> {
        (self.constructor)(arguments)
    }
}

/// Builder for [`TypeDef`]
///
/// Initializer parameters are appended in declaration order with automatic
/// positions; declaring none yields a type without an initializer.
///
/// ## Example
///
/// ```rust
/// use cbx_domain::Value;
/// use cbx_infrastructure::TypeDef;
///
/// struct Service {
///     retries: u32,
/// }
///
/// let def = TypeDef::builder("Service")
///     .param_default("retries", Value::new(3_u32))
///     .constructor(|args| {
///         let retries = args[0].downcast_ref::<u32>().copied().unwrap_or(0);
///         Ok(Value::new(Service { retries }))
///     });
/// ```
pub struct TypeBuilder {
    type_name: String,
    parameters: Vec<ParameterSpec>,
}

impl TypeBuilder {
    /// Append a bare initializer parameter
    pub fn param(mut self, name: impl Into<String>) -> Self {
        let position = self.parameters.len();
        self.parameters.push(ParameterSpec::new(name, position));
        self
    }

    /// Append an initializer parameter with a declared type
    pub fn param_typed(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let position = self.parameters.len();
        self.parameters
            .push(ParameterSpec::new(name, position).with_type(type_name));
        self
    }

    /// Append an initializer parameter with a declared default
    pub fn param_default(mut self, name: impl Into<String>, default: Value) -> Self {
        let position = self.parameters.len();
        self.parameters
            .push(ParameterSpec::new(name, position).with_default(default));
        self
    }

    /// Attach the constructor closure and finish the descriptor
    pub fn constructor(
        self,
        constructor: impl Fn(ResolvedArguments) -> Result<Value> + Send + Sync + 'static,
    ) -> TypeDef {
        TypeDef {
            type_name: self.type_name,
            initializer: if self.parameters.is_empty() {
                None
            } else {
                Some(self.parameters)
            },
            constructor: Arc::new(constructor),
        }
    }
}

/// Name-keyed registry of type descriptors
#[derive(Default)]
pub struct TypeRegistry {
    entries: HashMap<String, Arc<TypeDef>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its type name, replacing any previous one
    pub fn register(&mut self, def: TypeDef) {
        self.entries.insert(def.type_name.clone(), Arc::new(def));
    }

    /// Descriptor registered under `type_name`
    pub fn resolve(&self, type_name: &str) -> Result<Arc<TypeDef>> {
        self.entries
            .get(type_name)
            .cloned()
            .ok_or_else(|| Error::NotRegistered {
                kind: "type",
                name: type_name.to_string(),
            })
    }

    /// Registered type names, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
