//! Callable descriptors and registry

use std::collections::HashMap;
use std::sync::Arc;

use cbx_domain::Value;
use cbx_domain::error::{Error, Result};
use cbx_domain::ports::{Invokable, MethodRef};
use cbx_domain::value_objects::{ParameterSpec, ResolvedArguments};

/// Body closure invoked with the fully resolved argument list
pub type FunctionBody = Arc<dyn Fn(ResolvedArguments) -> Result<Value> + Send + Sync>;

/// Registration-table descriptor of a callable.
///
/// Carries the declared parameter sequence, an optional method identity for
/// metadata lookup (plain functions have none), and the body closure. The
/// descriptor is the [`Invokable`] the resolution core consumes.
pub struct FunctionDef {
    /// Registered name
    name: String,
    /// Method identity for metadata lookup; `None` for plain functions
    target: Option<MethodRef>,
    /// Declared parameters, in declaration order
    parameters: Vec<ParameterSpec>,
    /// Body closure
    body: FunctionBody,
}

impl FunctionDef {
    /// Start describing a callable
    pub fn builder(name: impl Into<String>) -> FunctionBuilder {
        FunctionBuilder {
            name: name.into(),
            target: None,
            parameters: Vec::new(),
        }
    }

    /// Registered name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Invokable for FunctionDef {
    fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    fn metadata_target(&self) -> Option<&MethodRef> {
        self.target.as_ref()
    }

    fn invoke(&self, arguments: ResolvedArguments) -> Result<Value> {
        (self.body)(arguments)
    }
}

/// Builder for [`FunctionDef`]
///
/// Parameters are appended in declaration order; positions are assigned
/// automatically.
///
/// ## Example
///
/// ```rust
/// use cbx_domain::Value;
/// use cbx_infrastructure::FunctionDef;
///
/// let def = FunctionDef::builder("greet")
///     .param("name")
///     .param_default("punctuation", Value::new("!".to_string()))
///     .body(|args| {
///         let name = args[0].downcast_ref::<String>().cloned().unwrap_or_default();
///         Ok(Value::new(format!("hello {name}")))
///     });
/// ```
pub struct FunctionBuilder {
    name: String,
    target: Option<MethodRef>,
    parameters: Vec<ParameterSpec>,
}

impl FunctionBuilder {
    /// Bind the callable to a method identity for metadata lookup
    pub fn bound_to(
        mut self,
        type_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        self.target = Some(MethodRef::new(type_name, method_name));
        self
    }

    /// Append a bare parameter
    pub fn param(mut self, name: impl Into<String>) -> Self {
        let position = self.parameters.len();
        self.parameters.push(ParameterSpec::new(name, position));
        self
    }

    /// Append a parameter with a declared type
    pub fn param_typed(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let position = self.parameters.len();
        self.parameters
            .push(ParameterSpec::new(name, position).with_type(type_name));
        self
    }

    /// Append a parameter with a declared default
    pub fn param_default(mut self, name: impl Into<String>, default: Value) -> Self {
        let position = self.parameters.len();
        self.parameters
            .push(ParameterSpec::new(name, position).with_default(default));
        self
    }

    /// Append a parameter with both a declared type and a default.
    ///
    /// The default dominates during resolution; the type only matters to
    /// hosts introspecting the signature.
    pub fn param_typed_default(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        default: Value,
    ) -> Self {
        let position = self.parameters.len();
        self.parameters.push(
            ParameterSpec::new(name, position)
                .with_type(type_name)
                .with_default(default),
        );
        self
    }

    /// Attach the body closure and finish the descriptor
    pub fn body(
        self,
        body: impl Fn(ResolvedArguments) -> Result<Value> + Send + Sync + 'static,
    ) -> FunctionDef {
        FunctionDef {
            name: self.name,
            target: self.target,
            parameters: self.parameters,
            body: Arc::new(body),
        }
    }
}

/// Name-keyed registry of function descriptors
#[derive(Default)]
pub struct FunctionRegistry {
    entries: HashMap<String, Arc<FunctionDef>>,
}

impl FunctionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its name, replacing any previous one
    pub fn register(&mut self, def: FunctionDef) {
        self.entries.insert(def.name().to_owned(), Arc::new(def));
    }

    /// Descriptor registered under `name`
    pub fn resolve(&self, name: &str) -> Result<Arc<FunctionDef>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotRegistered {
                kind: "function",
                name: name.to_string(),
            })
    }

    /// Registered names, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
