//! Signature introspection and invocation ports
//!
//! Rust has no runtime reflection, so callables and constructible types are
//! described through registration-table descriptors implementing these
//! traits. Each descriptor plays two roles: it exposes the declared
//! parameter sequence (the signature introspector) and an "invoke with an
//! ordered argument list" capability (the invocation plumbing).

use crate::error::Result;
use crate::value::Value;
use crate::value_objects::{ParameterSpec, ResolvedArguments};

/// Identity of a bound method, used for metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRef {
    /// Name of the owning type
    pub type_name: String,
    /// Method name
    pub method_name: String,
}

impl MethodRef {
    /// Create a method reference
    pub fn new(type_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            method_name: method_name.into(),
        }
    }
}

/// A callable with an introspectable signature.
pub trait Invokable: Send + Sync {
    /// Declared parameter sequence, in declaration order
    fn parameters(&self) -> &[ParameterSpec];

    /// Method identity used for metadata lookup; `None` for plain functions
    fn metadata_target(&self) -> Option<&MethodRef>;

    /// Invoke the underlying target with a fully resolved argument list.
    ///
    /// Errors raised by the body propagate unmodified; the resolution core
    /// never wraps, swallows, or retries them.
    fn invoke(&self, arguments: ResolvedArguments) -> Result<Value>;
}

/// A type that can be constructed from resolved arguments.
pub trait Instantiable: Send + Sync {
    /// Name of the described type
    fn type_name(&self) -> &str;

    /// Declared initializer parameters; `None` when the type declares no
    /// initializer and is constructed with zero arguments
    fn initializer(&self) -> Option<&[ParameterSpec]>;

    /// Construct an instance from a fully resolved argument list
    fn instantiate(&self, arguments: ResolvedArguments) -> Result<Value>;
}

/// Explicit mutable-field-access capability for property injection.
///
/// Stands in for reflection-forced field assignment: a host type opts into
/// property injection by enumerating its injectable fields and exposing a
/// setter keyed by field name.
pub trait InjectTarget {
    /// Name of the concrete type, matched against property metadata
    fn type_name(&self) -> &str;

    /// Declared field names, in declaration order
    fn fields(&self) -> &[&str];

    /// Assign `value` into `field`.
    ///
    /// Fails with [`Error::UnknownField`](crate::error::Error::UnknownField)
    /// when `field` is not one of the declared fields.
    fn set_field(&mut self, field: &str, value: Value) -> Result<()>;
}
