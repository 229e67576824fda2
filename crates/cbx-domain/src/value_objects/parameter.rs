//! Parameter signature descriptions

use crate::value::Value;

/// Value Object: Declared Parameter
///
/// Structural description of one declared parameter of a callable or
/// initializer, as produced by signature introspection. One ordered
/// sequence exists per callable; specs are immutable once built and are
/// derived per call rather than cached across invocations.
///
/// ## Example
///
/// ```rust
/// use cbx_domain::{ParameterSpec, Value};
///
/// let spec = ParameterSpec::new("timeout", 1)
///     .with_type("Duration")
///     .with_default(Value::new(30_u64));
/// assert!(spec.has_type() && spec.has_default());
/// ```
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Parameter name, matched against named argument entries
    pub name: String,
    /// 0-based position in declaration order
    pub position: usize,
    /// Declared type name, used as a container key for auto-wiring
    pub type_name: Option<String>,
    /// Declared default value, captured at registration time
    pub default: Option<Value>,
}

impl ParameterSpec {
    /// Create a bare parameter with neither declared type nor default
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            type_name: None,
            default: None,
        }
    }

    /// Set the declared type name
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set the declared default value
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Whether a declared type is present
    pub fn has_type(&self) -> bool {
        self.type_name.is_some()
    }

    /// Whether a declared default is present
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
