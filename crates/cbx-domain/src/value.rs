//! Dynamically typed injectable value

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Value Object: Dynamic Injectable Value
///
/// The single currency flowing through the resolution pipeline: container
/// entries, declared defaults, caller-supplied arguments, and resolved
/// argument lists are all `Value`s. It is a cheaply clonable shared handle
/// around `Arc<dyn Any + Send + Sync>` with checked downcasting; the
/// concrete type is whatever the hosting application registered.
///
/// ## Example
///
/// ```rust
/// use cbx_domain::Value;
///
/// let value = Value::new(42_i64);
/// assert_eq!(value.downcast_ref::<i64>(), Some(&42));
/// assert!(value.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct Value(Arc<dyn Any + Send + Sync>);

impl Value {
    /// Wrap a concrete value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the inner value as `T`, if that is its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Shared handle to the inner value as `Arc<T>`, if that is its concrete type
    pub fn downcast_arc<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.0).downcast::<T>().ok()
    }

    /// Whether the inner value has concrete type `T`
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The concrete type is erased; only the handle identity is printable.
        f.debug_tuple("Value").finish()
    }
}
