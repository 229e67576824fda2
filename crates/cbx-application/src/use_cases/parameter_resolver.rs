//! Parameter Resolution Use Case
//!
//! The core decision logic of CallBox: given a callable's declared
//! parameter sequence and the caller-supplied arguments, produce a
//! position-ordered argument list ready for invocation.

use std::collections::BTreeMap;
use std::sync::Arc;

use cbx_domain::Value;
use cbx_domain::error::{Error, Result};
use cbx_domain::ports::Container;
use cbx_domain::value_objects::{ArgumentMap, ParameterSpec, ResolvedArguments};
use tracing::{debug, trace};

/// Computes the final positional argument list for one resolution request.
///
/// Per parameter, in declared order, the first matching source wins:
///
/// 1. a caller-supplied named entry matching the parameter name,
/// 2. the declared default value,
/// 3. a container lookup under the declared type name (an absent entry is
///    fatal and names the missing type),
/// 4. otherwise the parameter position is deferred as pending-positional.
///
/// After the per-parameter pass, positional entries of the argument map fill
/// the pending slots: ascending key order onto ascending position order.
/// Fewer positional entries than pending slots is an argument count
/// mismatch; excess entries are silently unused.
///
/// Defaults strictly dominate type-based auto-wiring: the container is
/// never consulted for a defaulted parameter. Resolution either yields a
/// complete ordered list or fails before any invocation is attempted.
pub struct ParameterResolver {
    container: Arc<dyn Container>,
}

impl ParameterResolver {
    /// Create a resolver reading from `container`
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }

    /// Resolve `parameters` against `provided`, producing exactly one value
    /// per declared parameter in strictly ascending position order.
    pub fn resolve(
        &self,
        parameters: &[ParameterSpec],
        provided: &ArgumentMap,
    ) -> Result<ResolvedArguments> {
        let mut resolved: BTreeMap<usize, Value> = BTreeMap::new();
        let mut pending: Vec<usize> = Vec::new();

        for parameter in parameters {
            if let Some(value) = provided.named(&parameter.name) {
                trace!(parameter = %parameter.name, source = "named", "parameter resolved");
                resolved.insert(parameter.position, value.clone());
            } else if let Some(default) = &parameter.default {
                trace!(parameter = %parameter.name, source = "default", "parameter resolved");
                resolved.insert(parameter.position, default.clone());
            } else if let Some(type_name) = &parameter.type_name {
                resolved.insert(parameter.position, self.value_for_type(type_name)?);
                trace!(parameter = %parameter.name, source = "container", "parameter resolved");
            } else {
                pending.push(parameter.position);
            }
        }

        let available = provided.positional_len();
        if pending.len() > available {
            debug!(
                pending = pending.len(),
                available, "not enough positional arguments for pending parameters"
            );
            return Err(Error::ArgumentCountMismatch {
                pending: pending.len(),
                available,
            });
        }

        // Ascending key order onto ascending position order; excess
        // positional entries are silently unused.
        for (position, value) in pending.iter().zip(provided.positional_values()) {
            resolved.insert(*position, value.clone());
        }

        // Default/type/positional fills land out of declaration order;
        // BTreeMap iteration re-sorts them into a call-ready list.
        Ok(resolved.into_values().collect())
    }

    /// Container lookup for a declared parameter type
    fn value_for_type(&self, type_name: &str) -> Result<Value> {
        if self.container.has(type_name) {
            return self.container.get(type_name);
        }
        Err(Error::MissingProvider {
            type_name: type_name.to_string(),
        })
    }
}
