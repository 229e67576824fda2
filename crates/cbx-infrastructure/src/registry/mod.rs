//! Registration-Table Descriptors
//!
//! Rust has no runtime reflection, so signatures and injection metadata are
//! declared explicitly. Hosts describe each callable and constructible type
//! once, builder style, and the descriptors double as the signature
//! introspector and the invocation capability the resolution core consumes.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Descriptor Registration Flow            │
//! ├──────────────────────────────────────────────────────────┤
//! │                                                          │
//! │  1. Host declares:   FunctionDef::builder("send")        │
//! │                          .param("to")                    │
//! │                          .param_typed("mailer", "Mailer")│
//! │                          .body(|args| ...)               │
//! │                            ↓                             │
//! │  2. Registry stores: registry.register(def)              │
//! │                            ↓                             │
//! │  3. Core resolves:   registry.resolve("send")            │
//! │                            ↓                             │
//! │  4. Injector calls:  injector.call(&*def, &args)         │
//! │                                                          │
//! └──────────────────────────────────────────────────────────┘
//! ```

/// Callable descriptors and registry
pub mod function;
/// Declarative metadata registry
pub mod metadata;
/// Constructible type descriptors and registry
pub mod types;

// Re-export all registry types
pub use function::{FunctionBody, FunctionBuilder, FunctionDef, FunctionRegistry};
pub use metadata::{MetadataRegistry, TypeMetadata};
pub use types::{ConstructorFn, TypeBuilder, TypeDef, TypeRegistry};
