//! Type declaration synthesis
//!
//! Infers named type declarations from a single JSON sample and renders
//! them as TypeScript, Flow or GraphQL SDL source.
//!
//! # Features
//!
//! - **Hoisting**: every object sub-tree becomes its own named declaration,
//!   referenced by name where it occurred
//! - **Deterministic naming**: declaration names derive from the nearest
//!   enclosing JSON key, PascalCased; the root takes the resource name
//! - **Scalar/array tokens**: per-dialect tokens, arrays typed from their
//!   first element
//! - **Prefixing**: optional resource-name prefix on nested declarations

mod emit;
mod names;
mod types;
mod visitor;

pub use types::{Declaration, Declarations, Dialect, Field, TypeExpr, DEFAULT_ROOT_NAME};
pub use visitor::{infer_declarations, TypeInferrer};
