//! Class/member metadata model shared across prism crates.
//!
//! This crate carries plain-data declarations (classes, properties, methods)
//! together with the declared type-expression tree, and the [`TypeProvider`]
//! capability trait through which the resolver and compatibility engine in
//! `prism-reflect` read them. [`TypeModel`] is the bundled in-memory provider;
//! hosts with their own class graph implement [`TypeProvider`] directly.

mod decl;
mod expr;
mod model;

pub use decl::*;
pub use expr::*;
pub use model::*;
