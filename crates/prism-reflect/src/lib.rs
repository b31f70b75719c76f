//! Cached runtime type introspection over a [`prism_model::TypeProvider`].
//!
//! Two layers share one context object, the [`Reflector`]:
//! - a metadata resolver that memoizes class/property/method handles per
//!   name, so repeated lookups return identity-equal handles;
//! - a type-compatibility engine that decides whether a concrete class
//!   satisfies a property's declared type constraint (including union and
//!   intersection constraints), memoized per interned expression identity
//!   and candidate name.

mod arena;
mod compat;
mod error;
mod handles;
mod reflector;

pub use arena::TypeExprId;
pub use error::{ReflectError, Result};
pub use handles::{ClassHandle, MethodHandle, PropertyHandle};
pub use reflector::{ClassIdentifier, Reflector};
